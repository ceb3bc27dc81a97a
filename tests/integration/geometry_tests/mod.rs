mod controls;
mod properties;
