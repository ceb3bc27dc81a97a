#[path = "../common/mod.rs"]
mod common;

mod config_tests;
mod geometry_tests;
