pub mod avl;
pub mod components;
pub mod config;
pub mod geometry;
pub mod utils;

pub use avl::AvlRunner;
pub use components::{AircraftConfig, AircraftSource, Surface};
pub use geometry::{resolve_surface, ResolvedStation};
pub use utils::PavlError;
