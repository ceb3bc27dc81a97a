//! Text files consumed by the AVL vortex-lattice solver, and a runner that drives it.
//!
//! The writers are generic over [`std::io::Write`] so they can target files or buffers.

mod format;
mod geometry;
mod mass;
mod run;
mod runner;

pub use format::format_general;
pub use geometry::{write_avl, write_avl_file, write_surface};
pub use mass::{write_mass, write_mass_file};
pub use run::{write_run, write_run_file};
pub use runner::{command_script, merge_results, AvlRunner, JobFiles};
