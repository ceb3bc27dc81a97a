mod builders;
mod errors;
mod runner;

pub use builders::*;
pub(crate) use builders::build_controls;
pub use errors::ConfigError;
pub use runner::{RunnerConfig, AVL_PATH_ENV, RESULTS_DIR_ENV};
