pub const GRAVITY_MKS: f64 = 9.81; // m/s^2
pub const GRAVITY_FPS: f64 = 32.17; // ft/s^2

// Geometry tolerances
pub const CHORD_CONTINUITY_TOLERANCE: f64 = 1e-6; // Max root/tip mismatch between adjacent sections
pub const SPAN_MERGE_TOLERANCE: f64 = 1e-6; // Stations closer than this are the same breakpoint
pub const SPAN_RANGE_TOLERANCE: f64 = 1e-9; // Relative slack at the tip when interpolating

// Default panel discretization written to each SURFACE block
pub const DEFAULT_N_CHORD: u32 = 10;
pub const DEFAULT_C_SPACE: f64 = 1.0;
pub const DEFAULT_N_SPAN: u32 = 22;
pub const DEFAULT_S_SPACE: f64 = 1.0;

pub const DEFAULT_AIRFOIL: &str = "0012";
pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const DEFAULT_AVL_EXECUTABLE: &str = "avl";
