use serde::{Deserialize, Serialize};

use crate::components::{ChordMode, ChordSpec};

/// Root and tip chord of a section together with the derived taper ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChordLengths {
    pub root: f64,
    pub tip: f64,
    pub taper: f64,
}

/// Resolves the two authoritative chord values of a section into root, tip and taper.
///
/// # Arguments
/// * `spec` - The section's chord parameterization.
///
/// # Returns
/// The resolved `ChordLengths`; the third quantity is always derived as `taper = tip / root`.
pub fn resolve_chord(spec: &ChordSpec) -> ChordLengths {
    match *spec {
        ChordSpec::RootAndTaper { root, taper } => ChordLengths {
            root,
            tip: root * taper,
            taper,
        },
        ChordSpec::TipAndTaper { tip, taper } => ChordLengths {
            root: tip / taper,
            tip,
            taper,
        },
        ChordSpec::RootAndTip { root, tip } => ChordLengths {
            root,
            tip,
            taper: tip / root,
        },
    }
}

/// Re-expresses resolved chords in another parameterization.
pub fn to_spec(chords: &ChordLengths, mode: ChordMode) -> ChordSpec {
    match mode {
        ChordMode::RootAndTaper => ChordSpec::RootAndTaper {
            root: chords.root,
            taper: chords.taper,
        },
        ChordMode::TipAndTaper => ChordSpec::TipAndTaper {
            tip: chords.tip,
            taper: chords.taper,
        },
        ChordMode::RootAndTip => ChordSpec::RootAndTip {
            root: chords.root,
            tip: chords.tip,
        },
    }
}
