//! Resolution of a sparse planform description into solver-ready cross-sections.
//!
//! The per-station functions ([`resolve_chord`], [`project_leading_edge`],
//! [`interpolate_incidence`]) are pure. [`accumulate_sections`] walks the user-defined
//! section boundaries, [`resolve_control_breakpoints`] and [`interpolate_at_span`] add
//! stations at control-surface edges, and [`resolve_surface`] merges both into the final
//! sequence.

mod accumulator;
mod chord;
mod controls;
mod error;
mod incidence;
mod interpolate;
mod leading_edge;
mod merge;
mod station;
mod summary;

pub use accumulator::accumulate_sections;
pub use chord::{resolve_chord, to_spec, ChordLengths};
pub use controls::{resolve_control_breakpoints, ControlBreakpoint, ControlEdge};
pub use error::GeometryError;
pub use incidence::interpolate_incidence;
pub use interpolate::interpolate_at_span;
pub use leading_edge::project_leading_edge;
pub use merge::{merge_stations, resolve_surface};
pub use station::{ControlMetadata, ResolvedStation, StationOrigin};
pub use summary::PlanformSummary;
