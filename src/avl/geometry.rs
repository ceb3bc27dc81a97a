use std::{fs::File, io::Write, path::Path};
use tracing::info;

use crate::{
    avl::format::{format_general, unsigned_zero},
    components::{AircraftConfig, SimulationCase, Surface},
    geometry::{resolve_surface, ControlMetadata, ResolvedStation},
    utils::PavlError,
};

const SURFACE_RULE: &str = "#==============================================================";
const SECTION_RULE: &str = "#--------------------------------------------------------------";

/// Writes the complete geometry file: reference header followed by every surface.
///
/// Each surface is resolved independently; the first surface that fails to resolve aborts the
/// write.
pub fn write_avl<W: Write>(
    out: &mut W,
    job: &str,
    aircraft: &AircraftConfig,
    case: &SimulationCase,
) -> Result<(), PavlError> {
    let reference = &aircraft.reference;

    writeln!(out, "{}", job)?;
    writeln!(out, "{:.1}                   !   Mach", case.mach)?;
    writeln!(out, "0     0     0.0       !   iYsym  iZsym  Zsym")?;
    writeln!(
        out,
        "{} {} {}       !   Sref   Cref   Bref",
        format_general(reference.sref, 4),
        format_general(reference.cref, 4),
        format_general(reference.bref, 4)
    )?;
    writeln!(
        out,
        "{:.2}  {:.1}   {:.1}       !   Xref   Yref   Zref   moment reference location (arb.)",
        reference.moment.x, reference.moment.y, reference.moment.z
    )?;
    writeln!(out, "{:.5}                 !   CDp", case.cdo)?;

    for surface in &aircraft.surfaces {
        write_surface(out, surface)?;
    }
    Ok(())
}

pub fn write_avl_file(
    path: impl AsRef<Path>,
    job: &str,
    aircraft: &AircraftConfig,
    case: &SimulationCase,
) -> Result<(), PavlError> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    write_avl(&mut file, job, aircraft, case)?;
    info!("Wrote geometry file {}", path.display());
    Ok(())
}

/// Writes one SURFACE block with a SECTION record per resolved station.
pub fn write_surface<W: Write>(out: &mut W, surface: &Surface) -> Result<(), PavlError> {
    let stations = resolve_surface(surface)?;
    let grid = &surface.discretization;

    writeln!(out)?;
    writeln!(out, "#")?;
    writeln!(out, "{}", SURFACE_RULE)?;
    writeln!(out, "#")?;
    writeln!(out, "SURFACE")?;
    writeln!(out, "{}", surface.name)?;
    writeln!(
        out,
        "{}  {:.1}  {}  {:.1}   ! Nchord   Cspace   Nspan  Sspace",
        grid.n_chord, grid.c_space, grid.n_span, grid.s_space
    )?;
    writeln!(out, "#")?;
    writeln!(out, "YDUPLICATE")?;
    writeln!(out, "     0.00000")?;
    writeln!(out)?;
    writeln!(out, "ANGLE")?;
    writeln!(out, "     {:.4}", surface.incidence)?;
    writeln!(out, "SCALE")?;
    writeln!(out, "  1.0   1.0   1.0")?;
    writeln!(out, "TRANSLATE")?;
    writeln!(
        out,
        "    {:.5}     {:.5}     {:.5}",
        surface.position.x, surface.position.y, surface.position.z
    )?;

    for station in &stations {
        write_section(out, station, &surface.airfoil)?;
    }
    Ok(())
}

fn write_section<W: Write>(
    out: &mut W,
    station: &ResolvedStation,
    airfoil: &str,
) -> Result<(), PavlError> {
    let le = &station.leading_edge;

    writeln!(out)?;
    writeln!(out, "{}", SECTION_RULE)?;
    writeln!(out, "#    Xle         Yle         Zle         chord       ainc")?;
    writeln!(out, "SECTION")?;
    writeln!(
        out,
        "    {:.5}     {:.5}     {:.5}     {:.5}     {:.4}",
        unsigned_zero(le.x),
        unsigned_zero(le.y),
        unsigned_zero(le.z),
        station.chord,
        unsigned_zero(station.incidence)
    )?;
    writeln!(out, "NACA")?;
    writeln!(out, "{}", airfoil)?;

    for control in &station.controls {
        write_control(out, control)?;
    }
    Ok(())
}

fn write_control<W: Write>(out: &mut W, control: &ControlMetadata) -> Result<(), PavlError> {
    let axis = control.control_type.hinge_axis();
    writeln!(out, "CONTROL")?;
    writeln!(
        out,
        "    {}     1.0     {:.3}     {:.1} {:.1} {:.1}     {:.1}",
        control.name,
        control.hinge,
        axis.x,
        axis.y,
        axis.z,
        control.control_type.duplication_sign()
    )?;
    Ok(())
}
