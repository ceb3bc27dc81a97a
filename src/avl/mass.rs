use std::{fs::File, io::Write, path::Path};
use tracing::info;

use crate::{
    components::{AircraftConfig, SimulationCase},
    utils::PavlError,
};

/// Writes the mass file: unit header, gravity and density, then one row per mass item.
///
/// Density comes from the case, so the same aircraft produces a different file per case.
pub fn write_mass<W: Write>(
    out: &mut W,
    job: &str,
    aircraft: &AircraftConfig,
    case: &SimulationCase,
) -> Result<(), PavlError> {
    let (length, mass, time) = aircraft.units.unit_labels();

    writeln!(out, "#1")?;
    writeln!(out, "# {}", job)?;
    writeln!(out, "Lunit = 1.0     {}", length)?;
    writeln!(out, "Munit = 1.0     {}", mass)?;
    writeln!(out, "Tunit = 1.0     {}", time)?;
    writeln!(out, "g     = {:<8.2}", aircraft.units.gravity())?;
    writeln!(out, "rho   = {:<8.5}", case.rho)?;
    writeln!(out)?;

    for item in &aircraft.mass {
        let p = &item.position;
        writeln!(
            out,
            "{:<10.6} {:<10.6} {:<10.6} {:<10.6} {:<10.6} {:<10.6} {:<10.6} {:<10.6} {:<10.6} {:<10.6} ! {}",
            item.mass, p.x, p.y, p.z, item.ixx, item.iyy, item.izz, item.ixy, item.ixz, item.iyz, item.name
        )?;
    }
    Ok(())
}

pub fn write_mass_file(
    path: impl AsRef<Path>,
    job: &str,
    aircraft: &AircraftConfig,
    case: &SimulationCase,
) -> Result<(), PavlError> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    write_mass(&mut file, job, aircraft, case)?;
    info!("Wrote mass file {}", path.display());
    Ok(())
}
