use std::{fs::File, io::Write, path::Path};
use tracing::info;

use crate::{
    components::{AlphaConstraint, ElevatorConstraint, SimulationCase},
    utils::PavlError,
};

/// Writes a single run case. Sideslip and body rates are always trimmed to zero.
pub fn write_run<W: Write>(out: &mut W, job: &str, case: &SimulationCase) -> Result<(), PavlError> {
    writeln!(out)?;
    writeln!(out, "---------------------------------------------")?;
    writeln!(out, " Run case  1:  {}", job)?;
    writeln!(out)?;

    match case.alpha {
        AlphaConstraint::Angle(v) => writeln!(out, " alpha        ->  alpha       =   {:<8.4}", v)?,
        AlphaConstraint::Cl(v) => writeln!(out, " alpha        ->  CL          =   {:<8.4}", v)?,
        AlphaConstraint::Cm(v) => writeln!(out, " alpha        ->  Cm pitchmom =   {:<8.4}", v)?,
    }
    writeln!(out, " beta         ->  beta        =   0.00000")?;
    writeln!(out, " pb/2V        ->  pb/2V       =   0.00000")?;
    writeln!(out, " qc/2V        ->  qc/2V       =   0.00000")?;
    writeln!(out, " rb/2V        ->  rb/2V       =   0.00000")?;

    if let Some(flap) = case.flap {
        writeln!(out, " flap         ->  flap        =   {:<8.4}", flap)?;
    }
    match case.elevator {
        Some(ElevatorConstraint::Deflection(v)) => {
            writeln!(out, " elevator     ->  elevator    =   {:<8.4}", v)?
        }
        Some(ElevatorConstraint::Cm(v)) => {
            writeln!(out, " elevator     ->  Cm pitchmom =   {:<8.4}", v)?
        }
        None => {}
    }

    writeln!(out)?;
    Ok(())
}

pub fn write_run_file(
    path: impl AsRef<Path>,
    job: &str,
    case: &SimulationCase,
) -> Result<(), PavlError> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    write_run(&mut file, job, case)?;
    info!("Wrote run case file {}", path.display());
    Ok(())
}
