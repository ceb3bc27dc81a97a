use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};
use tracing::{error, info, warn};

use crate::{
    avl::{write_avl_file, write_mass_file, write_run_file},
    components::{AircraftConfig, SimulationCase},
    config::RunnerConfig,
    utils::PavlError,
};

/// Marker line where the useful part of the stability output starts.
const STABILITY_MARKER: &str = "Stability-axis derivatives";

/// Paths of every file belonging to one job inside the results directory.
#[derive(Debug, Clone, PartialEq)]
pub struct JobFiles {
    pub geometry: PathBuf,
    pub mass: PathBuf,
    pub run: PathBuf,
    pub commands: PathBuf,
    pub forces: PathBuf,
    pub stability: PathBuf,
    pub sim: PathBuf,
}

impl JobFiles {
    pub fn new(dir: &Path, job: &str) -> Self {
        Self {
            geometry: dir.join(format!("{}.avl", job)),
            mass: dir.join(format!("{}.mass", job)),
            run: dir.join(format!("{}.run", job)),
            commands: dir.join(format!("{}_avl_commands.txt", job)),
            forces: dir.join(format!("{}_forces.txt", job)),
            stability: dir.join(format!("{}_stability.txt", job)),
            sim: dir.join(format!("{}.sim", job)),
        }
    }

    /// Files produced only to drive or capture a solver run.
    fn intermediates(&self) -> [&Path; 3] {
        [
            self.commands.as_path(),
            self.forces.as_path(),
            self.stability.as_path(),
        ]
    }
}

/// Keystrokes fed to the solver: load the three inputs, run the case, save forces and
/// stability derivatives, then quit.
pub fn command_script(files: &JobFiles) -> String {
    format!(
        "load {}\ncase {}\nmass {}\nmset 0\noper\nx\nw\n{}\nst\n{}\n\nquit\n",
        files.geometry.display(),
        files.run.display(),
        files.mass.display(),
        files.forces.display(),
        files.stability.display()
    )
}

/// Joins the forces output and the stability output into one result document.
///
/// Stability output is kept from the line containing the derivatives marker onwards, or
/// whole when the marker is absent.
pub fn merge_results(forces: &str, stability: &str) -> String {
    let start = stability
        .find(STABILITY_MARKER)
        .map(|pos| stability[..pos].rfind('\n').map_or(0, |nl| nl + 1))
        .unwrap_or(0);

    let mut merged = String::with_capacity(forces.len() + stability.len() + 5);
    merged.push_str(forces);
    merged.push_str("\n\n\n\n\n");
    merged.push_str(&stability[start..]);
    merged
}

/// Writes solver inputs for a job and optionally runs the solver on them.
#[derive(Debug, Clone, Default)]
pub struct AvlRunner {
    config: RunnerConfig,
}

impl AvlRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Writes the geometry, mass, run-case and command files into the results directory.
    pub fn prepare(
        &self,
        job: &str,
        aircraft: &AircraftConfig,
        case: &SimulationCase,
    ) -> Result<JobFiles, PavlError> {
        fs::create_dir_all(&self.config.results_dir)?;
        let files = JobFiles::new(&self.config.results_dir, job);

        write_avl_file(&files.geometry, job, aircraft, case)?;
        write_mass_file(&files.mass, job, aircraft, case)?;
        write_run_file(&files.run, job, case)?;
        fs::write(&files.commands, command_script(&files))?;

        Ok(files)
    }

    /// Prepares the job, runs the solver, and merges its output into `<job>.sim`.
    ///
    /// Returns the path of the merged result file.
    pub fn run(
        &self,
        job: &str,
        aircraft: &AircraftConfig,
        case: &SimulationCase,
    ) -> Result<PathBuf, PavlError> {
        let files = self.prepare(job, aircraft, case)?;

        info!(
            "Running {} for job '{}'",
            self.config.avl_executable.display(),
            job
        );
        let output = Command::new(&self.config.avl_executable)
            .stdin(Stdio::from(File::open(&files.commands)?))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                error!("Failed to start solver: {}", e);
                PavlError::Solver(format!(
                    "failed to start {}: {}",
                    self.config.avl_executable.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            error!(
                status = ?output.status,
                "Solver exited abnormally: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }

        let forces = read_if_present(&files.forces)?;
        let stability = read_if_present(&files.stability)?;
        if forces.is_none() && stability.is_none() {
            return Err(PavlError::Solver(format!(
                "job '{}' produced no output files",
                job
            )));
        }

        fs::write(
            &files.sim,
            merge_results(
                forces.as_deref().unwrap_or_default(),
                stability.as_deref().unwrap_or_default(),
            ),
        )?;

        if !self.config.keep_intermediates {
            for path in files.intermediates() {
                if let Err(e) = fs::remove_file(path) {
                    warn!("Could not delete {}: {}", path.display(), e);
                }
            }
        }

        info!("Solver run complete, results in {}", files.sim.display());
        Ok(files.sim)
    }
}

fn read_if_present(path: &Path) -> Result<Option<String>, PavlError> {
    if path.exists() {
        Ok(Some(fs::read_to_string(path)?))
    } else {
        Ok(None)
    }
}
