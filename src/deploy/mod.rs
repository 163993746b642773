//! Manual deployment planning: load the deploy set, survey the migrations
//! directory, and assemble the operator instructions.

pub mod instructions;

pub use instructions::{ManualDeployment, RUN_FROM_ROOT_HINT};

use crate::config::Config;
use crate::error::DeployError;
use crate::migrations;
use tracing::warn;

/// Loads every configured migration file and builds the instruction
/// document. Instructions exist only once all files have been read.
pub fn prepare(cfg: &Config) -> Result<ManualDeployment, DeployError> {
    let scripts = migrations::load_deploy_set(&cfg.migrations_dir, &cfg.deploy_files)?;

    let surveyed = migrations::survey_dir(&cfg.migrations_dir)?;
    let extra = surveyed
        .iter()
        .filter(|found| !scripts.iter().any(|s| &s.path == *found))
        .count();
    if extra > 0 {
        warn!(
            count = extra,
            dir = %cfg.migrations_dir.display(),
            "migrations directory holds scripts outside the deploy set"
        );
    }

    ManualDeployment::new(cfg, &scripts)
}
