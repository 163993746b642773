use schema_deploy::config::{self, Config};
use schema_deploy::deploy;
use schema_deploy::error::DeployError;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cfg = &config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        project_ref = %cfg.project_ref,
        migrations_dir = %cfg.migrations_dir.display(),
        deploy_files = cfg.deploy_files.len(),
        loglevel = %cfg.loglevel
    );

    match run(cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ DeployError::ScriptNotFound { .. }) => {
            println!("❌ Error: {err}");
            println!("{}", deploy::RUN_FROM_ROOT_HINT);
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(error = %err, "failed to prepare deployment");
            ExitCode::FAILURE
        }
    }
}

fn run(cfg: &Config) -> Result<(), DeployError> {
    println!("🚀 Deploying database schema to Supabase...");
    println!("📍 Project: {}", cfg.project_url()?);
    println!();

    println!("📖 Reading migration files...");
    let deployment = deploy::prepare(cfg)?;
    println!("✅ Migration files loaded");
    println!();

    // Raw SQL cannot be executed over the hosted REST surface, so the run
    // ends by handing the operator the console steps.
    println!("❌ Direct SQL execution requires a database connection");
    println!();
    print!("{deployment}");
    Ok(())
}
