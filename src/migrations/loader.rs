use crate::error::DeployError;
use crate::migrations::script::MigrationScript;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

/// Read the configured deploy set from `dir`, in version order.
///
/// A missing file is the distinguished failure here: it aborts the load and
/// names the path so the operator can tell which script is absent.
pub fn load_deploy_set(dir: &Path, names: &[String]) -> Result<Vec<MigrationScript>, DeployError> {
    let mut scripts = Vec::with_capacity(names.len());

    for name in names {
        let path = dir.join(name);
        let sql = match fs::read_to_string(&path) {
            Ok(sql) => sql,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DeployError::ScriptNotFound { path });
            }
            Err(e) => return Err(e.into()),
        };
        let script = MigrationScript::parse(path, sql)?;

        match script.created_at() {
            Some(ts) => info!(
                path = %script.path.display(),
                version = %ts,
                bytes = script.sql.len(),
                "loaded migration script"
            ),
            None => info!(
                path = %script.path.display(),
                version = script.version,
                bytes = script.sql.len(),
                "loaded migration script"
            ),
        }
        scripts.push(script);
    }

    scripts.sort_by_key(|s| s.version);
    Ok(scripts)
}

/// List the `.sql` entries in the migrations directory. A missing directory
/// yields an empty survey, not an error.
pub fn survey_dir(dir: &Path) -> Result<Vec<PathBuf>, DeployError> {
    if !dir.exists() {
        info!(path = %dir.display(), "migrations directory not found; nothing to survey");
        return Ok(Vec::new());
    }

    let mut found: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                let err: DeployError = e.into();
                warn!(error = %err, "failed to read migrations dir entry");
                None
            }
        })
        .filter(|path| is_sql_file(path))
        .collect();

    found.sort();
    Ok(found)
}

fn is_sql_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("sql"))
        == Some(true)
}
