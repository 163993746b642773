use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::{path::PathBuf, sync::LazyLock};
use url::Url;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Supabase project identifier, embedded in the project host and the
    /// dashboard URLs.
    /// Env: `PROJECT_REF`. Must be non-empty.
    #[serde(default)]
    #[serde(deserialize_with = "deserialize_string_lax")]
    pub project_ref: String,

    /// Directory holding the migration SQL files, relative to the project
    /// root.
    /// Env: `MIGRATIONS_DIR`. Default: `supabase/migrations`.
    #[serde(default)]
    pub migrations_dir: PathBuf,

    /// Ordered file names making up the deployment.
    /// Env: `DEPLOY_FILES`. Default: the core-tables and seed-data scripts.
    #[serde(default)]
    pub deploy_files: Vec<String>,

    /// Log level for tracing subscriber initialization (e.g., "error",
    /// "warn", "info", "debug", "trace").
    /// Env: `LOGLEVEL`. Default: `info`.
    #[serde(default)]
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_ref: "kungwkbivwvkygggykem".to_string(),
            migrations_dir: PathBuf::from("supabase/migrations"),
            deploy_files: vec![
                "20251119045603_create_core_tables.sql".to_string(),
                "20251119050025_seed_initial_data.sql".to_string(),
            ],
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Builds a Figment that merges defaults and environment variables.
    /// Uses raw env mapping, so field names map to env vars in
    /// UPPER_SNAKE_CASE.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::raw())
    }

    /// Loads configuration from the environment (with defaults) and
    /// validates required fields.
    pub fn from_env() -> Self {
        let cfg: Self = Self::figment()
            .extract()
            .expect("failed to extract configuration via Figment");
        if cfg.project_ref.trim().is_empty() {
            panic!("PROJECT_REF must be set and non-empty");
        }
        if cfg.deploy_files.is_empty() {
            panic!("DEPLOY_FILES must name at least one migration file");
        }
        cfg
    }

    /// API host for the project, `https://{ref}.supabase.co`.
    pub fn project_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("https://{}.supabase.co", self.project_ref))
    }

    /// Dashboard landing page; visiting it wakes a paused project.
    pub fn dashboard_url(&self) -> Result<Url, url::ParseError> {
        SUPABASE_DASHBOARD_BASE.join(&self.project_ref)
    }

    /// SQL editor page where migration files are pasted and run.
    pub fn sql_editor_url(&self) -> Result<Url, url::ParseError> {
        SUPABASE_DASHBOARD_BASE.join(&format!("{}/sql/new", self.project_ref))
    }
}

fn deserialize_string_lax<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;

    match v {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(serde::de::Error::custom(
            "expected a string or a number for PROJECT_REF",
        )),
    }
}

/// Global, lazily-initialized configuration instance.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);

/// Supabase console base; per-project pages join onto this.
pub static SUPABASE_DASHBOARD_BASE: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://supabase.com/dashboard/project/").expect("valid Supabase dashboard base URL")
});

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn project_urls_embed_the_project_ref() {
        let cfg = Config::default();

        assert_eq!(
            cfg.project_url().expect("project url").as_str(),
            "https://kungwkbivwvkygggykem.supabase.co/"
        );
        assert_eq!(
            cfg.dashboard_url().expect("dashboard url").as_str(),
            "https://supabase.com/dashboard/project/kungwkbivwvkygggykem"
        );
        assert_eq!(
            cfg.sql_editor_url().expect("sql editor url").as_str(),
            "https://supabase.com/dashboard/project/kungwkbivwvkygggykem/sql/new"
        );
    }

    #[test]
    fn default_deploy_set_is_core_tables_then_seed_data() {
        let cfg = Config::default();

        assert_eq!(cfg.deploy_files.len(), 2);
        assert!(cfg.deploy_files[0].contains("create_core_tables"));
        assert!(cfg.deploy_files[1].contains("seed_initial_data"));
    }
}
