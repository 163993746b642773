use crate::error::DeployError;
use chrono::{DateTime, NaiveDateTime, Utc};
use std::path::PathBuf;

/// Migration file names carry a 14-digit UTC timestamp prefix,
/// `YYYYMMDDHHMMSS_label.sql`; the prefix fixes the execution order.
const VERSION_LEN: usize = 14;

/// One migration SQL file, loaded from disk. The SQL text is kept only as
/// proof the file was readable; it is never parsed or executed here.
#[derive(Debug, Clone)]
pub struct MigrationScript {
    pub path: PathBuf,
    pub version: u64,
    pub label: String,
    pub sql: String,
}

impl MigrationScript {
    /// Parses the file name at `path` into version and label.
    pub fn parse(path: PathBuf, sql: String) -> Result<Self, DeployError> {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| DeployError::InvalidScriptName {
                name: path.display().to_string(),
            })?;

        let stem = name
            .strip_suffix(".sql")
            .ok_or_else(|| DeployError::InvalidScriptName {
                name: name.to_string(),
            })?;
        let (version_part, label_part) =
            stem.split_once('_')
                .ok_or_else(|| DeployError::InvalidScriptName {
                    name: name.to_string(),
                })?;

        if version_part.len() != VERSION_LEN
            || !version_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(DeployError::InvalidScriptName {
                name: name.to_string(),
            });
        }
        let version: u64 =
            version_part
                .parse()
                .map_err(|_| DeployError::InvalidScriptName {
                    name: name.to_string(),
                })?;
        let label = label_part.to_string();

        Ok(Self {
            path,
            version,
            label,
            sql,
        })
    }

    /// Decodes the version prefix as a UTC timestamp. `None` when the
    /// digits do not form a calendar date.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(&format!("{:014}", self.version), "%Y%m%d%H%M%S")
            .ok()
            .map(|t| t.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::MigrationScript;
    use crate::error::DeployError;
    use std::path::PathBuf;

    fn parse_name(name: &str) -> Result<MigrationScript, DeployError> {
        MigrationScript::parse(
            PathBuf::from("supabase/migrations").join(name),
            String::new(),
        )
    }

    #[test]
    fn parses_version_and_label_from_file_name() {
        let script =
            parse_name("20251119045603_create_core_tables.sql").expect("valid script name");

        assert_eq!(script.version, 20251119045603);
        assert_eq!(script.label, "create_core_tables");
    }

    #[test]
    fn label_keeps_interior_underscores() {
        let script =
            parse_name("20251119050025_seed_initial_data.sql").expect("valid script name");

        assert_eq!(script.label, "seed_initial_data");
    }

    #[test]
    fn rejects_names_without_a_version_prefix() {
        for name in [
            "core_tables.sql",
            "20251119_create.sql",
            "2025111904560x_create.sql",
            "20251119045603-create.sql",
            "20251119045603_create.txt",
        ] {
            assert!(
                matches!(
                    parse_name(name),
                    Err(DeployError::InvalidScriptName { .. })
                ),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn version_prefix_decodes_to_a_utc_timestamp() {
        let script =
            parse_name("20251119045603_create_core_tables.sql").expect("valid script name");

        let ts = script.created_at().expect("calendar timestamp");
        assert_eq!(ts.to_rfc3339(), "2025-11-19T04:56:03+00:00");
    }
}
