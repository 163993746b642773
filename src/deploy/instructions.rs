use crate::config::Config;
use crate::error::DeployError;
use crate::migrations::MigrationScript;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Printed under the missing-file error; the deploy set is addressed
/// relative to the project root.
pub const RUN_FROM_ROOT_HINT: &str =
    "Make sure you're running this from the project root directory";

/// What executing the default deploy set creates, for the closing summary.
const OUTCOME_LINES: &[&str] = &[
    "10 core database tables",
    "Demo restaurant with 25+ menu items",
    "All security policies (RLS)",
];

const RULE_WIDTH: usize = 70;

/// The instruction document handed to the operator: console URLs plus the
/// ordered migration files to paste into the SQL editor.
#[derive(Debug, Clone)]
pub struct ManualDeployment {
    pub dashboard_url: Url,
    pub sql_editor_url: Url,
    pub script_paths: Vec<PathBuf>,
}

impl ManualDeployment {
    pub fn new(cfg: &Config, scripts: &[MigrationScript]) -> Result<Self, DeployError> {
        Ok(Self {
            dashboard_url: cfg.dashboard_url()?,
            sql_editor_url: cfg.sql_editor_url()?,
            script_paths: scripts.iter().map(|s| s.path.clone()).collect(),
        })
    }
}

impl fmt::Display for ManualDeployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "MANUAL DEPLOYMENT INSTRUCTIONS")?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        writeln!(
            f,
            "Your Supabase project is PAUSED (free tier auto-pauses after inactivity)"
        )?;
        writeln!(f)?;
        writeln!(f, "Follow these steps:")?;
        writeln!(f)?;
        writeln!(f, "1. Visit your project dashboard to wake it up:")?;
        writeln!(f, "   {}", self.dashboard_url)?;
        writeln!(f)?;
        writeln!(
            f,
            "2. Wait 1-2 minutes for the project to wake up (you'll see a loading screen)"
        )?;
        writeln!(f)?;
        writeln!(f, "3. Go to SQL Editor:")?;
        writeln!(f, "   {}", self.sql_editor_url)?;
        writeln!(f)?;

        let mut step = 4;
        for (idx, path) in self.script_paths.iter().enumerate() {
            if idx == 0 {
                writeln!(f, "{step}. Copy and paste this file:")?;
            } else {
                writeln!(f, "{step}. Then copy and paste this file:")?;
            }
            writeln!(f, "   {}", path.display())?;
            writeln!(f)?;
            step += 1;

            if idx == 0 {
                writeln!(f, "{step}. Click 'RUN' button")?;
            } else {
                writeln!(f, "{step}. Click 'RUN' button again")?;
            }
            writeln!(f)?;
            step += 1;
        }

        writeln!(f, "{rule}")?;
        writeln!(f)?;
        writeln!(f, "✅ This will create:")?;
        for line in OUTCOME_LINES {
            writeln!(f, "   - {line}")?;
        }
        Ok(())
    }
}
