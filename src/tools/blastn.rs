use std::path::{Path, PathBuf};

use tracing::info;

use crate::tools::{executable_from_env, run_tool, ToolError};
use crate::utils::paths::sibling_path;

pub const BLASTN_ENV_BIN: &str = "CPS_BLASTN_BIN";
pub const DEFAULT_BLASTN_BIN: &str = "blastn";

/// A `blastn` search of the query against a reference database, XML output
#[derive(Debug, Clone)]
pub struct BlastnCommand {
    pub executable: String,
    pub query: PathBuf,
    pub database: PathBuf,
    /// Report path, `<query sample name>_blast_results.xml` next to the query
    pub output: PathBuf,
}

impl BlastnCommand {
    pub fn new(query: &Path, database: &Path) -> Self {
        Self {
            executable: executable_from_env(BLASTN_ENV_BIN, DEFAULT_BLASTN_BIN),
            query: query.to_path_buf(),
            database: database.to_path_buf(),
            output: sibling_path(query, "_blast_results.xml"),
        }
    }

    pub fn args(&self) -> Vec<String> {
        vec![
            "-query".to_string(),
            self.query.display().to_string(),
            "-db".to_string(),
            self.database.display().to_string(),
            "-out".to_string(),
            self.output.display().to_string(),
            "-outfmt".to_string(),
            "5".to_string(),
        ]
    }

    /// Run the search and return the path of the XML report
    ///
    /// # Errors
    ///
    /// Returns a `ToolError` if blastn cannot be started or fails.
    pub fn run(&self) -> Result<PathBuf, ToolError> {
        run_tool(&self.executable, &self.args())?;
        info!(report = %self.output.display(), "blastn finished");
        Ok(self.output.clone())
    }
}
