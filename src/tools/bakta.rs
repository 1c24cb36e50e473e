use std::path::{Path, PathBuf};

use tracing::info;

use crate::tools::{executable_from_env, run_tool, ToolError};
use crate::utils::paths::{sample_name, sibling_path};

pub const BAKTA_ENV_BIN: &str = "CPS_BAKTA_BIN";
pub const DEFAULT_BAKTA_BIN: &str = "bakta";

/// Annotation of the consensus FASTA with bakta, using a prodigal training file
#[derive(Debug, Clone)]
pub struct BaktaCommand {
    pub executable: String,
    pub fasta: PathBuf,
    pub training_file: PathBuf,
    /// `<sample name>_bakta` next to the FASTA
    pub output_dir: PathBuf,
}

/// Files bakta writes that the mutation check reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaktaOutput {
    pub dir: PathBuf,
    pub gff3: PathBuf,
    pub fna: PathBuf,
}

impl BaktaCommand {
    pub fn new(fasta: &Path, training_file: &Path) -> Self {
        Self {
            executable: executable_from_env(BAKTA_ENV_BIN, DEFAULT_BAKTA_BIN),
            fasta: fasta.to_path_buf(),
            training_file: training_file.to_path_buf(),
            output_dir: sibling_path(fasta, "_bakta"),
        }
    }

    pub fn args(&self) -> Vec<String> {
        vec![
            self.fasta.display().to_string(),
            "-o".to_string(),
            self.output_dir.display().to_string(),
            "--prefix".to_string(),
            sample_name(&self.fasta),
            "--prodigal-tf".to_string(),
            self.training_file.display().to_string(),
            "--skip-plot".to_string(),
        ]
    }

    /// Output files, named after the `--prefix` passed to bakta
    pub fn output(&self) -> BaktaOutput {
        let prefix = sample_name(&self.fasta);
        BaktaOutput {
            dir: self.output_dir.clone(),
            gff3: self.output_dir.join(format!("{prefix}.gff3")),
            fna: self.output_dir.join(format!("{prefix}.fna")),
        }
    }

    /// Run the annotation
    ///
    /// # Errors
    ///
    /// Returns a `ToolError` if bakta cannot be started or fails.
    pub fn run(&self) -> Result<BaktaOutput, ToolError> {
        run_tool(&self.executable, &self.args())?;
        info!(dir = %self.output_dir.display(), "bakta finished");
        Ok(self.output())
    }
}
