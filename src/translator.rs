// WHY: The translator is an opaque external executable. This module owns the
// only blocking, I/O-bound operation in the system: stage the source text to
// a file, invoke the binary with that path as its sole argument, capture
// stdout and stderr verbatim. No exit-code policy, no timeout, no retry -
// whatever the process printed is the answer.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::process::Command;
use tracing::{debug, info};

/// File name the source text is staged under before each invocation.
/// Carries the source-language extension since translator binaries may
/// sniff it.
const STAGING_FILE_NAME: &str = "source.rs";

/// Configuration for invoking the external translator
///
/// Passed explicitly at construction - there is no ambient or process-wide
/// translator state.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Path to the translator executable
    pub binary: PathBuf,
    /// Directory the source text is staged in before invocation
    pub staging_dir: PathBuf,
}

/// Captured output of one translator invocation
#[derive(Debug, Clone)]
pub struct TranslatorOutput {
    /// Standard-output text (the generated artifact)
    pub output: String,
    /// Standard-error text, surfaced verbatim to the caller
    pub errors: String,
}

/// Invokes the external translator executable on staged source text
#[derive(Debug, Clone)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    pub fn binary(&self) -> &Path {
        &self.config.binary
    }

    /// Write `source` to the staging file and run the translator on it.
    ///
    /// Only spawn or staging failures are errors; a translator that exits
    /// non-zero still yields `Ok` with its stderr text captured, since the
    /// caller treats that text as the diagnostic, not this module.
    pub async fn translate(&self, source: &str) -> Result<TranslatorOutput> {
        fs::create_dir_all(&self.config.staging_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to create staging directory {}",
                    self.config.staging_dir.display()
                )
            })?;

        let staging_file = self.config.staging_dir.join(STAGING_FILE_NAME);
        fs::write(&staging_file, source)
            .await
            .with_context(|| format!("Failed to stage source to {}", staging_file.display()))?;

        debug!(
            "Invoking translator {} on {}",
            self.config.binary.display(),
            staging_file.display()
        );

        let output = Command::new(&self.config.binary)
            .arg(&staging_file)
            .output()
            .await
            .with_context(|| {
                format!("Failed to invoke translator {}", self.config.binary.display())
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        info!(
            "Translator exited with {:?}: {} bytes stdout, {} bytes stderr",
            output.status.code(),
            stdout.len(),
            stderr.len()
        );

        Ok(TranslatorOutput {
            output: stdout,
            errors: stderr,
        })
    }
}
