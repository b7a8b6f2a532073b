// WHY: Samples are durable (source, expected template) pairs keyed by name.
// Two plain files per sample keeps the store greppable and editable by hand;
// no atomicity or concurrent-write guarantees are promised.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

const SOURCE_SUFFIX: &str = ".source.txt";
const EXPECTED_SUFFIX: &str = ".expected.txt";

/// A stored pair of source text and its expected template text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub source: String,
    pub expected: String,
}

/// Returns true if `name` is usable as a sample key.
///
/// Names become file stems, so anything that could navigate out of the
/// store root (separators, parent references, hidden-file prefixes) is
/// rejected up front.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && !name.contains(['/', '\\'])
}

/// File-backed sample storage rooted at a single directory
#[derive(Debug, Clone)]
pub struct SampleStore {
    root: PathBuf,
}

impl SampleStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn source_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}{SOURCE_SUFFIX}"))
    }

    fn expected_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}{EXPECTED_SUFFIX}"))
    }

    fn check_name(name: &str) -> Result<()> {
        if !is_valid_name(name) {
            anyhow::bail!("Invalid sample name: {name:?}");
        }
        Ok(())
    }

    /// Create or overwrite the sample stored under `name`
    pub async fn save(&self, name: &str, source: &str, expected: &str) -> Result<()> {
        Self::check_name(name)?;

        fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("Failed to create sample directory {}", self.root.display()))?;

        let source_path = self.source_path(name);
        fs::write(&source_path, source)
            .await
            .with_context(|| format!("Failed to write {}", source_path.display()))?;

        let expected_path = self.expected_path(name);
        fs::write(&expected_path, expected)
            .await
            .with_context(|| format!("Failed to write {}", expected_path.display()))?;

        info!("Saved sample '{}' ({} + {} bytes)", name, source.len(), expected.len());
        Ok(())
    }

    /// List all stored sample names, sorted for stable output
    pub async fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            // An absent store root is an empty store, not an error
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(names),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read sample directory {}", self.root.display())
                })
            }
        };

        while let Some(entry) = entries.next_entry().await.with_context(|| {
            format!("Failed to read sample directory {}", self.root.display())
        })? {
            let file_name = entry.file_name();
            if let Some(name) = file_name.to_str().and_then(|n| n.strip_suffix(SOURCE_SUFFIX)) {
                names.push(name.to_string());
            }
        }

        names.sort();
        debug!("Listed {} samples in {}", names.len(), self.root.display());
        Ok(names)
    }

    /// Load the sample stored under `name`, or `None` if either of its
    /// files is missing
    pub async fn load(&self, name: &str) -> Result<Option<Sample>> {
        Self::check_name(name)?;

        let source = match fs::read_to_string(self.source_path(name)).await {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read sample '{name}' source"))
            }
        };

        let expected = match fs::read_to_string(self.expected_path(name)).await {
            Ok(expected) => expected,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read sample '{name}' template"))
            }
        };

        Ok(Some(Sample { source, expected }))
    }

    /// Delete the sample stored under `name`. Returns `false` if it did
    /// not exist.
    pub async fn delete(&self, name: &str) -> Result<bool> {
        Self::check_name(name)?;

        let source_path = self.source_path(name);
        let existed = match fs::remove_file(&source_path).await {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to remove {}", source_path.display()))
            }
        };

        // Remove the template half even if the source half was already gone
        let expected_path = self.expected_path(name);
        match fs::remove_file(&expected_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to remove {}", expected_path.display()))
            }
        }

        if existed {
            info!("Deleted sample '{}'", name);
        }
        Ok(existed)
    }
}
