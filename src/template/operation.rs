use std::path::PathBuf;

/// One step of copying the template tree, decided per source entry.
#[derive(Debug, PartialEq, Eq)]
pub enum CopyOperation {
    Copy { source: PathBuf, target: PathBuf, target_exists: bool },
    CreateDirectory { target: PathBuf, target_exists: bool },
    Ignore { source: PathBuf },
}

impl CopyOperation {
    /// Gets a message describing the operation and its status.
    pub fn get_message(&self) -> String {
        match self {
            CopyOperation::Copy { source, target, target_exists } => {
                if *target_exists {
                    format!(
                        "Copying '{}' to '{}' (overwriting existing file)",
                        source.display(),
                        target.display()
                    )
                } else {
                    format!("Copying '{}' to '{}'", source.display(), target.display())
                }
            }

            CopyOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "Skipping directory creation '{}' (already exists)",
                        target.display()
                    )
                } else {
                    format!("Creating directory '{}'", target.display())
                }
            }

            CopyOperation::Ignore { source } => {
                format!("Ignoring '{}' (matches exclusion pattern)", source.display())
            }
        }
    }
}
