use crate::constants::TEMPLATE_DIR_ENV;
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Where the template tree comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Directory given through the override environment variable
    Override(PathBuf),
    /// Template shipped with the tool, looked up by name
    Bundled(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Override(path) => {
                write!(f, "override path: '{}'", path.display())
            }
            TemplateSource::Bundled(name) => write!(f, "bundled template: '{name}'"),
        }
    }
}

impl TemplateSource {
    /// Uses the override environment variable when set and non-empty.
    pub fn from_env(template_name: &str) -> Self {
        match std::env::var_os(TEMPLATE_DIR_ENV) {
            Some(dir) if !dir.is_empty() => TemplateSource::Override(PathBuf::from(dir)),
            _ => TemplateSource::Bundled(template_name.to_string()),
        }
    }

    /// Directories checked in order.
    ///
    /// A bundled template sits next to the executable in an installed tool,
    /// and at the package root during development.
    pub fn candidates(&self) -> Vec<PathBuf> {
        match self {
            TemplateSource::Override(path) => vec![path.clone()],
            TemplateSource::Bundled(name) => {
                let mut candidates = Vec::with_capacity(2);
                if let Some(exe_dir) = std::env::current_exe()
                    .ok()
                    .and_then(|exe| exe.parent().map(Path::to_path_buf))
                {
                    candidates.push(exe_dir.join(name));
                }
                candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(name));
                candidates
            }
        }
    }
}

/// Locates the template tree for `source`: the first candidate that is a directory.
///
/// The template is never written to, only checked to exist.
pub fn get_template(source: &TemplateSource) -> Result<PathBuf> {
    debug!("Locating template from {source}");
    let candidates = source.candidates();
    match candidates.iter().find(|candidate| candidate.is_dir()) {
        Some(path) => Ok(path.clone()),
        None => Err(Error::TemplateDoesNotExistsError {
            template_dir: candidates
                .last()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| source.to_string()),
        }),
    }
}
