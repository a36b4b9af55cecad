//! Read-modify-write of the generated project's `package.json`.

use std::{
    fs,
    io::{ErrorKind, Write},
    path::Path,
};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::{
    constants::MANIFEST_NAME_FIELD,
    error::{Error, Result},
};

/// A manifest document. Key order and number literals are kept as read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(Map<String, Value>);

impl Manifest {
    /// Parses manifest text. Anything other than a JSON object is rejected.
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Reads and parses the manifest at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::ManifestMissingError {
                manifest_path: path.display().to_string(),
            },
            _ => Error::IoError(e),
        })?;
        Self::parse(&content).map_err(|source| Error::ManifestParseError {
            manifest_path: path.display().to_string(),
            source,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get(MANIFEST_NAME_FIELD).and_then(Value::as_str)
    }

    /// Replaces the name in place; a manifest without one gets it appended.
    pub fn set_name(&mut self, name: &str) {
        match self.0.get_mut(MANIFEST_NAME_FIELD) {
            Some(value) => *value = Value::String(name.to_string()),
            None => {
                self.0.insert(MANIFEST_NAME_FIELD.to_string(), Value::String(name.to_string()));
            }
        }
    }

    /// Pretty JSON with two-space indentation and a trailing newline.
    pub fn to_pretty_string(&self) -> serde_json::Result<String> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        Ok(content)
    }

    /// Replaces the file at `path` with this document.
    ///
    /// The content goes to a temporary file next to `path` that is then
    /// renamed over it, so readers see either the old or the new manifest.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_pretty_string().map_err(|source| Error::ManifestParseError {
            manifest_path: path.display().to_string(),
            source,
        })?;

        let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        if let Ok(metadata) = fs::metadata(path) {
            fs::set_permissions(tmp.path(), metadata.permissions())?;
        }
        tmp.persist(path).map_err(|e| Error::IoError(e.error))?;
        Ok(())
    }
}

/// Sets the manifest's name field to `new_name` and writes it back.
pub fn patch_manifest_name<P: AsRef<Path>>(manifest_path: P, new_name: &str) -> Result<()> {
    let manifest_path = manifest_path.as_ref();
    info!("Setting up {}", manifest_path.display());

    let mut manifest = Manifest::load(manifest_path)?;
    debug!("Renaming manifest from {:?} to '{}'", manifest.name(), new_name);
    manifest.set_name(new_name);
    manifest.save(manifest_path)
}
