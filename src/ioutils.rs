use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::error::Result;

/// Existence classification of a target directory, computed from one probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    Absent,
    ExistsEmpty,
    ExistsNonEmpty,
}

impl DirectoryState {
    /// Probes `path` with a single directory read.
    ///
    /// Only "not found" maps to [`DirectoryState::Absent`]; every other failure,
    /// including `path` being a regular file, is returned unchanged.
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<Self> {
        match fs::read_dir(path.as_ref()) {
            Ok(mut entries) => match entries.next() {
                None => Ok(DirectoryState::ExistsEmpty),
                Some(entry) => {
                    entry?;
                    Ok(DirectoryState::ExistsNonEmpty)
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(DirectoryState::Absent),
            Err(e) => Err(e.into()),
        }
    }
}

/// Ensures the target directory exists, clearing it first when `overwrite` is set.
///
/// An existing directory is left untouched when `overwrite` is false. Returns
/// the state observed before any change was made.
pub fn prepare_directory<P: AsRef<Path>>(target: P, overwrite: bool) -> Result<DirectoryState> {
    let target = target.as_ref();
    info!("Preparing project directory at {}", target.display());

    let state = DirectoryState::probe(target)?;
    debug!("Directory state of {}: {:?}", target.display(), state);

    match state {
        DirectoryState::Absent => {
            info!("Directory doesn't exist yet, creating new directory");
            create_dir_all(target)?;
        }
        DirectoryState::ExistsEmpty | DirectoryState::ExistsNonEmpty => {
            info!("Directory already exists");
            if overwrite {
                warn!("Overwrite was set to {overwrite}, clearing directory");
                fs::remove_dir_all(target)?;
                create_dir_all(target)?;
            }
            info!("Directory is ready");
        }
    }
    Ok(state)
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    Ok(fs::create_dir_all(dest_path.as_ref())?)
}

/// Copies a single file, creating missing parent directories.
///
/// Permissions travel with the contents where the platform supports it.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, dest_path: Q) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    fs::copy(source_path.as_ref(), dest_path)?;
    Ok(())
}

/// Working directory of the process, used once at start-up.
pub fn current_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_probe_absent() {
        let tmp = TempDir::new().unwrap();
        let state = DirectoryState::probe(tmp.path().join("missing")).unwrap();
        assert_eq!(state, DirectoryState::Absent);
    }

    #[test]
    fn test_probe_empty_and_non_empty() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(DirectoryState::probe(tmp.path()).unwrap(), DirectoryState::ExistsEmpty);

        fs::write(tmp.path().join("file.txt"), "x").unwrap();
        assert_eq!(
            DirectoryState::probe(tmp.path()).unwrap(),
            DirectoryState::ExistsNonEmpty
        );
    }

    #[test]
    fn test_probe_regular_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        assert!(DirectoryState::probe(&file).is_err());
        assert!(prepare_directory(&file, true).is_err());
        assert!(file.is_file());
    }

    #[test]
    fn test_prepare_creates_missing_ancestors() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("a/b/c");
        let state = prepare_directory(&target, false).unwrap();
        assert_eq!(state, DirectoryState::Absent);
        assert!(target.is_dir());
        assert_eq!(DirectoryState::probe(&target).unwrap(), DirectoryState::ExistsEmpty);
    }

    #[test]
    fn test_prepare_without_overwrite_keeps_contents() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("keep.txt"), "original").unwrap();

        let state = prepare_directory(tmp.path(), false).unwrap();
        assert_eq!(state, DirectoryState::ExistsNonEmpty);
        assert_eq!(fs::read_to_string(tmp.path().join("keep.txt")).unwrap(), "original");

        // Second run is a no-op as well.
        prepare_directory(tmp.path(), false).unwrap();
        assert_eq!(fs::read_to_string(tmp.path().join("keep.txt")).unwrap(), "original");
    }

    #[test]
    fn test_prepare_with_overwrite_clears_contents() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("proj");
        fs::create_dir_all(target.join("nested/deeper")).unwrap();
        fs::write(target.join("old.txt"), "stale").unwrap();
        fs::write(target.join("nested/deeper/old.txt"), "stale").unwrap();

        let state = prepare_directory(&target, true).unwrap();
        assert_eq!(state, DirectoryState::ExistsNonEmpty);
        assert!(target.is_dir());
        assert_eq!(DirectoryState::probe(&target).unwrap(), DirectoryState::ExistsEmpty);
    }

    #[test]
    fn test_copy_file_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("source.txt");
        fs::write(&source, "content").unwrap();
        let dest = tmp.path().join("x/y/dest.txt");
        copy_file(&source, &dest).unwrap();
        assert_eq!(fs::read_to_string(dest).unwrap(), "content");
    }
}
