use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::{
    error::{Error, Result},
    ignore::ExcludeSet,
    ioutils::{copy_file, create_dir_all},
};

use super::operation::CopyOperation;

/// Counts of what a copy run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopySummary {
    pub files: usize,
    pub directories: usize,
    pub ignored: usize,
}

/// Recursively copies a template tree into a target directory, skipping
/// excluded entries together with their subtrees.
///
/// Operations run one at a time. A failure stops the copy and leaves whatever
/// was already written in place.
pub struct TemplateCopier<'a> {
    template_root: PathBuf,
    target_root: PathBuf,
    excludes: &'a ExcludeSet,
}

impl<'a> TemplateCopier<'a> {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        template_root: P,
        target_root: Q,
        excludes: &'a ExcludeSet,
    ) -> Self {
        Self {
            template_root: template_root.as_ref().to_path_buf(),
            target_root: target_root.as_ref().to_path_buf(),
            excludes,
        }
    }

    /// Decides what to do with a single source path.
    pub fn plan<P: AsRef<Path>>(&self, source: P, is_dir: bool) -> CopyOperation {
        let source = source.as_ref();
        let relative = source.strip_prefix(&self.template_root).unwrap_or(source);

        if self.excludes.is_excluded(relative) {
            return CopyOperation::Ignore { source: source.to_path_buf() };
        }

        let target = self.target_root.join(relative);
        let target_exists = target.exists();
        if is_dir {
            CopyOperation::CreateDirectory { target, target_exists }
        } else {
            CopyOperation::Copy { source: source.to_path_buf(), target, target_exists }
        }
    }

    /// Copies the whole filtered tree.
    pub fn copy(&self) -> Result<CopySummary> {
        if !self.template_root.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: self.template_root.display().to_string(),
            });
        }
        ensure_outside_template(&self.template_root, &self.target_root)?;
        debug!("Excluding entries matching {:?}", self.excludes.patterns());
        info!(
            "Copying template {} into {}",
            self.template_root.display(),
            self.target_root.display()
        );

        let mut summary = CopySummary::default();
        let mut entries = WalkDir::new(&self.template_root)
            .follow_links(true)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = entries.next() {
            let entry = entry?;
            let operation = self.plan(entry.path(), entry.file_type().is_dir());
            self.execute(&operation, &entry, &mut summary)?;
            if matches!(operation, CopyOperation::Ignore { .. }) && entry.file_type().is_dir() {
                entries.skip_current_dir();
            }
        }

        debug!("Copy finished: {:?}", summary);
        Ok(summary)
    }

    fn execute(
        &self,
        operation: &CopyOperation,
        entry: &DirEntry,
        summary: &mut CopySummary,
    ) -> Result<()> {
        match operation {
            CopyOperation::Copy { source, target, target_exists } => {
                if *target_exists {
                    warn!("{}", operation.get_message());
                } else {
                    debug!("{}", operation.get_message());
                }
                copy_file(source, target)?;
                summary.files += 1;
            }
            CopyOperation::CreateDirectory { target, target_exists } => {
                debug!("{}", operation.get_message());
                if !target_exists {
                    create_dir_all(target)?;
                }
                summary.directories += 1;
            }
            CopyOperation::Ignore { .. } => {
                debug!("{} ({:?})", operation.get_message(), entry.file_type());
                summary.ignored += 1;
            }
        }
        Ok(())
    }
}

/// Fails when `target_root` is `template_root` or lies below it.
///
/// Paths are compared both as given and canonicalized, so a symlinked or
/// relative spelling of the same directory is caught when it exists.
pub fn ensure_outside_template<P: AsRef<Path>, Q: AsRef<Path>>(
    template_root: P,
    target_root: Q,
) -> Result<()> {
    let template_root = template_root.as_ref();
    let target_root = target_root.as_ref();
    let templates = [Some(template_root.to_path_buf()), fs::canonicalize(template_root).ok()];
    let targets = [Some(target_root.to_path_buf()), fs::canonicalize(target_root).ok()];

    let nested = templates
        .iter()
        .flatten()
        .any(|template| targets.iter().flatten().any(|target| target.starts_with(template)));
    if nested {
        return Err(Error::TargetInsideTemplateError {
            target_dir: target_root.display().to_string(),
            template_dir: template_root.display().to_string(),
        });
    }
    Ok(())
}

/// Copies `template_root` into `target_root`, skipping entries matched by `excludes`.
pub fn copy_template<P: AsRef<Path>, Q: AsRef<Path>>(
    template_root: P,
    target_root: Q,
    excludes: &ExcludeSet,
) -> Result<CopySummary> {
    TemplateCopier::new(template_root, target_root, excludes).copy()
}
