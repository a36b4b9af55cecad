use crate::{
    cli::Args,
    constants::TEMPLATE_NAME,
    error::Result,
    ignore::ExcludeSet,
    ioutils::current_dir,
    loader::{get_template, TemplateSource},
};
use std::path::{Path, PathBuf};

/// Normalized configuration for a single scaffold run.
///
/// Everything the pipeline would otherwise read from the process (working
/// directory, template location) is captured here once.
#[derive(Debug, Clone)]
pub struct ScaffoldContext {
    directory: Option<String>,
    cwd: PathBuf,
    template_root: PathBuf,
    overwrite: bool,
    excludes: ExcludeSet,
}

impl ScaffoldContext {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(
        directory: Option<String>,
        cwd: P,
        template_root: Q,
        overwrite: bool,
    ) -> Result<Self> {
        Ok(Self {
            directory,
            cwd: cwd.into(),
            template_root: template_root.into(),
            overwrite,
            excludes: ExcludeSet::with_defaults()?,
        })
    }

    /// Builds the context from parsed arguments and the process environment.
    pub fn from_args(args: &Args) -> Result<Self> {
        let template_root = get_template(&TemplateSource::from_env(TEMPLATE_NAME))?;
        Self::new(args.directory.clone(), current_dir()?, template_root, args.overwrite)
    }

    pub fn with_excludes(mut self, excludes: ExcludeSet) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn directory(&self) -> Option<&str> {
        self.directory.as_deref()
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn excludes(&self) -> &ExcludeSet {
        &self.excludes
    }
}
