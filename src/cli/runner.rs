use crate::{
    cli::{context::ScaffoldContext, Args},
    constants::MANIFEST_FILE,
    error::{Error, Result},
    ioutils::prepare_directory,
    manifest::patch_manifest_name,
    prompt::{DialoguerPrompter, TextPrompter},
    report::{list_entries, next_steps, ScaffoldReport},
    resolver::{resolve_target, ScaffoldRequest},
    template::{copy_template, ensure_outside_template},
};
use log::{debug, info};
use std::io::Write;

/// Orchestrates a scaffold run: resolve, prepare, copy, patch, report.
///
/// Steps run strictly in order. The first failure aborts the run and nothing
/// already created is cleaned up; a later run with overwrite clears it.
pub struct Runner<'a> {
    context: ScaffoldContext,
    prompter: &'a dyn TextPrompter,
}

impl<'a> Runner<'a> {
    pub fn new(context: ScaffoldContext, prompter: &'a dyn TextPrompter) -> Self {
        Self { context, prompter }
    }

    /// Executes the complete scaffold workflow, writing user-facing output to `out`.
    pub fn run(&self, out: &mut dyn Write) -> Result<ScaffoldReport> {
        let request = self.resolve_request()?;
        let target = request.target_path();
        info!("templateDir: {}", self.context.template_root().display());

        self.check_template_manifest()?;
        ensure_outside_template(self.context.template_root(), target)?;

        writeln!(out, "\nScaffolding project in {}...\n", target.display())?;

        prepare_directory(target, request.overwrite())?;

        let summary = copy_template(self.context.template_root(), target, self.context.excludes())?;
        debug!(
            "Copied {} files and {} directories, ignored {} entries",
            summary.files, summary.directories, summary.ignored
        );

        patch_manifest_name(target.join(MANIFEST_FILE), request.project_name())?;

        let report = ScaffoldReport {
            project_name: request.project_name().to_string(),
            target_path: target.to_path_buf(),
            entries: list_entries(target)?,
            next_steps: next_steps(self.context.cwd(), target),
        };
        report.write_to(out)?;
        Ok(report)
    }

    fn resolve_request(&self) -> Result<ScaffoldRequest> {
        let target = resolve_target(self.context.directory(), self.context.cwd(), self.prompter)?;
        Ok(ScaffoldRequest::new(target, self.context.overwrite()))
    }

    /// A template without a manifest is a broken installation; refuse before
    /// touching the target.
    fn check_template_manifest(&self) -> Result<()> {
        let manifest = self.context.template_root().join(MANIFEST_FILE);
        if !manifest.is_file() {
            return Err(Error::ManifestMissingError {
                manifest_path: manifest.display().to_string(),
            });
        }
        Ok(())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let context = ScaffoldContext::from_args(&args)?;
    let prompter = DialoguerPrompter::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Runner::new(context, &prompter).run(&mut out)?;
    Ok(())
}
