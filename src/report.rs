//! User-facing output of a scaffold run: the created-file listing and next steps.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    constants::{DEV_COMMAND, INSTALL_COMMAND},
    error::Result,
};

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub target_path: PathBuf,
    /// Every entry under the target, relative to it and sorted.
    pub entries: Vec<PathBuf>,
    pub next_steps: Vec<String>,
}

impl ScaffoldReport {
    pub fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "...Created files:")?;
        for entry in &self.entries {
            writeln!(out, "    {}/{}", self.project_name, entry.display())?;
        }
        writeln!(out)?;
        writeln!(out, "Done. Now run:")?;
        writeln!(out)?;
        for step in &self.next_steps {
            writeln!(out, "  {step}")?;
        }
        Ok(())
    }
}

/// Lists every file and directory below `target`, relative to it.
pub fn list_entries<P: AsRef<Path>>(target: P) -> Result<Vec<PathBuf>> {
    let target = target.as_ref();
    let mut entries = Vec::new();
    for entry in WalkDir::new(target).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if let Ok(relative) = entry.path().strip_prefix(target) {
            entries.push(relative.to_path_buf());
        }
    }
    Ok(entries)
}

/// Commands to run next. `cd` is only suggested when the target is not `cwd`.
pub fn next_steps(cwd: &Path, target: &Path) -> Vec<String> {
    let mut steps = Vec::with_capacity(3);
    if cwd != target {
        let shown = target.strip_prefix(cwd).unwrap_or(target);
        steps.push(format!("cd {}", shown.display()));
    }
    steps.push(INSTALL_COMMAND.to_string());
    steps.push(DEV_COMMAND.to_string());
    steps
}
