//! Turns the raw directory argument (or an interactive answer) into an
//! absolute target path and a project name.

use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    constants::PROJECT_NAME_PROMPT,
    error::Result,
    ext::{PathExt, StrPathExt},
    prompt::{TextPromptConfig, TextPrompter},
};

/// Where the project goes and what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub target_path: PathBuf,
    pub project_name: String,
}

/// Immutable description of a single scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    target_path: PathBuf,
    project_name: String,
    overwrite: bool,
}

impl ScaffoldRequest {
    pub fn new(target: ResolvedTarget, overwrite: bool) -> Self {
        Self { target_path: target.target_path, project_name: target.project_name, overwrite }
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }
}

/// Resolves the scaffold target.
///
/// With a usable `raw_arg` the target is that path resolved against `cwd` and
/// the name is its final segment. Otherwise the user is asked for a name,
/// defaulting to the base name of `cwd`; answering with that base name
/// scaffolds in place.
///
/// The name is not validated.
pub fn resolve_target(
    raw_arg: Option<&str>,
    cwd: &Path,
    prompter: &dyn TextPrompter,
) -> Result<ResolvedTarget> {
    if let Some(target) = raw_arg.and_then(|raw| target_from_arg(raw, cwd)) {
        debug!("Resolved target from argument: {:?}", target);
        return Ok(target);
    }

    let cwd_name = cwd.base_name().unwrap_or_default();
    let config = TextPromptConfig::new(PROJECT_NAME_PROMPT).with_default(cwd_name.as_str());
    let project_name = prompter.prompt_text(&config)?;

    let target_path = if project_name == cwd_name {
        cwd.to_path_buf()
    } else {
        cwd.join(&project_name).lexically_cleaned()
    };
    debug!("Resolved target from prompt: {}", target_path.display());

    Ok(ResolvedTarget { target_path, project_name })
}

/// Returns None when the argument carries no usable final segment.
fn target_from_arg(raw: &str, cwd: &Path) -> Option<ResolvedTarget> {
    let trimmed = raw.trim_path_arg();
    if trimmed.is_empty() {
        return None;
    }
    let target_path = cwd.join(trimmed).lexically_cleaned();
    let project_name = target_path.base_name()?;
    Some(ResolvedTarget { target_path, project_name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::AutomaticPrompter;

    #[test]
    fn test_argument_with_trailing_separator() {
        let prompter = AutomaticPrompter::new();
        let target =
            resolve_target(Some("./foo/bar/"), Path::new("/work"), &prompter).unwrap();
        assert_eq!(target.project_name, "bar");
        assert_eq!(target.target_path, PathBuf::from("/work/foo/bar"));
        assert!(!target.target_path.to_string_lossy().ends_with('/'));
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn test_absolute_argument_ignores_cwd() {
        let prompter = AutomaticPrompter::new();
        let target = resolve_target(Some("/srv/site"), Path::new("/work"), &prompter).unwrap();
        assert_eq!(target.target_path, PathBuf::from("/srv/site"));
        assert_eq!(target.project_name, "site");
    }

    #[test]
    fn test_parent_argument_is_normalized() {
        let prompter = AutomaticPrompter::new();
        let target = resolve_target(Some("../other"), Path::new("/work/here"), &prompter)
            .unwrap();
        assert_eq!(target.target_path, PathBuf::from("/work/other"));
        assert_eq!(target.project_name, "other");
    }

    #[test]
    fn test_prompt_default_is_cwd_name_and_scaffolds_in_place() {
        let prompter = AutomaticPrompter::new();
        let target = resolve_target(None, Path::new("/work/site"), &prompter).unwrap();
        assert_eq!(target.target_path, PathBuf::from("/work/site"));
        assert_eq!(target.project_name, "site");

        let asked = prompter.asked();
        assert_eq!(asked[0].prompt, PROJECT_NAME_PROMPT);
        assert_eq!(asked[0].default.as_deref(), Some("site"));
    }

    #[test]
    fn test_prompt_answer_becomes_subdirectory() {
        let prompter =
            AutomaticPrompter::new().with_text_response(PROJECT_NAME_PROMPT, "my-app");
        let target = resolve_target(None, Path::new("/work"), &prompter).unwrap();
        assert_eq!(target.target_path, PathBuf::from("/work/my-app"));
        assert_eq!(target.project_name, "my-app");
    }

    #[test]
    fn test_empty_argument_falls_back_to_prompt() {
        let prompter =
            AutomaticPrompter::new().with_text_response(PROJECT_NAME_PROMPT, "my-app");
        let target = resolve_target(Some("/"), Path::new("/work"), &prompter).unwrap();
        assert_eq!(target.target_path, PathBuf::from("/work/my-app"));
        assert_eq!(prompter.asked().len(), 1);
    }

    #[test]
    fn test_request_is_built_from_target() {
        let target = ResolvedTarget {
            target_path: PathBuf::from("/work/site"),
            project_name: "site".into(),
        };
        let request = ScaffoldRequest::new(target, true);
        assert_eq!(request.target_path(), Path::new("/work/site"));
        assert_eq!(request.project_name(), "site");
        assert!(request.overwrite());
    }
}
