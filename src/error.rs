use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk directory tree. Original error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Failed to parse exclusion pattern. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to read user input. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// Scaffolding there would write into the template itself.
    #[error("Cannot proceed: target directory '{target_dir}' is inside the template directory '{template_dir}'.")]
    TargetInsideTemplateError { target_dir: String, template_dir: String },

    /// The template was copied but carried no manifest; the installation is broken.
    #[error("Cannot proceed: manifest '{manifest_path}' does not exist. The template is malformed.")]
    ManifestMissingError { manifest_path: String },

    #[error("Failed to parse manifest '{manifest_path}'. Original error: {source}")]
    ManifestParseError {
        manifest_path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    log::debug!("{err:?}");
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn fails() -> Result<()> {
            let denied: std::io::Result<()> =
                Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
            denied?;
            Ok(())
        }
        assert!(matches!(fails(), Err(Error::IoError(_))));
    }

    #[test]
    fn manifest_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::ManifestParseError { manifest_path: "package.json".into(), source };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Failed to parse manifest 'package.json'"));
    }
}
