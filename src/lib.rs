/// Handles argument parsing and orchestrates a scaffold run.
pub mod cli;

/// Constants used throughout the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for path handling.
pub mod ext;

/// Exclusion patterns for build output and dependency caches.
pub mod ignore;

/// Target directory probing and preparation, plus small filesystem helpers.
pub mod ioutils;

/// Locates the bundled template.
pub mod loader;

/// Project manifest patching.
pub mod manifest;

/// User input behind a swappable interface.
pub mod prompt;

/// Created-file listing and next-step instructions.
pub mod report;

/// Target path and project name resolution.
pub mod resolver;

/// Template tree copying.
pub mod template;
