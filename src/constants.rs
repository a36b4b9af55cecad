//! Constants used throughout create-vite-ssg

/// Name of the bundled template directory
pub const TEMPLATE_NAME: &str = "template-typescript";

/// Manifest file patched with the project name
pub const MANIFEST_FILE: &str = "package.json";

/// Manifest field rewritten with the project name
pub const MANIFEST_NAME_FIELD: &str = "name";

/// Environment variable overriding the bundled template location
pub const TEMPLATE_DIR_ENV: &str = "CREATE_VITE_SSG_TEMPLATE_DIR";

/// Build-output and dependency-cache directory names never copied from the template
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", "dist", ".vite"];

/// Prompt shown when no directory argument is given
pub const PROJECT_NAME_PROMPT: &str = "Project name";

/// Next-step commands printed after scaffolding
pub const INSTALL_COMMAND: &str = "npm install";
pub const DEV_COMMAND: &str = "npm run dev";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const WARN: u8 = 1;
    pub const INFO: u8 = 2;
    pub const DEBUG: u8 = 3;
    pub const TRACE: u8 = 4;
    pub const MAX: u8 = 5;
    pub const DEFAULT: u8 = INFO;
}
