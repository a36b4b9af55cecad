#![allow(dead_code)]

use create_vite_ssg::cli::{Runner, ScaffoldContext};
use create_vite_ssg::error::Result;
use create_vite_ssg::prompt::AutomaticPrompter;
use create_vite_ssg::report::ScaffoldReport;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The template shipped with the crate.
pub fn bundled_template() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("template-typescript")
}

/// Writes a small template containing build-output and dependency-cache
/// directories at several depths.
pub fn write_template(root: &Path) {
    let files = [
        ("package.json", "{\n  \"name\": \"template\",\n  \"version\": \"1.0.0\"\n}\n"),
        ("index.html", "<html></html>\n"),
        ("src/main.ts", "console.log('hi')\n"),
        ("src/pages/index.md", "# Home\n"),
        ("node_modules/vite/package.json", "{}"),
        ("src/dist/bundle.js", "bundled"),
        ("src/pages/node_modules/dep/index.js", "dep"),
        ("dist/index.html", "built"),
        (".vite/deps/_metadata.json", "{}"),
    ];
    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Runs a full scaffold and returns the result together with everything
/// written to the output sink.
pub fn scaffold(
    cwd: &Path,
    template: &Path,
    directory: Option<&str>,
    overwrite: bool,
    prompter: &AutomaticPrompter,
) -> (Result<ScaffoldReport>, String) {
    let context =
        ScaffoldContext::new(directory.map(str::to_string), cwd, template, overwrite).unwrap();
    let mut out = Vec::new();
    let result = Runner::new(context, prompter).run(&mut out);
    (result, String::from_utf8(out).unwrap())
}

/// Relative paths of every file below `dir`.
pub fn relative_files(dir: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Reads the `name` field of the manifest in `dir`.
pub fn manifest_name(dir: &Path) -> String {
    let content = fs::read_to_string(dir.join("package.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    value["name"].as_str().unwrap().to_string()
}
