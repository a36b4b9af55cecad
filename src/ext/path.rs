use std::path::{Component, Path, PathBuf};

/// Extension trait for Path to provide lexical helpers
pub trait PathExt {
    /// Collapses `.` and `..` components without touching the filesystem.
    ///
    /// `..` above the root is dropped, so `/../a` becomes `/a`.
    ///
    /// # Examples
    /// ```
    /// use create_vite_ssg::ext::PathExt;
    /// use std::path::{Path, PathBuf};
    ///
    /// let path = Path::new("/work/./foo/../bar");
    /// assert_eq!(path.lexically_cleaned(), PathBuf::from("/work/bar"));
    /// ```
    fn lexically_cleaned(&self) -> PathBuf;

    /// Returns the final path segment as a String, or None for a root or empty path.
    fn base_name(&self) -> Option<String>;
}

impl PathExt for Path {
    fn lexically_cleaned(&self) -> PathBuf {
        let mut normalized = PathBuf::new();
        for component in self.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => match normalized.components().next_back() {
                    Some(Component::Normal(_)) => {
                        normalized.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => normalized.push(component),
                },
                other => normalized.push(other),
            }
        }
        normalized
    }

    fn base_name(&self) -> Option<String> {
        self.file_name().map(|name| name.to_string_lossy().into_owned())
    }
}

/// Extension trait for raw path strings given on the command line
pub trait StrPathExt {
    /// Trims surrounding whitespace, then every trailing path separator.
    fn trim_path_arg(&self) -> &str;
}

impl StrPathExt for str {
    fn trim_path_arg(&self) -> &str {
        self.trim().trim_end_matches(std::path::is_separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleaning_collapses_dot_components() {
        let path = Path::new("/work/./foo/bar/../baz");
        assert_eq!(path.lexically_cleaned(), PathBuf::from("/work/foo/baz"));
    }

    #[test]
    fn test_cleaning_stops_at_root() {
        let path = Path::new("/../../etc");
        assert_eq!(path.lexically_cleaned(), PathBuf::from("/etc"));
    }

    #[test]
    fn test_cleaning_keeps_leading_parent_of_relative_path() {
        let path = Path::new("../a/./b");
        assert_eq!(path.lexically_cleaned(), PathBuf::from("../a/b"));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(Path::new("/work/site").base_name(), Some("site".to_string()));
        assert_eq!(Path::new("/").base_name(), None);
    }

    #[test]
    fn test_trim_path_arg() {
        assert_eq!("./foo/bar/".trim_path_arg(), "./foo/bar");
        assert_eq!("  site///  ".trim_path_arg(), "site");
        assert_eq!("/".trim_path_arg(), "");
        assert_eq!("plain".trim_path_arg(), "plain");
    }
}
