//! Reading the tree description from disk

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ListingError, Result};

use super::node::Tree;

/// File name looked up in the working directory when no input is given.
pub const DEFAULT_INPUT: &str = "Structure.json";

/// Load and deserialize the tree description at `path`.
pub fn load_tree(path: &Path) -> Result<Tree> {
    debug!(path = %path.display(), "loading tree description");
    let file = File::open(path).map_err(|source| ListingError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = read_tree(BufReader::new(file), path)?;
    debug!(entries = tree.entries().len(), "loaded root entries");
    Ok(tree)
}

/// Deserialize a tree from any reader. `origin` is only used in error messages.
pub fn read_tree<R: Read>(reader: R, origin: &Path) -> Result<Tree> {
    serde_json::from_reader(reader).map_err(|source| ListingError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Resolve the input file: an explicit path wins, otherwise the
/// conventional name relative to the working directory.
pub fn input_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_tree_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"contents": [{{"name": "a", "permissions": "-rw-r--r--", "size": 1, "time_modified": 0}}]}}"#
        )
        .unwrap();
        let tree = load_tree(file.path()).unwrap();
        assert_eq!(tree.entries()[0].name, "a");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_tree(Path::new("/nonexistent/Structure.json")).unwrap_err();
        assert!(matches!(err, ListingError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_tree(file.path()).unwrap_err();
        assert!(matches!(err, ListingError::Parse { .. }));
    }

    #[test]
    fn test_read_tree_from_reader() {
        let json = br#"{"contents": []}"#;
        let tree = read_tree(&json[..], Path::new("<memory>")).unwrap();
        assert!(tree.entries().is_empty());
    }

    #[test]
    fn test_input_path_default() {
        assert_eq!(input_path(None), PathBuf::from("Structure.json"));
        assert_eq!(
            input_path(Some(PathBuf::from("other.json"))),
            PathBuf::from("other.json")
        );
    }
}
