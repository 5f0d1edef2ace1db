//! Test utilities for building tree descriptions on disk.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::tree::DEFAULT_INPUT;

/// A JSON file entry.
pub fn file(name: &str, permissions: &str, size: i64, time_modified: i64) -> Value {
    json!({
        "name": name,
        "permissions": permissions,
        "size": size,
        "time_modified": time_modified,
    })
}

/// A JSON directory entry with its children.
pub fn dir(name: &str, permissions: &str, size: i64, time_modified: i64, contents: Vec<Value>) -> Value {
    json!({
        "name": name,
        "permissions": permissions,
        "size": size,
        "time_modified": time_modified,
        "contents": contents,
    })
}

/// A temporary working directory holding a tree description.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a directory with `Structure.json` holding `contents` at the root.
    pub fn with_contents(contents: Vec<Value>) -> Self {
        let tree = Self::new();
        tree.write_structure(DEFAULT_INPUT, contents);
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a description file named `name` with the given root entries.
    pub fn write_structure(&self, name: &str, contents: Vec<Value>) -> PathBuf {
        let root = json!({
            "name": "project",
            "size": 4096,
            "time_modified": 1699957865,
            "permissions": "drwxr-xr-x",
            "contents": contents,
        });
        let text = serde_json::to_string_pretty(&root).expect("Failed to serialize tree");
        self.write_raw(name, &text)
    }

    /// Write arbitrary text, e.g. a malformed description.
    pub fn write_raw(&self, name: &str, text: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        fs::write(&full_path, text).expect("Failed to write file");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// A mixed sample tree used across tests.
///
/// Root: `.gitignore`, `LICENSE`, `README.md`, `go.mod`, `main.go`, `ast/`,
/// `lexer/`, `parser/`.
pub fn sample_contents() -> Vec<Value> {
    vec![
        file(".gitignore", "-rw-r--r--", 8911, 1699941437),
        file("LICENSE", "-rw-r--r--", 1071, 1699941437),
        file("README.md", "-rw-r--r--", 83, 1699941437),
        file("go.mod", "-rw-r--r--", 60, 1699957865),
        file("main.go", "-rw-r--r--", 74, 1699956000),
        dir(
            "ast",
            "drwxr-xr-x",
            4096,
            1699957739,
            vec![
                file("go.mod", "-rw-r--r--", 225, 1699957780),
                file("ast.go", "-rw-r--r--", 837, 1699957719),
            ],
        ),
        dir(
            "lexer",
            "drwxr-xr-x",
            4096,
            1699955487,
            vec![
                file("lexer_test.go", "-rw-r--r--", 1729, 1699955126),
                file("go.mod", "-rw-r--r--", 60, 1699955470),
                file("lexer.go", "-rw-r--r--", 2512, 1699954590),
            ],
        ),
        dir(
            "parser",
            "drwxr-xr-x",
            4096,
            1699950000,
            vec![
                file(".keep", "-rw-r--r--", 0, 1699950000),
                dir(
                    "internal",
                    "drwxr-xr-x",
                    4096,
                    1699950001,
                    vec![file("state.go", "-rw-r--r--", 512, 1699950002)],
                ),
            ],
        ),
    ]
}
