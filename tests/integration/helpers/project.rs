use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Scratch destination directory for one scaffolder run.
pub struct Project {
    root: TempDir,
}

pub fn tempdir() -> Project {
    Project {
        root: tempfile::Builder::new()
            .prefix("cppstart")
            .tempdir()
            .unwrap(),
    }
}

impl Project {
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.root.path().join(relative).exists()
    }

    pub fn read(&self, relative: &str) -> String {
        let path = self.root.path().join(relative);
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("couldn't read {path:?}"))
    }

    pub fn file(self, relative: &str, contents: &str) -> Self {
        let path = self.root.path().join(relative);
        let parent = path
            .parent()
            .unwrap_or_else(|| panic!("couldn't find parent dir of {path:?}"));
        fs::create_dir_all(parent).unwrap_or_else(|_| panic!("couldn't create {parent:?}"));
        fs::write(&path, contents).unwrap_or_else(|_| panic!("couldn't write {path:?}"));
        self
    }

    /// Every regular file below the root, relative paths, sorted.
    pub fn files(&self) -> Vec<String> {
        let mut found = Vec::new();
        let mut stack = vec![self.root.path().to_path_buf()];
        while let Some(dir) = stack.pop() {
            for entry in fs::read_dir(&dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    stack.push(path);
                } else {
                    found.push(
                        path.strip_prefix(self.root.path())
                            .unwrap()
                            .display()
                            .to_string(),
                    );
                }
            }
        }
        found.sort();
        found
    }
}
