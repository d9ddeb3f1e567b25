//! Common test utilities for Unistack integration tests

use std::path::PathBuf;
use tempfile::TempDir;

pub const CERTIFICATE_ARN: &str = "arn:aws:acm:us-east-1:123456789012:certificate/11111111-2222";

/// A project directory for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project with the given unistack.yaml
    pub fn with_config(yaml: &str) -> Self {
        let project = Self::new();
        project.write_file("unistack.yaml", yaml);
        project
    }

    /// Write a small site into `site/` and point the project file at it
    pub fn with_site_assets(extra_yaml: &str) -> Self {
        let project = Self::with_config(&format!("site:\n  assets: site\n{extra_yaml}"));
        project.write_file("site/index.html", "<h1>Universität Karlsruhe</h1>\n");
        project.write_file("site/error.html", "<h1>Not found</h1>\n");
        project.write_file("site/css/main.css", "body { margin: 0; }\n");
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Parse a JSON file from the project
    pub fn read_json(&self, path: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_file(path)).expect("Failed to parse JSON")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Names of the entries directly under `dir`
    pub fn entries(&self, dir: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(dir))
            .expect("Failed to read directory")
            .map(|e| e.expect("Failed to read entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
