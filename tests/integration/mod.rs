// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture helper for creating temporary directories with input text files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Create a text file with given content, creating parent directories as needed
    pub fn create_text_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Read the output written next to a source file
    pub fn read_output<P: AsRef<Path>>(&self, source_path: P) -> String {
        let output_path = spanstrip::incremental::generate_output_path(source_path.as_ref());
        fs::read_to_string(&output_path)
            .unwrap_or_else(|e| panic!("Failed to read output {}: {}", output_path.display(), e))
    }
}

/// Compare actual output against expected with a readable diff on failure
pub fn assert_golden(actual: &str, expected: &str, test_name: &str) {
    if actual != expected {
        panic!(
            "{} output mismatch:\n--- expected ---\n{}\n--- actual ---\n{}",
            test_name, expected, actual
        );
    }
}
