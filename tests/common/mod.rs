//! Shared testing utilities for depviz CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `config.xml` with the given top-level fields.
    pub fn write_config(&self, fields: &[(&str, &str)]) -> PathBuf {
        self.write_file("config.xml", &config_xml(fields))
    }

    /// Build a command for invoking the compiled `depviz` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("depviz").expect("Failed to locate depviz binary");
        cmd.current_dir(self.work_dir())
            .env_remove("DEPVIZ_REGISTRY_URL")
            .env_remove("DEPVIZ_LOG");
        cmd
    }
}

/// Render an XML configuration document.
#[allow(dead_code)]
pub fn config_xml(fields: &[(&str, &str)]) -> String {
    let body: String =
        fields.iter().map(|(name, value)| format!("    <{0}>{1}</{0}>\n", name, value)).collect();
    format!("<?xml version=\"1.0\"?>\n<config>\n{}</config>\n", body)
}
