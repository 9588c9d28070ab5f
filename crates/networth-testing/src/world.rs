//! Declarative setups for router and CLI tests.

use anyhow::Result;
use assert_cmd::Command;
use networth_router::{HistoryLocation, SectionRouter};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use tempfile::TempDir;

use crate::document::FakeDocument;
use crate::listeners::{FailingListener, Recording, RecordingListener};

/// Router setup builder.
///
/// # Example
/// ```
/// use networth_testing::RouterWorld;
///
/// let mut fixture = RouterWorld::new().with_fragment("#trends").initialize().unwrap();
/// assert_eq!(fixture.router.current_section().as_str(), "trends");
///
/// fixture.router.navigate("dashboard");
/// assert_eq!(fixture.recording.sections(), vec!["trends", "dashboard"]);
/// ```
pub struct RouterWorld {
    document: FakeDocument,
    fragment: String,
    failing_listener: bool,
}

/// An initialized router plus everything a test needs to observe it.
pub struct RouterFixture {
    pub router: SectionRouter<HistoryLocation>,
    pub recording: Recording,
    pub document: FakeDocument,
}

impl Default for RouterWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterWorld {
    /// Standard document (all known sections), empty fragment.
    pub fn new() -> Self {
        Self {
            document: FakeDocument::standard(),
            fragment: String::new(),
            failing_listener: false,
        }
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = fragment.into();
        self
    }

    pub fn with_document(mut self, document: FakeDocument) -> Self {
        self.document = document;
        self
    }

    /// Register a listener that errors on every notification, ahead of the
    /// recording listener.
    pub fn with_failing_listener(mut self) -> Self {
        self.failing_listener = true;
        self
    }

    pub fn initialize(self) -> networth_router::Result<RouterFixture> {
        let RouterWorld {
            mut document,
            fragment,
            failing_listener,
        } = self;

        let (recorder, recording) = RecordingListener::new("recorder");
        let mut builder = SectionRouter::builder(HistoryLocation::new(fragment));
        if failing_listener {
            builder = builder.listener(FailingListener);
        }
        let router = builder.listener(recorder).initialize(&mut document)?;

        Ok(RouterFixture {
            router,
            recording,
            document,
        })
    }
}

/// Isolated data directory for running the `networth` binary.
pub struct CliWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for CliWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl CliWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".networth");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write raw TOML to the data directory's config file.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
        self
    }

    /// Point a command at this world's data directory.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run the `networth` binary with `args`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("networth")
            .map_err(|e| anyhow::anyhow!("Failed to find networth binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[derive(Debug)]
pub struct CliResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
