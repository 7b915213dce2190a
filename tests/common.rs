#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

/// Returns a configured Command for `compose-migrate`
pub fn compose_migrate_cmd() -> Command {
    let mut cmd = Command::cargo_bin("compose-migrate").expect("Binary not found");
    cmd.env_remove("RUST_LOG")
        .env_remove("COMPOSE_MIGRATE_LOG")
        .env_remove("COMPOSE_MIGRATE_SERVICE")
        .env_remove("COMPOSE_MIGRATE_FILE");
    cmd
}

/// A PATH directory of fake `docker` / `docker-compose` scripts.
///
/// Version checks exit with the configured status. Every other call appends its
/// argv to a log file as `[arg0][arg1]...` and exits with `$FAKE_EXIT_CODE`.
#[cfg(unix)]
pub struct FakeBin {
    dir: TempDir,
}

#[cfg(unix)]
impl FakeBin {
    pub fn new() -> Self {
        Self {
            dir: tempdir().expect("Failed to create temp directory"),
        }
    }

    pub fn with_docker(self, version_exit: i32) -> Self {
        let version_check = format!(
            "if [ \"$1\" = \"compose\" ] && [ \"$2\" = \"version\" ]; then exit {}; fi",
            version_exit
        );
        self.write_script("docker", &version_check);
        self
    }

    pub fn with_docker_compose(self, version_exit: i32) -> Self {
        let version_check = format!("if [ \"$1\" = \"version\" ]; then exit {}; fi", version_exit);
        self.write_script("docker-compose", &version_check);
        self
    }

    /// `docker` whose version check succeeds and then points the script at a
    /// missing interpreter, so the real command cannot be launched.
    pub fn with_docker_broken_after_version_check(self) -> Self {
        let version_check = "if [ \"$1\" = \"compose\" ] && [ \"$2\" = \"version\" ]; then printf '#!/nonexistent/interpreter\\n' > \"$0\"; exit 0; fi";
        self.write_script("docker", version_check);
        self
    }

    fn write_script(&self, name: &str, version_check: &str) {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\n{}\nprintf '[%s]' \"${{0##*/}}\" \"$@\" >> \"$FAKE_COMPOSE_LOG\"\nprintf '\\n' >> \"$FAKE_COMPOSE_LOG\"\nexit \"${{FAKE_EXIT_CODE:-0}}\"\n",
            version_check
        );
        let path = self.dir.path().join(name);
        fs::write(&path, script).expect("Failed to write fake script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake script executable");
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("invocations.log")
    }

    /// Recorded invocations other than version checks, one per line.
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .map(|log| log.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    /// Command whose PATH contains only the fake scripts.
    pub fn cmd(&self) -> Command {
        let mut cmd = compose_migrate_cmd();
        cmd.env("PATH", self.dir.path())
            .env("FAKE_COMPOSE_LOG", self.log_path())
            .env_remove("FAKE_EXIT_CODE");
        cmd
    }
}
