use std::process::Command;

use tracing::debug;

use crate::core::package::DependencyRecord;
use crate::error::{DepvizError, Result};
use crate::source::parse_freeze_output;
use crate::source::traits::DependencySource;

/// Runs `<program> freeze` and reads the installed packages from stdout.
#[derive(Debug, Clone)]
pub struct PipFreezeSource {
    program: String,
}

impl PipFreezeSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn unavailable(&self, reason: String) -> DepvizError {
        DepvizError::DependencySourceUnavailable {
            source_id: format!("{} freeze", self.program),
            reason,
        }
    }
}

impl DependencySource for PipFreezeSource {
    fn id(&self) -> &str {
        &self.program
    }

    fn list(&self) -> Result<Vec<DependencyRecord>> {
        debug!(program = %self.program, "running freeze");
        let output = Command::new(&self.program)
            .arg("freeze")
            .output()
            .map_err(|err| self.unavailable(format!("failed to run: {}", err)))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.unavailable(format!("{}: {}", output.status, stderr.trim())));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let records = parse_freeze_output(&stdout);
        debug!(count = records.len(), "freeze listing read");
        Ok(records)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::error::DepvizError;
    use crate::source::pip::PipFreezeSource;
    use crate::source::traits::DependencySource;

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before epoch")
            .as_nanos();
        let pid = std::process::id();
        let dir = std::env::temp_dir().join(format!("depviz-{prefix}-{pid}-{nanos}"));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    fn write_script(path: &Path, body: &str) {
        fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("write script");
        let mut perms = fs::metadata(path).expect("script metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).expect("chmod script");
    }

    #[test]
    fn reads_records_from_fake_pip() {
        let dir = unique_temp_dir("pip-ok");
        let pip = dir.join("pip");
        write_script(
            &pip,
            "[ \"$1\" = freeze ] || exit 3\nprintf 'click==8.1.7\\nflask==3.0.0\\n'",
        );

        let source = PipFreezeSource::new(pip.to_string_lossy());
        let records = source.list().expect("list records");
        let names: Vec<String> = records
            .iter()
            .map(|record| record.name().as_str().to_string())
            .collect();
        assert_eq!(names, vec!["click", "flask"]);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn failing_pip_is_unavailable() {
        let dir = unique_temp_dir("pip-fail");
        let pip = dir.join("pip");
        write_script(&pip, "echo 'no environment' >&2\nexit 1");

        let err = PipFreezeSource::new(pip.to_string_lossy())
            .list()
            .expect_err("pip fails");
        match err {
            DepvizError::DependencySourceUnavailable { reason, .. } => {
                assert!(reason.contains("no environment"), "reason: {reason}");
            }
            other => panic!("unexpected error: {other}"),
        }

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_program_is_unavailable() {
        let err = PipFreezeSource::new("/nonexistent/depviz/pip")
            .list()
            .expect_err("missing program");
        assert!(matches!(err, DepvizError::DependencySourceUnavailable { .. }));
    }
}
