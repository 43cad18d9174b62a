//! Subject program invocation
//!
//! Each query runs `<program> <from> <to>` to completion and captures its
//! stdout. A subject that outlives the timeout is killed and reaped before
//! the query returns, so no run leaves a process behind.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use crate::common::{Error, Result};
use crate::graph::Location;

/// What a single query produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The subject exited on its own
    Completed {
        stdout: String,
        /// `None` when terminated by a signal
        exit_code: Option<i32>,
    },
    /// The subject was killed after running past the timeout
    TimedOut { after: Duration },
}

/// Answers connection queries
#[async_trait]
pub trait Oracle: Send + Sync {
    async fn query(&self, from: &Location, to: &Location) -> Result<Outcome>;
}

/// Runs an external executable once per query
#[derive(Debug, Clone)]
pub struct SubjectProcess {
    program: PathBuf,
    timeout: Duration,
}

impl SubjectProcess {
    pub fn new(program: PathBuf, timeout: Duration) -> Self {
        Self { program, timeout }
    }

    /// Resolve `program` and check it exists before any case runs
    ///
    /// Anything with a directory component is taken as a path; a bare name
    /// is searched for on `PATH`.
    pub fn resolve(program: &Path, timeout: Duration) -> Result<Self> {
        let has_dir = program.components().count() > 1 || program.is_absolute();
        let resolved = if has_dir {
            if !program.exists() {
                return Err(Error::SubjectNotFound(program.display().to_string()));
            }
            program.to_path_buf()
        } else {
            which::which(program)
                .map_err(|_| Error::SubjectNotFound(program.display().to_string()))?
        };
        tracing::debug!(program = %resolved.display(), ?timeout, "Resolved subject program");
        Ok(Self::new(resolved, timeout))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Oracle for SubjectProcess {
    async fn query(&self, from: &Location, to: &Location) -> Result<Outcome> {
        let mut child = Command::new(&self.program)
            .arg(from.as_str())
            .arg(to.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::subject_launch(&self.program, e))?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let run = async {
            let (status, out, err) =
                tokio::join!(child.wait(), read_pipe(stdout), read_pipe(stderr));
            Ok::<_, io::Error>((status?, out?, err?))
        };
        let result = tokio::time::timeout(self.timeout, run).await;

        match result {
            Ok(Ok((status, out, err))) => {
                if !err.is_empty() {
                    tracing::debug!(
                        from = %from,
                        to = %to,
                        stderr = %String::from_utf8_lossy(&err).trim_end(),
                        "Subject wrote to stderr"
                    );
                }
                if !status.success() {
                    tracing::warn!(from = %from, to = %to, %status, "Subject exited unsuccessfully");
                }
                Ok(Outcome::Completed {
                    stdout: String::from_utf8_lossy(&out).into_owned(),
                    exit_code: status.code(),
                })
            }
            Ok(Err(e)) => Err(Error::Io(e)),
            Err(_) => {
                tracing::warn!(from = %from, to = %to, timeout = ?self.timeout, "Subject timed out");
                if let Err(e) = child.kill().await {
                    tracing::warn!(error = %e, "Failed to kill timed out subject");
                }
                Ok(Outcome::TimedOut {
                    after: self.timeout,
                })
            }
        }
    }
}

async fn read_pipe<R: AsyncRead + Unpin>(pipe: Option<R>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[tokio::test]
    async fn test_query_passes_locations_as_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let program = script(dir.path(), "echo_args", "printf '%s|%s\\n' \"$1\" \"$2\"");
        let subject = SubjectProcess::new(program, Duration::from_secs(5));

        let outcome = subject
            .query(&Location::from("Le Havre"), &Location::from("English Channel"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Completed {
                stdout: "Le Havre|English Channel\n".to_string(),
                exit_code: Some(0),
            }
        );
    }

    #[tokio::test]
    async fn test_query_nonzero_exit_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let program = script(dir.path(), "fails", "echo header; echo oops >&2; exit 3");
        let subject = SubjectProcess::new(program, Duration::from_secs(5));

        let outcome = subject
            .query(&Location::from("A"), &Location::from("B"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::Completed {
                stdout: "header\n".to_string(),
                exit_code: Some(3),
            }
        );
    }

    #[tokio::test]
    async fn test_query_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let program = script(dir.path(), "hangs", "exec sleep 30");
        let subject = SubjectProcess::new(program, Duration::from_millis(200));

        let started = std::time::Instant::now();
        let outcome = subject
            .query(&Location::from("A"), &Location::from("B"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::TimedOut {
                after: Duration::from_millis(200)
            }
        );
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_query_launch_failure() {
        let subject = SubjectProcess::new(
            PathBuf::from("/nonexistent/conn"),
            Duration::from_secs(1),
        );
        let err = subject
            .query(&Location::from("A"), &Location::from("B"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::SubjectLaunch { .. }));
    }

    #[test]
    fn test_resolve_missing_path() {
        let err = SubjectProcess::resolve(Path::new("./definitely-not-here/conn"), Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, Error::SubjectNotFound(_)));
    }

    #[test]
    fn test_resolve_bare_name_on_path() {
        let subject = SubjectProcess::resolve(Path::new("sh"), Duration::from_secs(1)).unwrap();
        assert!(subject.program().is_absolute());
    }
}
