#![allow(clippy::module_name_repetitions)]
//! Run the configured `tf` executable with an argument vector and capture the outcome.
//!
//! - Arguments go straight to the OS as a vector; no shell is involved.
//! - Stdout and stderr are drained on helper threads while waiting, so large output cannot
//!   block the child on a full pipe. Bytes are decoded lossily and never fail.
//! - Stdin is closed; `tf` must not wait for interactive input.
//! - Every path that spawned a child also reaps it (wait after kill).
//! - With a timeout on Unix the child leads its own process group, and expiry kills the whole
//!   group so grandchildren cannot keep the output pipes open past the deadline.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::instrument;
use wait_timeout::ChildExt;

use crate::config::ClientConfig;
use crate::errors::{display_for_tfs_error, TfsError};
use crate::result::CommandResult;
use crate::util::command_line;

#[derive(Debug, Clone)]
pub struct Executor {
    config: ClientConfig,
}

enum Finish {
    Exited(ExitStatus),
    TimedOut(Duration),
}

impl Executor {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Command line `execute` would report for `args`.
    pub fn command_line(&self, args: &[String]) -> String {
        command_line(self.config.executable(), args)
    }

    /// Run and fold every outcome into a `CommandResult`. Never fails.
    pub fn execute(&self, args: &[String]) -> CommandResult {
        match self.execute_checked(args) {
            Ok(result) => result,
            Err(e) => CommandResult::launch_failure(self.command_line(args), display_for_tfs_error(&e)),
        }
    }

    /// Like `execute`, but a child that could not be started (or waited on) is an `Err`.
    #[instrument(
        level = "debug",
        skip(self, args),
        fields(
            tf_exe = %self.config.executable(),
            cwd = %self.config.working_directory().display(),
            argc = args.len()
        )
    )]
    pub fn execute_checked(&self, args: &[String]) -> Result<CommandResult, TfsError> {
        let command = self.command_line(args);
        tracing::debug!(%command, "spawning tf");

        let mut cmd = Command::new(self.config.executable());
        cmd.args(args)
            .current_dir(self.config.working_directory())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        #[cfg(unix)]
        if self.config.timeout().is_some() {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }
        let mut child = cmd
            .spawn()
            .map_err(|e| {
                tracing::warn!(%command, error = %e, "failed to launch tf");
                TfsError::Launch(e)
            })?;

        let stdout_reader = drain(child.stdout.take());
        let stderr_reader = drain(child.stderr.take());

        let started = Instant::now();
        let finish = self.wait(&mut child);
        let stdout = collect(stdout_reader);
        let stderr = collect(stderr_reader);
        let elapsed = started.elapsed();

        let result = match finish? {
            Finish::Exited(status) => match status.code() {
                Some(code) => CommandResult::completed(command, code, stdout, stderr),
                None => CommandResult::terminated(command, stdout, stderr, &describe(status)),
            },
            Finish::TimedOut(timeout) => {
                tracing::warn!(%command, ?timeout, "tf timed out; child killed");
                CommandResult::timed_out(command, timeout, stdout)
            }
        };
        tracing::debug!(
            return_code = result.return_code,
            elapsed_ms = elapsed.as_millis() as u64,
            "tf finished"
        );
        Ok(result)
    }

    fn wait(&self, child: &mut Child) -> Result<Finish, TfsError> {
        let waited = match self.config.timeout() {
            None => child.wait().map(Some),
            Some(timeout) => child.wait_timeout(timeout),
        };
        match waited {
            Ok(Some(status)) => Ok(Finish::Exited(status)),
            Ok(None) => {
                self.kill(child);
                let _ = child.wait();
                Ok(Finish::TimedOut(self.config.timeout().unwrap_or_default()))
            }
            Err(e) => {
                self.kill(child);
                let _ = child.wait();
                Err(TfsError::Wait(e))
            }
        }
    }

    fn kill(&self, child: &mut Child) {
        #[cfg(unix)]
        if self.config.timeout().is_some() {
            use nix::sys::signal::{kill, Signal};
            use nix::unistd::Pid;
            if let Ok(pgid) = i32::try_from(child.id()) {
                let _ = kill(Pid::from_raw(-pgid), Signal::SIGKILL);
            }
        }
        let _ = child.kill();
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut reader) = pipe {
            let _ = reader.read_to_end(&mut buf);
        }
        buf
    })
}

fn collect(handle: JoinHandle<Vec<u8>>) -> String {
    let bytes = handle.join().unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(unix)]
fn describe(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(sig) => format!("signal {sig}"),
        None => status.to_string(),
    }
}

#[cfg(not(unix))]
fn describe(status: ExitStatus) -> String {
    status.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::NO_EXIT_CODE;

    #[test]
    fn missing_executable_is_launch_failure() {
        let cfg = ClientConfig::default().with_executable("tfs-bridge-no-such-tf-binary");
        let exec = Executor::new(cfg);
        let args = vec!["status".to_string(), ".".to_string()];

        let r = exec.execute(&args);
        assert!(!r.success);
        assert_eq!(r.return_code, NO_EXIT_CODE);
        assert_eq!(r.output, "");
        assert!(!r.error.as_deref().unwrap_or_default().is_empty());
        assert_eq!(r.command, "tfs-bridge-no-such-tf-binary status .");

        let err = exec.execute_checked(&args).unwrap_err();
        assert!(matches!(err, TfsError::Launch(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[cfg(unix)]
    fn sh_executor(dir: &std::path::Path) -> Executor {
        Executor::new(
            ClientConfig::default()
                .with_executable("/bin/sh")
                .with_working_directory(dir),
        )
    }

    #[cfg(unix)]
    fn script(body: &str) -> Vec<String> {
        vec!["-c".to_string(), body.to_string()]
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_reports_stderr_and_keeps_stdout() {
        let td = tempfile::tempdir().expect("tmpdir");
        let r = sh_executor(td.path()).execute(&script("echo partial; echo 'not found' >&2; exit 1"));
        assert!(!r.success);
        assert_eq!(r.return_code, 1);
        assert_eq!(r.output, "partial\n");
        assert_eq!(r.error.as_deref(), Some("not found\n"));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_has_no_error() {
        let td = tempfile::tempdir().expect("tmpdir");
        let r = sh_executor(td.path()).execute(&script("echo ok; echo warn >&2"));
        assert!(r.success);
        assert_eq!(r.return_code, 0);
        assert_eq!(r.output, "ok\n");
        assert_eq!(r.error, None);
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_configured_working_directory() {
        let td = tempfile::tempdir().expect("tmpdir");
        let canon = std::fs::canonicalize(td.path()).expect("canonicalize");
        let r = sh_executor(&canon).execute(&script("pwd -P"));
        assert_eq!(r.output.trim(), canon.display().to_string());
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let td = tempfile::tempdir().expect("tmpdir");
        let r = sh_executor(td.path()).execute(&script("printf 'a\\377b'"));
        assert!(r.success);
        assert_eq!(r.output, "a\u{FFFD}b");
    }

    #[cfg(unix)]
    #[test]
    fn large_output_does_not_deadlock() {
        let td = tempfile::tempdir().expect("tmpdir");
        let r = sh_executor(td.path())
            .execute(&script("i=0; while [ $i -lt 20000 ]; do echo line-$i-xxxxxxxxxxxxxxxx; i=$((i+1)); done"));
        assert!(r.success);
        assert_eq!(r.output.lines().count(), 20000);
    }

    #[cfg(unix)]
    #[test]
    fn timeout_kills_child() {
        let td = tempfile::tempdir().expect("tmpdir");
        let exec = Executor::new(
            ClientConfig::default()
                .with_executable("/bin/sh")
                .with_working_directory(td.path())
                .with_timeout(Some(Duration::from_millis(200))),
        );
        let started = Instant::now();
        let r = exec.execute(&script("echo early; exec sleep 5"));
        assert!(started.elapsed() < Duration::from_secs(4));
        assert!(!r.success);
        assert_eq!(r.return_code, NO_EXIT_CODE);
        assert!(r.error.unwrap().contains("timed out"));
    }

    #[cfg(unix)]
    #[test]
    fn timeout_kills_grandchildren_holding_pipes() {
        let td = tempfile::tempdir().expect("tmpdir");
        let exec = Executor::new(
            ClientConfig::default()
                .with_executable("/bin/sh")
                .with_working_directory(td.path())
                .with_timeout(Some(Duration::from_millis(200))),
        );
        let started = Instant::now();
        let r = exec.execute(&script("sleep 5; echo done"));
        assert!(started.elapsed() < Duration::from_secs(4), "took {:?}", started.elapsed());
        assert!(!r.success);
        assert_eq!(r.return_code, NO_EXIT_CODE);
        assert!(!r.output.contains("done"));
        assert_eq!(r.error.as_deref(), Some("command timed out after 200ms"));
    }
}
