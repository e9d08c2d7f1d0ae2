use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::process::{Command as Process, ExitStatus, Stdio};

use crate::ast::{Command, Flow};
use crate::builtins::{self, Builtin};
use crate::error::{ERROR_MESSAGE, ShellError};
use crate::workdir::WorkingDir;

/// Permission bits for files created by `>`.
#[cfg(unix)]
const REDIRECT_MODE: u32 = 0o777;

/// Route a command to its builtin handler or run it as an external program.
///
/// `stdout` is flushed before any child starts so that earlier output is not
/// reordered behind the child's.
pub fn dispatch(
    cmd: &Command,
    dir: &mut dyn WorkingDir,
    stdout: &mut dyn Write,
) -> Result<Flow, ShellError> {
    if let Some(builtin) = Builtin::lookup(cmd.name()) {
        log::debug!("builtin {builtin:?} ({} words)", cmd.word_count);
        return builtins::execute(builtin, cmd, dir, stdout);
    }

    stdout.flush().map_err(ShellError::Output)?;
    let cwd = dir.current().map_err(ShellError::CurrentDir)?;
    match run_external(cmd, &cwd)? {
        Outcome::Exited(status) => {
            log::debug!("{} exited with {}", cmd.name(), exit_code(status));
        }
        Outcome::ReportedToTarget => {
            log::debug!("{} did not start, error written to target", cmd.name());
        }
    }
    Ok(Flow::Continue)
}

/// How an external command ended.
#[derive(Debug)]
pub enum Outcome {
    /// The child ran; its own status is not an error.
    Exited(ExitStatus),
    /// The program could not be started after its output had already been
    /// pointed at the redirect target, so the error line went there.
    ReportedToTarget,
}

/// Spawn `cmd.argv` in `cwd` and block until it terminates.
///
/// With a redirection the target is created first (it must not exist yet)
/// and becomes the child's stdout. A program that cannot be started then
/// reports into the target rather than the interpreter's output. The file
/// handles live only as long as this call, on success and on failure alike.
pub fn run_external(cmd: &Command, cwd: &Path) -> Result<Outcome, ShellError> {
    let mut process = Process::new(cmd.name());
    process.args(&cmd.argv[1..]).current_dir(cwd);

    let mut target = None;
    if let Some(path) = &cmd.redirect {
        let path = cwd.join(path);
        let file = create_target(&path)?;
        let report = file.try_clone().map_err(|source| ShellError::RedirectTarget {
            path: path.clone(),
            source,
        })?;
        process.stdout(Stdio::from(file));
        target = Some(report);
    }

    log::debug!("spawning {:?}", cmd.argv);
    match (process.status(), target) {
        (Ok(status), _) => Ok(Outcome::Exited(status)),
        (Err(source), Some(mut report)) => {
            log::warn!("{}: {source}", cmd.name());
            let _ = report.write_all(ERROR_MESSAGE.as_bytes());
            Ok(Outcome::ReportedToTarget)
        }
        (Err(source), None) => Err(ShellError::Spawn {
            program: cmd.name().to_string(),
            source,
        }),
    }
}

/// Create a brand new output file. An existing file is never truncated.
fn create_target(path: &Path) -> Result<File, ShellError> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(REDIRECT_MODE);
    }

    options.open(path).map_err(|source| ShellError::RedirectTarget {
        path: path.to_path_buf(),
        source,
    })
}

/// Derive a shell-style exit code from a process status.
/// On Unix a process killed by signal N reports 128+N.
fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    status.code().unwrap_or(1)
}
