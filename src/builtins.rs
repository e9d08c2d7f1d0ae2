use std::io::Write;
use std::path::Path;

use crate::ast::{Command, Flow};
use crate::error::ShellError;
use crate::workdir::WorkingDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Pwd,
    Cd,
}

impl Builtin {
    /// Classify a command name. Exact, case-sensitive match only.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "exit" => Some(Self::Exit),
            "pwd" => Some(Self::Pwd),
            "cd" => Some(Self::Cd),
            _ => None,
        }
    }
}

/// Execute a builtin command, writing output to `stdout`.
///
/// Argument counts include the command name and, when present, the
/// redirection operator and target: builtins cannot be redirected.
pub fn execute(
    builtin: Builtin,
    cmd: &Command,
    dir: &mut dyn WorkingDir,
    stdout: &mut dyn Write,
) -> Result<Flow, ShellError> {
    let argc = cmd.word_count;
    match builtin {
        Builtin::Exit => builtin_exit(argc),
        Builtin::Pwd => builtin_pwd(argc, dir, stdout).map(|()| Flow::Continue),
        Builtin::Cd => builtin_cd(cmd, dir).map(|()| Flow::Continue),
    }
}

fn builtin_exit(argc: usize) -> Result<Flow, ShellError> {
    if argc != 1 {
        return Err(ShellError::BuiltinArgs { name: "exit" });
    }
    Ok(Flow::Exit(0))
}

fn builtin_pwd(
    argc: usize,
    dir: &dyn WorkingDir,
    stdout: &mut dyn Write,
) -> Result<(), ShellError> {
    if argc != 1 {
        return Err(ShellError::BuiltinArgs { name: "pwd" });
    }
    let path = dir.current().map_err(ShellError::CurrentDir)?;
    writeln!(stdout, "{}", path.display()).map_err(ShellError::Output)?;
    stdout.flush().map_err(ShellError::Output)
}

fn builtin_cd(cmd: &Command, dir: &mut dyn WorkingDir) -> Result<(), ShellError> {
    let target = match cmd.word_count {
        1 => dir.home().ok_or(ShellError::HomeUnresolved)?,
        2 => Path::new(&cmd.argv[1]).to_path_buf(),
        _ => return Err(ShellError::BuiltinArgs { name: "cd" }),
    };

    log::debug!("cd {}", target.display());
    dir.change(&target).map_err(|source| ShellError::ChangeDir {
        path: target,
        source,
    })
}
