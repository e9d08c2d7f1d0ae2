use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

/// The one line a user ever sees when a segment fails.
pub const ERROR_MESSAGE: &str = "An error has occurred\n";

/// Why a segment failed. Every variant is reported with the same
/// [`ERROR_MESSAGE`]; the detail only reaches the log.
#[derive(Debug, Error)]
pub enum ShellError {
    /// `>` misplaced, repeated, or missing its target.
    #[error("malformed redirection")]
    RedirectSyntax,

    /// The redirection target could not be created (it already exists,
    /// permission denied, bad path).
    #[error("cannot create {}: {source}", path.display())]
    RedirectTarget { path: PathBuf, source: io::Error },

    /// A segment with no command word in it.
    #[error("empty command")]
    EmptyCommand,

    #[error("{name}: wrong number of arguments")]
    BuiltinArgs { name: &'static str },

    #[error("cd: {}: {source}", path.display())]
    ChangeDir { path: PathBuf, source: io::Error },

    #[error("cd: home directory could not be resolved")]
    HomeUnresolved,

    #[error("cannot read current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// The program could not be located or started.
    #[error("{program}: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("write to output failed: {0}")]
    Output(#[source] io::Error),
}

/// Report the outcome of one segment: nothing on success, exactly one
/// [`ERROR_MESSAGE`] on failure.
pub fn report<T>(result: &Result<T, ShellError>, out: &mut dyn Write) {
    if let Err(e) = result {
        log::warn!("segment failed: {e}");
        let _ = out.write_all(ERROR_MESSAGE.as_bytes());
        let _ = out.flush();
    }
}

/// Emit the uniform error line outside of segment evaluation
/// (bad invocation, overlong input lines).
pub fn print_error(out: &mut dyn Write) {
    let _ = out.write_all(ERROR_MESSAGE.as_bytes());
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_writes_nothing() {
        let mut out = Vec::new();
        report::<()>(&Ok(()), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn every_failure_kind_prints_the_same_line() {
        let failures = vec![
            ShellError::RedirectSyntax,
            ShellError::BuiltinArgs { name: "pwd" },
            ShellError::HomeUnresolved,
            ShellError::EmptyCommand,
            ShellError::Spawn {
                program: "nope".into(),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
            ShellError::ChangeDir {
                path: PathBuf::from("/missing"),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
        ];

        for failure in failures {
            let mut out = Vec::new();
            report::<()>(&Err(failure), &mut out);
            assert_eq!(String::from_utf8(out).unwrap(), ERROR_MESSAGE);
        }
    }

    #[test]
    fn detail_is_kept_in_display() {
        let err = ShellError::RedirectTarget {
            path: PathBuf::from("out.txt"),
            source: io::Error::from(io::ErrorKind::AlreadyExists),
        };
        assert!(err.to_string().starts_with("cannot create out.txt"));
    }
}
