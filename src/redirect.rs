use std::path::PathBuf;

use crate::ast::{Command, REDIRECT_OP, TokenizedSegment};
use crate::error::ShellError;

/// Turn a tokenized segment into a [`Command`], pulling out the output
/// redirection if there is one.
///
/// A redirection is accepted only in the form `cmd [args...] > target`:
/// exactly one `>`, sitting second to last, with one word after it.
/// Anything else that mentions `>` is a syntax error.
pub fn extract_redirection(segment: TokenizedSegment) -> Result<Command, ShellError> {
    let TokenizedSegment {
        mut words,
        redirect_count,
    } = segment;
    let word_count = words.len();

    if words.first().is_none() {
        return Err(ShellError::EmptyCommand);
    }

    let redirect = match redirect_count {
        0 => None,
        1 => {
            if word_count < 3 || !is_operator(&words[word_count - 2]) {
                return Err(ShellError::RedirectSyntax);
            }
            let target = words.pop().map(PathBuf::from);
            words.pop();
            target
        }
        _ => return Err(ShellError::RedirectSyntax),
    };

    Ok(Command {
        argv: words,
        redirect,
        word_count,
    })
}

fn is_operator(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next() == Some(REDIRECT_OP) && chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;
    use pretty_assertions::assert_eq;

    fn command(segment: &str) -> Result<Command, ShellError> {
        extract_redirection(tokenize(segment))
    }

    #[test]
    fn no_operator_keeps_every_word() {
        let cmd = command("ls -l /tmp").unwrap();
        assert_eq!(cmd.argv, vec!["ls", "-l", "/tmp"]);
        assert_eq!(cmd.redirect, None);
        assert_eq!(cmd.word_count, 3);
    }

    #[test]
    fn simple_stdout_redirect() {
        let cmd = command("echo hello > out.txt").unwrap();
        assert_eq!(cmd.argv, vec!["echo", "hello"]);
        assert_eq!(cmd.redirect, Some(PathBuf::from("out.txt")));
        assert_eq!(cmd.word_count, 4);
    }

    #[test]
    fn unspaced_redirect_is_accepted() {
        let cmd = command("echo hi>out.txt").unwrap();
        assert_eq!(cmd.argv, vec!["echo", "hi"]);
        assert_eq!(cmd.redirect, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn bare_command_redirect() {
        let cmd = command("ls>listing").unwrap();
        assert_eq!(cmd.argv, vec!["ls"]);
        assert_eq!(cmd.redirect, Some(PathBuf::from("listing")));
    }

    #[test]
    fn operator_not_second_to_last_is_error() {
        assert!(matches!(command("echo > a b"), Err(ShellError::RedirectSyntax)));
    }

    #[test]
    fn missing_target_is_error() {
        assert!(matches!(command("echo hi >"), Err(ShellError::RedirectSyntax)));
        assert!(matches!(command("echo>"), Err(ShellError::RedirectSyntax)));
    }

    #[test]
    fn missing_command_is_error() {
        assert!(matches!(command("> out"), Err(ShellError::RedirectSyntax)));
        assert!(matches!(command(">"), Err(ShellError::RedirectSyntax)));
    }

    #[test]
    fn two_operators_always_error() {
        assert!(matches!(command("ls > a > b"), Err(ShellError::RedirectSyntax)));
        assert!(matches!(command("ls >> a"), Err(ShellError::RedirectSyntax)));
        assert!(matches!(command("ls x > >"), Err(ShellError::RedirectSyntax)));
    }

    #[test]
    fn empty_segment_cannot_become_a_command() {
        let empty = TokenizedSegment {
            words: Vec::new(),
            redirect_count: 0,
        };
        assert!(matches!(extract_redirection(empty), Err(ShellError::EmptyCommand)));
    }
}
