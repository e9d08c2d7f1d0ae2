use std::path::PathBuf;

/// The redirection operator. Always its own word after tokenizing.
pub const REDIRECT_OP: char = '>';

/// Splits one input line into independently evaluated segments.
pub const SEGMENT_SEPARATOR: char = ';';

/// Words of one segment plus the number of raw `>` characters it contained.
///
/// `redirect_count` is taken from the segment text before the words were
/// split, so `a>>b` counts two operators.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizedSegment {
    pub words: Vec<String>,
    pub redirect_count: usize,
}

/// A command ready for dispatch.
///
/// `argv[0]` is the command name. When the segment redirected its output,
/// `argv` no longer contains the operator or the target, and `word_count`
/// still records how many words the segment had in total.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub argv: Vec<String>,
    pub redirect: Option<PathBuf>,
    pub word_count: usize,
}

impl Command {
    pub fn name(&self) -> &str {
        &self.argv[0]
    }
}

/// What the interpreter should do after a line (or a segment) is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// `exit` ran: stop immediately, skip the rest of the line.
    Exit(i32),
}
