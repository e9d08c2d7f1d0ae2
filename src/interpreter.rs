use std::io::Write;

use crate::ast::Flow;
use crate::error::{self, ShellError};
use crate::executor;
use crate::parser;
use crate::redirect;
use crate::workdir::WorkingDir;

/// Evaluates command lines one segment at a time.
pub struct Interpreter<D, W> {
    dir: D,
    stdout: W,
}

impl<D: WorkingDir, W: Write> Interpreter<D, W> {
    pub fn new(dir: D, stdout: W) -> Self {
        Self { dir, stdout }
    }

    /// The stream builtins and error reports are written to.
    pub fn stdout(&mut self) -> &mut W {
        &mut self.stdout
    }

    /// Run every segment of `line` in order. A failing segment does not stop
    /// the ones after it; `exit` does.
    pub fn run_line(&mut self, line: &str) -> Flow {
        for segment in parser::split_segments(line) {
            let result = self.run_segment(segment);
            error::report(&result, &mut self.stdout);
            if let Ok(Flow::Exit(code)) = result {
                return Flow::Exit(code);
            }
        }
        Flow::Continue
    }

    fn run_segment(&mut self, segment: &str) -> Result<Flow, ShellError> {
        log::debug!("segment: {segment:?}");
        let tokens = parser::tokenize(segment);
        let cmd = redirect::extract_redirection(tokens)?;
        executor::dispatch(&cmd, &mut self.dir, &mut self.stdout)
    }
}
