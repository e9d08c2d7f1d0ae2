use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Where command lines come from.
#[derive(Debug)]
pub enum Mode {
    /// Prompt and read from stdin.
    Interactive,
    /// Read from a file, echoing each line before it runs.
    Batch(PathBuf),
}

/// Pick the mode from the command-line arguments (program name excluded).
///
/// The first argument names the batch file. Extra arguments are ignored
/// unless one of them is itself readable, which is an invocation error, as
/// is a first argument that cannot be read while extras are present.
pub fn select_mode(args: &[String], readable: impl Fn(&Path) -> bool) -> Option<Mode> {
    match args {
        [] => Some(Mode::Interactive),
        [path] => Some(Mode::Batch(PathBuf::from(path))),
        [path, extra @ ..] => {
            let path = PathBuf::from(path);
            if !readable(&path) || extra.iter().any(|arg| readable(Path::new(arg))) {
                return None;
            }
            Some(Mode::Batch(path))
        }
    }
}

/// True if the file can be opened for reading.
pub fn is_readable(path: &Path) -> bool {
    File::open(path).is_ok()
}

/// One raw line as read, newline included when the input had one.
#[derive(Debug, PartialEq)]
pub struct RawLine(pub String);

impl RawLine {
    /// Length in bytes, newline included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_blank(&self) -> bool {
        crate::parser::is_blank(&self.0)
    }

    /// The text handed to the interpreter: trailing newline removed.
    pub fn command_text(&self) -> &str {
        self.0.strip_suffix('\n').unwrap_or(&self.0)
    }

    /// Write the line back out exactly as read, ending it if the input didn't.
    pub fn echo(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.0.as_bytes())?;
        if !self.0.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

/// Reads whole lines from stdin or a batch file.
pub struct LineSource {
    reader: Box<dyn BufRead>,
}

impl LineSource {
    pub fn stdin() -> Self {
        Self::from_reader(Box::new(io::stdin().lock()))
    }

    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(Box::new(BufReader::new(file))))
    }

    pub fn from_reader(reader: Box<dyn BufRead>) -> Self {
        Self { reader }
    }

    /// Next line, or `None` at end of input. Invalid UTF-8 is decoded lossily.
    pub fn next_line(&mut self) -> io::Result<Option<RawLine>> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(RawLine(String::from_utf8_lossy(&buf).into_owned()))),
        }
    }
}
