use std::io;
use std::path::{Path, PathBuf};

/// Access to the interpreter's working directory.
///
/// `cd` and `pwd` only ever go through this trait, and the executor asks it
/// where children should start, so tests can swap in an in-memory directory.
pub trait WorkingDir {
    fn current(&self) -> io::Result<PathBuf>;
    fn change(&mut self, path: &Path) -> io::Result<()>;
    fn home(&self) -> Option<PathBuf>;
}

/// The real process working directory.
#[derive(Debug, Default)]
pub struct ProcessDir;

impl WorkingDir for ProcessDir {
    fn current(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn change(&mut self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }

    fn home(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_dir_refuses_a_plain_file() {
        let file = std::env::temp_dir().join(format!("myshell_cd_file_{}", std::process::id()));
        std::fs::write(&file, "not a directory").unwrap();

        let mut dir = ProcessDir;
        let before = dir.current().unwrap();
        assert!(dir.change(&file).is_err());
        assert_eq!(dir.current().unwrap(), before);

        let _ = std::fs::remove_file(&file);
    }
}
