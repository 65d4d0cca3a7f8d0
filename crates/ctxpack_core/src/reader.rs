use std::{fs, io, path::Path};

/// Source of file contents for an aggregation run.
pub trait FileReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reads straight from the local filesystem.
///
/// Invalid UTF-8 sequences are replaced with `U+FFFD` instead of failing the
/// read, so a latin-1 file among the dependencies does not abort the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
