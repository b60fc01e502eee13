//! File records flowing through the merge pipeline.
//!
//! A [`FileRecord`] is a named blob: the aggregator only reads `path` and
//! `contents` from inputs, and copies `cwd`/`base` from the first accepted
//! input onto the records it synthesizes.

use std::{
    env, fmt,
    io::Read,
    path::{Path, PathBuf},
};

/// Payload of a file record.
pub enum Contents {
    /// No payload (a directory or placeholder); passed through untouched.
    Null,
    /// Fully buffered content.
    Buffer(Vec<u8>),
    /// Incrementally delivered content. Rejected by the aggregator.
    Stream(Box<dyn Read + Send>),
}

impl fmt::Debug for Contents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contents::Null => f.write_str("Null"),
            Contents::Buffer(bytes) => write!(f, "Buffer(<{} bytes>)", bytes.len()),
            Contents::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

#[derive(Debug)]
pub struct FileRecord {
    pub cwd: PathBuf,
    pub base: PathBuf,
    pub path: PathBuf,
    pub contents: Contents,
}

impl FileRecord {
    /// Create a record whose `base` is the parent directory of `path` and
    /// whose `cwd` is the current working directory.
    pub fn new(path: impl Into<PathBuf>, contents: Contents) -> Self {
        let path = path.into();
        let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self {
            cwd: env::current_dir().unwrap_or_default(),
            base,
            path,
            contents,
        }
    }

    pub fn buffer(path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(path, Contents::Buffer(bytes.into()))
    }

    pub fn null(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Contents::Null)
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = base.into();
        self
    }

    pub fn is_null(&self) -> bool {
        matches!(self.contents, Contents::Null)
    }

    pub fn is_stream(&self) -> bool {
        matches!(self.contents, Contents::Stream(_))
    }

    /// Final component of `path`, or an empty string when there is none.
    pub fn basename(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// `path` relative to `base`. Falls back to the base name when `path`
    /// does not live under `base`.
    pub fn relative(&self) -> PathBuf {
        match self.path.strip_prefix(&self.base) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => PathBuf::from(self.basename()),
        }
    }

    /// Display form of `path` used in warnings and errors.
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// Buffered bytes, if any.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.contents {
            Contents::Buffer(bytes) => Some(bytes),
            _ => None,
        }
    }
}
