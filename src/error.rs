use std::io;
use std::path::PathBuf;

use crate::common::io_error_msg;

/// Every way a run can end early. The sort core itself never produces one;
/// all of these come from console input, directory listing or file I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("'{input}' is not a valid number")]
    InvalidNumber { input: String },

    #[error("selection {selection} is out of range (1-{count})")]
    OutOfRange { selection: i64, count: usize },

    #[error("directory does not exist: {}", .path.display())]
    DirectoryMissing { path: PathBuf },

    #[error("no files in {}", .path.display())]
    NoFiles { path: PathBuf },

    #[error("{}: file is empty or contains no valid data", .path.display())]
    EmptyInput { path: PathBuf },

    #[error("{}: {}", .path.display(), io_error_msg(.source))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {}", .path.display(), io_error_msg(.source))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("console: {}", io_error_msg(.0))]
    Console(#[source] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Console(e)
    }
}
