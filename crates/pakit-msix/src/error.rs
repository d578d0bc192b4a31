use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not a valid msix package")]
    NotAPackage,

    #[error("package has no signature part")]
    Unsigned,

    #[error("signature part is corrupted")]
    Corrupted,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit code carried through pipeline termination.
    /// Each kind gets its own non-zero code so callers can tell the
    /// causes apart; all are distinct from the generic failure exit of 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NotAPackage => 3,
            Error::Unsigned => 4,
            Error::Corrupted => 5,
            Error::Io(_) => 6,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
