use core::fmt::{Display, Formatter};

/// Reasons a handle could not be removed from a queue.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The handle's element was already removed, by `remove`, `pop` or `clear`.
    Retired,
    /// The handle was issued by a different queue.
    ForeignQueue,
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Retired => write!(fmt, "handle has already been removed from its queue"),
            Error::ForeignQueue => write!(fmt, "handle belongs to a different queue"),
        }
    }
}

impl std::error::Error for Error {}
