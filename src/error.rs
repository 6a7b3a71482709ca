use std::{alloc::Layout, fmt};

/// Errors reported by the fallible [`SimpleVec`] and [`RawBuf`] operations.
///
/// [`SimpleVec`]: crate::SimpleVec
/// [`RawBuf`]: crate::RawBuf
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The requested number of slots does not fit in `isize::MAX` bytes.
    CapacityOverflow,
    /// The global allocator could not satisfy the request.
    AllocFailed {
        /// The layout that was requested.
        layout: Layout,
    },
    /// A checked access was made past the end of the array.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the array at the time of the access.
        len: usize,
    },
}

impl Error {
    /// Diverges the way the standard collections do for an allocation error:
    /// overflow panics, allocator failure goes through
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error).
    #[cold]
    pub(crate) fn handle(self) -> ! {
        match self {
            Self::CapacityOverflow => panic!("capacity overflow"),
            Self::AllocFailed { layout } => std::alloc::handle_alloc_error(layout),
            Self::OutOfRange { .. } => {
                unreachable!("out of range errors are returned to the caller")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed { layout } => {
                write!(
                    f,
                    "memory allocation of {} bytes (align {}) failed",
                    layout.size(),
                    layout.align()
                )
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}
