//! Query errors
//!
//! Construction never fails. Only the query boundary validates its input,
//! and it reports failures instead of returning a sentinel: `0` is a real
//! LCP length and must stay distinguishable from "invalid query".

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcpError {
    /// A suffix position is not inside the indexed string.
    OutOfRange { index: usize, len: usize },
    /// A range-minimum interval is empty or runs past the end.
    InvalidRange { lo: usize, hi: usize, len: usize },
}

impl fmt::Display for LcpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LcpError::OutOfRange { index, len } => {
                write!(f, "suffix index {} out of range for length {}", index, len)
            }
            LcpError::InvalidRange { lo, hi, len } => {
                write!(f, "invalid range [{}, {}] for length {}", lo, hi, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LcpError {}

/// Reject the first of `i`, `j` that is not a valid position in `0..len`.
#[inline(always)]
pub(crate) fn check_pair(i: usize, j: usize, len: usize) -> Result<(), LcpError> {
    if i >= len {
        return Err(LcpError::OutOfRange { index: i, len });
    }
    if j >= len {
        return Err(LcpError::OutOfRange { index: j, len });
    }
    Ok(())
}
