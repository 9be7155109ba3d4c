//! Errors raised by the token catalog.

use thiserror::Error;

/// A token code with no catalog entry.
///
/// Signals that the catalog and its consumer disagree about the code space.
/// This is a programming defect, not a recoverable input error, so callers
/// propagate it rather than retry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("unknown token code {code}")]
pub struct UnknownToken {
    code: i32,
}

impl UnknownToken {
    #[inline]
    pub(crate) const fn new(code: i32) -> Self {
        UnknownToken { code }
    }

    /// The offending raw code.
    #[inline]
    pub const fn code(self) -> i32 {
        self.code
    }
}
