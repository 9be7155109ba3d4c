//! Mode-bound token naming for diagnostics and tree dumps.

use std::borrow::Cow;

use crate::{name, TokenCode, UnknownToken};

/// How [`TokenCatalog::name`] renders a token code.
///
/// Chosen once at startup by whoever owns the front end and never changed
/// afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NamingMode {
    /// Decimal code, e.g. `"21"`. Skips name lookup entirely.
    #[default]
    Compact,
    /// Canonical name, e.g. `"ADD"`.
    Verbose,
}

impl NamingMode {
    /// Derive the mode from the front end's debug dump switches.
    ///
    /// Names are only worth resolving when a parse tree or interpreter code
    /// dump will be printed.
    #[inline]
    pub const fn from_flags(print_trees: bool, print_icode: bool) -> Self {
        if print_trees || print_icode {
            NamingMode::Verbose
        } else {
            NamingMode::Compact
        }
    }

    /// Check if this mode resolves canonical names.
    #[inline]
    pub const fn is_verbose(self) -> bool {
        matches!(self, NamingMode::Verbose)
    }
}

/// Read-only view of the token catalog with a fixed [`NamingMode`].
///
/// The underlying tables are static, so a `TokenCatalog` is a single byte
/// that can be copied into every scanner and parser instance and shared
/// across threads freely.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenCatalog {
    mode: NamingMode,
}

impl TokenCatalog {
    /// Bind the catalog to a naming mode.
    pub fn new(mode: NamingMode) -> Self {
        tracing::debug!(?mode, "token catalog bound");
        TokenCatalog { mode }
    }

    /// The mode this catalog was bound with.
    #[inline]
    pub const fn mode(self) -> NamingMode {
        self.mode
    }

    /// Render a token code for diagnostics.
    ///
    /// In [`NamingMode::Compact`] this is the decimal code and never fails.
    /// In [`NamingMode::Verbose`] this is [`type_to_name`](crate::type_to_name).
    ///
    /// # Errors
    ///
    /// In verbose mode, returns [`UnknownToken`] for a code with no name.
    pub fn name(self, code: TokenCode) -> Result<Cow<'static, str>, UnknownToken> {
        match self.mode {
            NamingMode::Compact => Ok(Cow::Owned(code.raw().to_string())),
            NamingMode::Verbose => match name::type_to_name(code) {
                Ok(canonical) => Ok(Cow::Borrowed(canonical)),
                Err(err) => {
                    tracing::trace!(code = err.code(), "no canonical name for token code");
                    Err(err)
                }
            },
        }
    }
}
