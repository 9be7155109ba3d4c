//! Token catalog for a JavaScript scanner and parser front end.
//!
//! This crate is the shared vocabulary between a scanner, a parser, and an
//! interpreter that reuses part of the code space as opcodes:
//! - [`TokenCode`] and its constants, densely packed in `ERROR..=LAST_TOKEN`
//! - Range markers for bytecode and assignment-operator codes
//! - Canonical names ([`type_to_name`]) and keyword spellings ([`keyword_to_name`])
//! - Mode-bound rendering for diagnostics ([`TokenCatalog`])
//!
//! It does not tokenize source text.
//!
//! # Design Philosophy
//!
//! - **Static tables**: all lookups are `const` data, safe to share across threads
//! - **Structural gaps**: a code without a name is an empty table slot,
//!   reported as [`UnknownToken`]
//! - **No globals**: the naming mode is bound into a [`TokenCatalog`] value

/// Compile-time assertion that a type has a specific size.
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod catalog;
mod code;
mod comment;
mod error;
pub mod keyword;
mod name;

pub use catalog::{NamingMode, TokenCatalog};
pub use code::TokenCode;
pub use comment::CommentKind;
pub use error::UnknownToken;
pub use keyword::keyword_to_name;
pub use name::type_to_name;

/// Check if a raw integer is a recognized token code.
///
/// This is a range check over `ERROR..=LAST_TOKEN`. The code space is dense,
/// so range membership is equivalent to being assigned a symbolic constant.
#[inline]
pub const fn is_valid_token(code: i32) -> bool {
    TokenCode::from_raw(code).is_valid()
}

// Codes are carried in every token and tree node; keep them word-sized.
static_assert_size!(TokenCode, 4);
static_assert_size!(NamingMode, 1);
static_assert_size!(TokenCatalog, 1);
static_assert_size!(CommentKind, 1);
