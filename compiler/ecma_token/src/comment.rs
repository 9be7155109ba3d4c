//! Comment kinds reported by a comment-capturing scanner.

/// The kind of a captured source comment.
///
/// Codes are stable so that comment kinds can travel alongside token codes in
/// a serialized token stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CommentKind {
    /// `// text`
    Line = 0,
    /// `/* text */`
    BlockComment = 1,
    /// `/** text */`
    JsDoc = 2,
    /// `<!-- text` or `--> text` at line start.
    Html = 3,
}

impl CommentKind {
    /// Get the stable numeric code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Convert a numeric code back to a kind.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CommentKind::Line),
            1 => Some(CommentKind::BlockComment),
            2 => Some(CommentKind::JsDoc),
            3 => Some(CommentKind::Html),
            _ => None,
        }
    }

    /// Check if this is a documentation comment.
    #[inline]
    pub const fn is_doc(self) -> bool {
        matches!(self, CommentKind::JsDoc)
    }
}

#[cfg(test)]
mod tests;
