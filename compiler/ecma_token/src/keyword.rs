//! Reserved-word spellings.
//!
//! Two directions over the same vocabulary:
//! 1. [`keyword_to_name`]: code to source spelling, used when a reserved word
//!    is accepted as an identifier (e.g. a property name after `.`)
//! 2. [`lookup`]: spelling to code, as a scanner resolves an identifier
//!
//! Every spelling produced by `keyword_to_name` resolves back to the same code
//! through `lookup`. The converse does not hold: `export`, `import`, and the
//! future-reserved words resolve to codes that have no single spelling.

use crate::TokenCode;

/// Convert a reserved-word code to its exact source spelling.
///
/// Returns `None` for operators, punctuation, literals-as-codes, parse-tree
/// tags, and any out-of-range code. `None` is the normal "not a keyword"
/// answer, not an error.
pub fn keyword_to_name(code: TokenCode) -> Option<&'static str> {
    let spelling = match code {
        TokenCode::BREAK => "break",
        TokenCode::CASE => "case",
        TokenCode::CONTINUE => "continue",
        TokenCode::DEFAULT => "default",
        TokenCode::DELPROP => "delete",
        TokenCode::DO => "do",
        TokenCode::ELSE => "else",
        TokenCode::FALSE => "false",
        TokenCode::FOR => "for",
        TokenCode::FUNCTION => "function",
        TokenCode::IF => "if",
        TokenCode::IN => "in",
        TokenCode::LET => "let",
        TokenCode::NEW => "new",
        TokenCode::NULL => "null",
        TokenCode::RETURN => "return",
        TokenCode::SWITCH => "switch",
        TokenCode::THIS => "this",
        TokenCode::TRUE => "true",
        TokenCode::TYPEOF => "typeof",
        TokenCode::VAR => "var",
        TokenCode::VOID => "void",
        TokenCode::WHILE => "while",
        TokenCode::WITH => "with",
        TokenCode::YIELD => "yield",
        TokenCode::CATCH => "catch",
        TokenCode::CONST => "const",
        TokenCode::DEBUGGER => "debugger",
        TokenCode::FINALLY => "finally",
        TokenCode::INSTANCEOF => "instanceof",
        TokenCode::THROW => "throw",
        TokenCode::TRY => "try",
        _ => return None,
    };
    Some(spelling)
}

/// Look up a reserved word by its spelling.
///
/// Returns the token code the scanner emits for `text`, or `None` if `text`
/// is an ordinary identifier. Matching is case-sensitive. Future-reserved
/// words (`class`, `enum`, `super`, ...) all resolve to
/// [`TokenCode::RESERVED`].
///
/// Uses length-bucketing for fast rejection: identifiers whose length falls
/// outside the 2-12 range are rejected without any comparison.
pub fn lookup(text: &str) -> Option<TokenCode> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all reserved words are 2-12 lowercase ASCII letters
    if !(2..=12).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "do" => Some(TokenCode::DO),
            "if" => Some(TokenCode::IF),
            "in" => Some(TokenCode::IN),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenCode::FOR),
            "let" => Some(TokenCode::LET),
            "new" => Some(TokenCode::NEW),
            "try" => Some(TokenCode::TRY),
            "var" => Some(TokenCode::VAR),
            "int" => Some(TokenCode::RESERVED),
            _ => None,
        },
        4 => match text {
            "case" => Some(TokenCode::CASE),
            "else" => Some(TokenCode::ELSE),
            "null" => Some(TokenCode::NULL),
            "this" => Some(TokenCode::THIS),
            "true" => Some(TokenCode::TRUE),
            "void" => Some(TokenCode::VOID),
            "with" => Some(TokenCode::WITH),
            "byte" | "char" | "enum" | "goto" | "long" => Some(TokenCode::RESERVED),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenCode::BREAK),
            "catch" => Some(TokenCode::CATCH),
            "const" => Some(TokenCode::CONST),
            "false" => Some(TokenCode::FALSE),
            "throw" => Some(TokenCode::THROW),
            "while" => Some(TokenCode::WHILE),
            "yield" => Some(TokenCode::YIELD),
            "class" | "final" | "float" | "short" | "super" => Some(TokenCode::RESERVED),
            _ => None,
        },
        6 => match text {
            "delete" => Some(TokenCode::DELPROP),
            "export" => Some(TokenCode::EXPORT),
            "import" => Some(TokenCode::IMPORT),
            "return" => Some(TokenCode::RETURN),
            "switch" => Some(TokenCode::SWITCH),
            "typeof" => Some(TokenCode::TYPEOF),
            "double" | "native" | "public" | "static" | "throws" => Some(TokenCode::RESERVED),
            _ => None,
        },
        7 => match text {
            "default" => Some(TokenCode::DEFAULT),
            "finally" => Some(TokenCode::FINALLY),
            "boolean" | "extends" | "package" | "private" => Some(TokenCode::RESERVED),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenCode::CONTINUE),
            "debugger" => Some(TokenCode::DEBUGGER),
            "function" => Some(TokenCode::FUNCTION),
            "abstract" | "volatile" => Some(TokenCode::RESERVED),
            _ => None,
        },
        9 => match text {
            "interface" | "protected" | "transient" => Some(TokenCode::RESERVED),
            _ => None,
        },
        10 => match text {
            "instanceof" => Some(TokenCode::INSTANCEOF),
            "implements" => Some(TokenCode::RESERVED),
            _ => None,
        },
        12 => match text {
            "synchronized" => Some(TokenCode::RESERVED),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
