//! Canonical debug names for token codes.
//!
//! Names are stored in a dense table indexed by [`TokenCode`] position, so a
//! lookup is a bounds check plus one load. A code without an entry is a `None`
//! slot rather than a fallthrough default.

use crate::{TokenCode, UnknownToken};

/// Canonical name for every nameable code, in code order.
///
/// `LAST_TOKEN` is deliberately absent: it bounds the code space and never
/// appears in a token stream or tree.
const NAMED: [(TokenCode, &str); TokenCode::COUNT - 1] = [
    (TokenCode::ERROR, "ERROR"),
    (TokenCode::EOF, "EOF"),
    (TokenCode::EOL, "EOL"),
    (TokenCode::ENTERWITH, "ENTERWITH"),
    (TokenCode::LEAVEWITH, "LEAVEWITH"),
    (TokenCode::RETURN, "RETURN"),
    (TokenCode::GOTO, "GOTO"),
    (TokenCode::IFEQ, "IFEQ"),
    (TokenCode::IFNE, "IFNE"),
    (TokenCode::SETNAME, "SETNAME"),
    (TokenCode::BITOR, "BITOR"),
    (TokenCode::BITXOR, "BITXOR"),
    (TokenCode::BITAND, "BITAND"),
    (TokenCode::EQ, "EQ"),
    (TokenCode::NE, "NE"),
    (TokenCode::LT, "LT"),
    (TokenCode::LE, "LE"),
    (TokenCode::GT, "GT"),
    (TokenCode::GE, "GE"),
    (TokenCode::LSH, "LSH"),
    (TokenCode::RSH, "RSH"),
    (TokenCode::URSH, "URSH"),
    (TokenCode::ADD, "ADD"),
    (TokenCode::SUB, "SUB"),
    (TokenCode::MUL, "MUL"),
    (TokenCode::DIV, "DIV"),
    (TokenCode::MOD, "MOD"),
    (TokenCode::NOT, "NOT"),
    (TokenCode::BITNOT, "BITNOT"),
    (TokenCode::POS, "POS"),
    (TokenCode::NEG, "NEG"),
    (TokenCode::NEW, "NEW"),
    (TokenCode::DELPROP, "DELPROP"),
    (TokenCode::TYPEOF, "TYPEOF"),
    (TokenCode::GETPROP, "GETPROP"),
    (TokenCode::GETPROPNOWARN, "GETPROPNOWARN"),
    (TokenCode::SETPROP, "SETPROP"),
    (TokenCode::GETELEM, "GETELEM"),
    (TokenCode::SETELEM, "SETELEM"),
    (TokenCode::CALL, "CALL"),
    (TokenCode::NAME, "NAME"),
    (TokenCode::NUMBER, "NUMBER"),
    (TokenCode::STRING, "STRING"),
    (TokenCode::NULL, "NULL"),
    (TokenCode::THIS, "THIS"),
    (TokenCode::FALSE, "FALSE"),
    (TokenCode::TRUE, "TRUE"),
    (TokenCode::SHEQ, "SHEQ"),
    (TokenCode::SHNE, "SHNE"),
    (TokenCode::REGEXP, "REGEXP"),
    (TokenCode::BINDNAME, "BINDNAME"),
    (TokenCode::THROW, "THROW"),
    (TokenCode::RETHROW, "RETHROW"),
    (TokenCode::IN, "IN"),
    (TokenCode::INSTANCEOF, "INSTANCEOF"),
    (TokenCode::LOCAL_LOAD, "LOCAL_LOAD"),
    (TokenCode::GETVAR, "GETVAR"),
    (TokenCode::SETVAR, "SETVAR"),
    (TokenCode::CATCH_SCOPE, "CATCH_SCOPE"),
    (TokenCode::ENUM_INIT_KEYS, "ENUM_INIT_KEYS"),
    (TokenCode::ENUM_INIT_VALUES, "ENUM_INIT_VALUES"),
    (TokenCode::ENUM_INIT_ARRAY, "ENUM_INIT_ARRAY"),
    (TokenCode::ENUM_NEXT, "ENUM_NEXT"),
    (TokenCode::ENUM_ID, "ENUM_ID"),
    (TokenCode::THISFN, "THISFN"),
    (TokenCode::RETURN_RESULT, "RETURN_RESULT"),
    (TokenCode::ARRAYLIT, "ARRAYLIT"),
    (TokenCode::OBJECTLIT, "OBJECTLIT"),
    (TokenCode::GET_REF, "GET_REF"),
    (TokenCode::SET_REF, "SET_REF"),
    (TokenCode::DEL_REF, "DEL_REF"),
    (TokenCode::REF_CALL, "REF_CALL"),
    (TokenCode::REF_SPECIAL, "REF_SPECIAL"),
    (TokenCode::YIELD, "YIELD"),
    (TokenCode::STRICT_SETNAME, "STRICT_SETNAME"),
    (TokenCode::DEFAULTNAMESPACE, "DEFAULTNAMESPACE"),
    (TokenCode::ESCXMLATTR, "ESCXMLATTR"),
    (TokenCode::ESCXMLTEXT, "ESCXMLTEXT"),
    (TokenCode::REF_MEMBER, "REF_MEMBER"),
    (TokenCode::REF_NS_MEMBER, "REF_NS_MEMBER"),
    (TokenCode::REF_NAME, "REF_NAME"),
    (TokenCode::REF_NS_NAME, "REF_NS_NAME"),
    (TokenCode::TRY, "TRY"),
    (TokenCode::SEMI, "SEMI"),
    (TokenCode::LB, "LB"),
    (TokenCode::RB, "RB"),
    (TokenCode::LC, "LC"),
    (TokenCode::RC, "RC"),
    (TokenCode::LP, "LP"),
    (TokenCode::RP, "RP"),
    (TokenCode::COMMA, "COMMA"),
    (TokenCode::ASSIGN, "ASSIGN"),
    (TokenCode::ASSIGN_BITOR, "ASSIGN_BITOR"),
    (TokenCode::ASSIGN_BITXOR, "ASSIGN_BITXOR"),
    (TokenCode::ASSIGN_BITAND, "ASSIGN_BITAND"),
    (TokenCode::ASSIGN_LSH, "ASSIGN_LSH"),
    (TokenCode::ASSIGN_RSH, "ASSIGN_RSH"),
    (TokenCode::ASSIGN_URSH, "ASSIGN_URSH"),
    (TokenCode::ASSIGN_ADD, "ASSIGN_ADD"),
    (TokenCode::ASSIGN_SUB, "ASSIGN_SUB"),
    (TokenCode::ASSIGN_MUL, "ASSIGN_MUL"),
    (TokenCode::ASSIGN_DIV, "ASSIGN_DIV"),
    (TokenCode::ASSIGN_MOD, "ASSIGN_MOD"),
    (TokenCode::HOOK, "HOOK"),
    (TokenCode::COLON, "COLON"),
    (TokenCode::OR, "OR"),
    (TokenCode::AND, "AND"),
    (TokenCode::INC, "INC"),
    (TokenCode::DEC, "DEC"),
    (TokenCode::DOT, "DOT"),
    (TokenCode::FUNCTION, "FUNCTION"),
    (TokenCode::EXPORT, "EXPORT"),
    (TokenCode::IMPORT, "IMPORT"),
    (TokenCode::IF, "IF"),
    (TokenCode::ELSE, "ELSE"),
    (TokenCode::SWITCH, "SWITCH"),
    (TokenCode::CASE, "CASE"),
    (TokenCode::DEFAULT, "DEFAULT"),
    (TokenCode::WHILE, "WHILE"),
    (TokenCode::DO, "DO"),
    (TokenCode::FOR, "FOR"),
    (TokenCode::BREAK, "BREAK"),
    (TokenCode::CONTINUE, "CONTINUE"),
    (TokenCode::VAR, "VAR"),
    (TokenCode::WITH, "WITH"),
    (TokenCode::CATCH, "CATCH"),
    (TokenCode::FINALLY, "FINALLY"),
    (TokenCode::VOID, "VOID"),
    (TokenCode::RESERVED, "RESERVED"),
    (TokenCode::EMPTY, "EMPTY"),
    (TokenCode::BLOCK, "BLOCK"),
    (TokenCode::LABEL, "LABEL"),
    (TokenCode::TARGET, "TARGET"),
    (TokenCode::LOOP, "LOOP"),
    (TokenCode::EXPR_VOID, "EXPR_VOID"),
    (TokenCode::EXPR_RESULT, "EXPR_RESULT"),
    (TokenCode::JSR, "JSR"),
    (TokenCode::SCRIPT, "SCRIPT"),
    (TokenCode::TYPEOFNAME, "TYPEOFNAME"),
    (TokenCode::USE_STACK, "USE_STACK"),
    (TokenCode::SETPROP_OP, "SETPROP_OP"),
    (TokenCode::SETELEM_OP, "SETELEM_OP"),
    (TokenCode::LOCAL_BLOCK, "LOCAL_BLOCK"),
    (TokenCode::SET_REF_OP, "SET_REF_OP"),
    (TokenCode::DOTDOT, "DOTDOT"),
    (TokenCode::COLONCOLON, "COLONCOLON"),
    (TokenCode::XML, "XML"),
    (TokenCode::DOTQUERY, "DOTQUERY"),
    (TokenCode::XMLATTR, "XMLATTR"),
    (TokenCode::XMLEND, "XMLEND"),
    (TokenCode::TO_OBJECT, "TO_OBJECT"),
    (TokenCode::TO_DOUBLE, "TO_DOUBLE"),
    (TokenCode::GET, "GET"),
    (TokenCode::SET, "SET"),
    (TokenCode::LET, "LET"),
    (TokenCode::CONST, "CONST"),
    (TokenCode::SETCONST, "SETCONST"),
    (TokenCode::SETCONSTVAR, "SETCONSTVAR"),
    (TokenCode::ARRAYCOMP, "ARRAYCOMP"),
    (TokenCode::LETEXPR, "LETEXPR"),
    (TokenCode::WITHEXPR, "WITHEXPR"),
    (TokenCode::DEBUGGER, "DEBUGGER"),
    (TokenCode::COMMENT, "COMMENT"),
    (TokenCode::GENEXPR, "GENEXPR"),
];

/// `NAMED` scattered into a table indexed by code position.
static NAME_TABLE: [Option<&str>; TokenCode::COUNT] = build_name_table();

const fn build_name_table() -> [Option<&'static str>; TokenCode::COUNT] {
    let mut table: [Option<&'static str>; TokenCode::COUNT] = [None; TokenCode::COUNT];
    let mut i = 0;
    while i < NAMED.len() {
        let (code, name) = NAMED[i];
        let Some(slot) = code.index() else {
            panic!("named token code out of range");
        };
        assert!(table[slot].is_none(), "token code named twice");
        table[slot] = Some(name);
        i += 1;
    }

    // Every slot except the sentinel must be filled.
    let mut slot = 0;
    while slot < TokenCode::COUNT - 1 {
        assert!(table[slot].is_some(), "token code without a name");
        slot += 1;
    }
    table
}

/// Look up the canonical name, if the code has one.
#[inline]
pub(crate) fn lookup(code: TokenCode) -> Option<&'static str> {
    NAME_TABLE[code.index()?]
}

/// Get the canonical uppercase name for a token code.
///
/// For instance, [`TokenCode::FINALLY`] is named `"FINALLY"`.
///
/// # Errors
///
/// Returns [`UnknownToken`] for a code outside `ERROR..=LAST_TOKEN`, and for
/// the `LAST_TOKEN` sentinel, which is in range but has no name.
pub fn type_to_name(code: TokenCode) -> Result<&'static str, UnknownToken> {
    lookup(code).ok_or(UnknownToken::new(code.raw()))
}
