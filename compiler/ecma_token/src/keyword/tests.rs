use super::*;
use pretty_assertions::assert_eq;

// === Code to spelling ===

#[test]
fn statement_keywords() {
    assert_eq!(keyword_to_name(TokenCode::IF), Some("if"));
    assert_eq!(keyword_to_name(TokenCode::ELSE), Some("else"));
    assert_eq!(keyword_to_name(TokenCode::WHILE), Some("while"));
    assert_eq!(keyword_to_name(TokenCode::DO), Some("do"));
    assert_eq!(keyword_to_name(TokenCode::FOR), Some("for"));
    assert_eq!(keyword_to_name(TokenCode::SWITCH), Some("switch"));
    assert_eq!(keyword_to_name(TokenCode::CASE), Some("case"));
    assert_eq!(keyword_to_name(TokenCode::DEFAULT), Some("default"));
    assert_eq!(keyword_to_name(TokenCode::BREAK), Some("break"));
    assert_eq!(keyword_to_name(TokenCode::CONTINUE), Some("continue"));
    assert_eq!(keyword_to_name(TokenCode::RETURN), Some("return"));
    assert_eq!(keyword_to_name(TokenCode::WITH), Some("with"));
}

#[test]
fn exception_keywords() {
    assert_eq!(keyword_to_name(TokenCode::TRY), Some("try"));
    assert_eq!(keyword_to_name(TokenCode::CATCH), Some("catch"));
    assert_eq!(keyword_to_name(TokenCode::FINALLY), Some("finally"));
    assert_eq!(keyword_to_name(TokenCode::THROW), Some("throw"));
}

#[test]
fn declaration_keywords() {
    assert_eq!(keyword_to_name(TokenCode::VAR), Some("var"));
    assert_eq!(keyword_to_name(TokenCode::LET), Some("let"));
    assert_eq!(keyword_to_name(TokenCode::CONST), Some("const"));
    assert_eq!(keyword_to_name(TokenCode::FUNCTION), Some("function"));
    assert_eq!(keyword_to_name(TokenCode::YIELD), Some("yield"));
    assert_eq!(keyword_to_name(TokenCode::DEBUGGER), Some("debugger"));
}

#[test]
fn operator_keywords() {
    assert_eq!(keyword_to_name(TokenCode::DELPROP), Some("delete"));
    assert_eq!(keyword_to_name(TokenCode::TYPEOF), Some("typeof"));
    assert_eq!(keyword_to_name(TokenCode::VOID), Some("void"));
    assert_eq!(keyword_to_name(TokenCode::NEW), Some("new"));
    assert_eq!(keyword_to_name(TokenCode::IN), Some("in"));
    assert_eq!(keyword_to_name(TokenCode::INSTANCEOF), Some("instanceof"));
}

#[test]
fn literal_keywords() {
    assert_eq!(keyword_to_name(TokenCode::NULL), Some("null"));
    assert_eq!(keyword_to_name(TokenCode::THIS), Some("this"));
    assert_eq!(keyword_to_name(TokenCode::TRUE), Some("true"));
    assert_eq!(keyword_to_name(TokenCode::FALSE), Some("false"));
}

#[test]
fn non_keywords_have_no_spelling() {
    assert_eq!(keyword_to_name(TokenCode::ADD), None);
    assert_eq!(keyword_to_name(TokenCode::SEMI), None);
    assert_eq!(keyword_to_name(TokenCode::NAME), None);
    assert_eq!(keyword_to_name(TokenCode::BLOCK), None);
    assert_eq!(keyword_to_name(TokenCode::EXPORT), None);
    assert_eq!(keyword_to_name(TokenCode::IMPORT), None);
    assert_eq!(keyword_to_name(TokenCode::RESERVED), None);
    assert_eq!(keyword_to_name(TokenCode::GET), None);
    assert_eq!(keyword_to_name(TokenCode::LAST_TOKEN), None);
    assert_eq!(keyword_to_name(TokenCode::from_raw(9999)), None);
}

#[test]
fn keyword_count() {
    let count = TokenCode::all()
        .filter(|&c| keyword_to_name(c).is_some())
        .count();
    assert_eq!(count, 32);
}

#[test]
fn assignment_operators_are_never_keywords() {
    for code in TokenCode::all().filter(|c| c.is_assign()) {
        assert_eq!(keyword_to_name(code), None, "{code:?}");
    }
}

// === Spelling to code ===

#[test]
fn every_spelling_resolves_back() {
    for code in TokenCode::all() {
        if let Some(spelling) = keyword_to_name(code) {
            assert_eq!(lookup(spelling), Some(code), "{spelling}");
        }
    }
}

#[test]
fn module_keywords() {
    assert_eq!(lookup("export"), Some(TokenCode::EXPORT));
    assert_eq!(lookup("import"), Some(TokenCode::IMPORT));
}

#[test]
fn future_reserved_words() {
    for word in [
        "abstract",
        "boolean",
        "byte",
        "char",
        "class",
        "double",
        "enum",
        "extends",
        "final",
        "float",
        "goto",
        "implements",
        "int",
        "interface",
        "long",
        "native",
        "package",
        "private",
        "protected",
        "public",
        "short",
        "static",
        "super",
        "synchronized",
        "throws",
        "transient",
        "volatile",
    ] {
        assert_eq!(lookup(word), Some(TokenCode::RESERVED), "{word}");
    }
}

#[test]
fn identifiers_are_not_keywords() {
    assert_eq!(lookup("foo"), None);
    assert_eq!(lookup("get"), None);
    assert_eq!(lookup("set"), None);
    assert_eq!(lookup("undefined"), None);
    assert_eq!(lookup("iff"), None);
    assert_eq!(lookup("whiles"), None);
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(lookup("If"), None);
    assert_eq!(lookup("WHILE"), None);
    assert_eq!(lookup("Class"), None);
}

#[test]
fn length_guard() {
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("i"), None);
    assert_eq!(lookup("synchronizedx"), None);
    assert_eq!(lookup("_if"), None);
    assert_eq!(lookup("$this"), None);
}
