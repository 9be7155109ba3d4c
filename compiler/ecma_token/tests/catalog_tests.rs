//! Integration tests for sharing a bound catalog across a front end.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Once;
use std::thread;

use ecma_token::{type_to_name, NamingMode, TokenCatalog, TokenCode, UnknownToken};
use pretty_assertions::assert_eq;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Enable with `RUST_LOG=ecma_token=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer())
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Render a parse-tree-like sequence of codes the way a tree printer would.
fn dump(catalog: TokenCatalog, codes: &[TokenCode]) -> Result<String, UnknownToken> {
    let mut out = Vec::with_capacity(codes.len());
    for &code in codes {
        out.push(catalog.name(code)?.into_owned());
    }
    Ok(out.join(" "))
}

const TREE: [TokenCode; 6] = [
    TokenCode::SCRIPT,
    TokenCode::EXPR_RESULT,
    TokenCode::ASSIGN,
    TokenCode::NAME,
    TokenCode::ADD,
    TokenCode::NUMBER,
];

#[test]
fn tree_dump_in_both_modes() {
    init_tracing();

    let verbose = TokenCatalog::new(NamingMode::from_flags(true, false));
    assert_eq!(
        dump(verbose, &TREE).unwrap(),
        "SCRIPT EXPR_RESULT ASSIGN NAME ADD NUMBER"
    );

    let compact = TokenCatalog::new(NamingMode::from_flags(false, false));
    assert_eq!(dump(compact, &TREE).unwrap(), "136 134 90 39 21 40");
}

#[test]
fn tree_dump_propagates_unknown_token() {
    init_tracing();

    let verbose = TokenCatalog::new(NamingMode::Verbose);
    let codes = [TokenCode::SCRIPT, TokenCode::LAST_TOKEN];
    let err = dump(verbose, &codes).unwrap_err();
    assert_eq!(err.code(), TokenCode::LAST_TOKEN.raw());
}

#[test]
fn concurrent_lookups_agree() {
    init_tracing();

    let catalog = TokenCatalog::new(NamingMode::Verbose);
    let expected: Vec<_> = TokenCode::all().map(|c| catalog.name(c).ok()).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move || {
                    TokenCode::all()
                        .map(|c| catalog.name(c).ok())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn every_constant_has_its_own_name() {
    let cases = [
        (TokenCode::ERROR, "ERROR"),
        (TokenCode::EOL, "EOL"),
        (TokenCode::GETPROPNOWARN, "GETPROPNOWARN"),
        (TokenCode::ENUM_INIT_VALUES, "ENUM_INIT_VALUES"),
        (TokenCode::RETURN_RESULT, "RETURN_RESULT"),
        (TokenCode::DEFAULTNAMESPACE, "DEFAULTNAMESPACE"),
        (TokenCode::REF_NS_NAME, "REF_NS_NAME"),
        (TokenCode::ASSIGN_URSH, "ASSIGN_URSH"),
        (TokenCode::HOOK, "HOOK"),
        (TokenCode::RESERVED, "RESERVED"),
        (TokenCode::TYPEOFNAME, "TYPEOFNAME"),
        (TokenCode::DOTQUERY, "DOTQUERY"),
        (TokenCode::TO_DOUBLE, "TO_DOUBLE"),
        (TokenCode::ARRAYCOMP, "ARRAYCOMP"),
        (TokenCode::COMMENT, "COMMENT"),
    ];
    for (code, name) in cases {
        assert_eq!(type_to_name(code), Ok(name));
    }
}

#[cfg(feature = "serde")]
mod serde_codes {
    use ecma_token::{CommentKind, NamingMode, TokenCode};
    use pretty_assertions::assert_eq;

    #[test]
    fn token_code_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&TokenCode::ADD).unwrap(), "21");
        let code: TokenCode = serde_json::from_str("117").unwrap();
        assert_eq!(code, TokenCode::WHILE);
    }

    #[test]
    fn out_of_range_code_is_rejected() {
        let err = serde_json::from_str::<TokenCode>("164").unwrap_err();
        assert!(err.to_string().contains("unknown token code 164"));
    }

    #[test]
    fn naming_mode_and_comment_kind() {
        assert_eq!(
            serde_json::to_string(&NamingMode::Verbose).unwrap(),
            "\"verbose\""
        );
        let kind: CommentKind = serde_json::from_str("\"JsDoc\"").unwrap();
        assert_eq!(kind, CommentKind::JsDoc);
    }
}
