use super::*;

#[test]
fn stable_codes() {
    assert_eq!(CommentKind::Line.code(), 0);
    assert_eq!(CommentKind::BlockComment.code(), 1);
    assert_eq!(CommentKind::JsDoc.code(), 2);
    assert_eq!(CommentKind::Html.code(), 3);
}

#[test]
fn from_code() {
    for kind in [
        CommentKind::Line,
        CommentKind::BlockComment,
        CommentKind::JsDoc,
        CommentKind::Html,
    ] {
        assert_eq!(CommentKind::from_code(kind.code()), Some(kind));
    }
    assert_eq!(CommentKind::from_code(4), None);
    assert_eq!(CommentKind::from_code(u8::MAX), None);
}

#[test]
fn only_jsdoc_is_doc() {
    assert!(CommentKind::JsDoc.is_doc());
    assert!(!CommentKind::Line.is_doc());
    assert!(!CommentKind::BlockComment.is_doc());
    assert!(!CommentKind::Html.is_doc());
}
