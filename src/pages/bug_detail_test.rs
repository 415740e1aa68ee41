use super::*;

#[test]
fn parses_positive_ids() {
    assert_eq!(parse_bug_id(Some("42")), Some(42));
    assert_eq!(parse_bug_id(Some(" 7 ")), Some(7));
}

#[test]
fn rejects_missing_or_malformed_ids() {
    assert_eq!(parse_bug_id(None), None);
    assert_eq!(parse_bug_id(Some("abc")), None);
    assert_eq!(parse_bug_id(Some("0")), None);
    assert_eq!(parse_bug_id(Some("-3")), None);
}

#[test]
fn attachment_prompt_names_the_kind() {
    assert_eq!(attachment_prompt(AttachmentKind::Image), "Are you sure you want to delete this image?");
    assert_eq!(attachment_prompt(AttachmentKind::Document), "Are you sure you want to delete this document?");
}

#[test]
fn attachment_deleted_messages() {
    assert_eq!(attachment_deleted(AttachmentKind::Image), "Image deleted.");
    assert_eq!(attachment_deleted(AttachmentKind::Document), "Document deleted.");
}
