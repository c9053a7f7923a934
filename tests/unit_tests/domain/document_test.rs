use lexiscan::domain::{ContentType, Document, DocumentId};

#[test]
fn given_known_mime_types_when_parsing_then_maps_to_content_type() {
    assert_eq!(
        ContentType::from_mime("application/pdf"),
        Some(ContentType::Pdf)
    );
    assert_eq!(ContentType::from_mime("text/plain"), Some(ContentType::Text));
}

#[test]
fn given_unknown_mime_type_when_parsing_then_returns_none() {
    assert_eq!(ContentType::from_mime("image/png"), None);
    assert_eq!(ContentType::from_mime("application/octet-stream"), None);
}

#[test]
fn mime_round_trips_through_content_type() {
    for ct in [ContentType::Pdf, ContentType::Text] {
        assert_eq!(ContentType::from_mime(ct.as_mime()), Some(ct));
    }
}

#[test]
fn given_two_documents_when_created_then_handles_differ() {
    let a = Document::new("a.pdf".to_string(), ContentType::Pdf, 1);
    let b = Document::new("a.pdf".to_string(), ContentType::Pdf, 1);

    assert_ne!(a.id, b.id);
}

#[test]
fn given_valid_uuid_string_when_parsing_handle_then_round_trips() {
    let id = DocumentId::new();
    let parsed = DocumentId::parse(&id.as_uuid().to_string()).unwrap();

    assert_eq!(parsed, id);
}

#[test]
fn given_garbage_when_parsing_handle_then_returns_none() {
    assert!(DocumentId::parse("not-a-handle").is_none());
    assert!(DocumentId::parse("").is_none());
}
