#![cfg(feature = "dbx_files")]

use dropbox_sdk_transport::common::PathRoot;
use dropbox_sdk_transport::files::PaperContentError;

const ALL_VARIANTS: [PaperContentError; 5] = [
    PaperContentError::InsufficientPermissions,
    PaperContentError::ContentMalformed,
    PaperContentError::DocLengthExceeded,
    PaperContentError::ImageSizeExceeded,
    PaperContentError::Other,
];

#[test]
fn test_void_variant_shape() {
    let value = serde_json::to_value(PaperContentError::DocLengthExceeded).unwrap();
    assert_eq!(serde_json::json!({".tag": "doc_length_exceeded"}), value);

    let x = serde_json::from_value::<PaperContentError>(value).unwrap();
    assert!(x.is_doc_length_exceeded());
    assert_eq!("doc_length_exceeded", x.tag_name());
}

#[test]
fn test_roundtrip_every_variant() {
    for variant in ALL_VARIANTS {
        let s = serde_json::to_string(&variant).unwrap();
        assert_eq!(format!(r#"{{".tag":"{}"}}"#, variant.tag_name()), s);
        let roundtrip = serde_json::from_str::<PaperContentError>(&s).unwrap();
        assert_eq!(variant, roundtrip);
    }
}

#[test]
fn test_exactly_one_predicate() {
    for variant in ALL_VARIANTS {
        let predicates = [
            variant.is_insufficient_permissions(),
            variant.is_content_malformed(),
            variant.is_doc_length_exceeded(),
            variant.is_image_size_exceeded(),
            variant.is_other(),
        ];
        assert_eq!(1, predicates.iter().filter(|&&p| p).count(), "{variant:?}");
    }
}

#[test]
fn test_value_semantics() {
    let a = PaperContentError::Other;
    let b = PaperContentError::from_tag("other");
    assert_eq!(a, b);
    let c = a;
    assert_eq!(a, c);
    assert_ne!(PaperContentError::ContentMalformed, PaperContentError::ImageSizeExceeded);
}

#[test]
fn test_display() {
    assert_eq!("Your account does not have permissions to edit Paper docs.",
        PaperContentError::InsufficientPermissions.to_string());
    assert_eq!("Other", PaperContentError::Other.to_string());
}

#[test]
fn test_path_root_shapes() {
    assert_eq!(
        serde_json::json!({".tag": "home"}),
        serde_json::to_value(PathRoot::Home).unwrap());
    assert_eq!(
        serde_json::json!({".tag": "root", "root": "123"}),
        serde_json::to_value(PathRoot::Root("123".to_owned())).unwrap());
    assert_eq!(
        serde_json::json!({".tag": "namespace_id", "namespace_id": "456"}),
        serde_json::to_value(PathRoot::NamespaceId("456".to_owned())).unwrap());

    // Other can't be sent to the server.
    assert!(serde_json::to_value(PathRoot::Other).is_err());
}

#[test]
fn test_path_root_roundtrip() {
    for value in [
        PathRoot::Home,
        PathRoot::Root("123".to_owned()),
        PathRoot::NamespaceId("456".to_owned()),
    ] {
        let s = serde_json::to_string(&value).unwrap();
        let roundtrip = serde_json::from_str::<PathRoot>(&s).unwrap();
        assert_eq!(value, roundtrip);
        assert_eq!(value.tag_name(), serde_json::from_str::<serde_json::Value>(&s).unwrap()[".tag"]);
    }
}
