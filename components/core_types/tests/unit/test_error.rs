//! Unit tests for ErrorIdentity

use core_types::{ErrorIdentity, ObjectHandle};

#[cfg(test)]
mod error_identity_tests {
    use super::*;

    #[test]
    fn test_identity_absent_fields_use_defaults() {
        let identity = ErrorIdentity::new(None, None);
        assert_eq!(identity.name, "Error");
        assert_eq!(identity.message, "");
        assert_eq!(identity.header(), "Error");
    }

    #[test]
    fn test_identity_message_only_default_name() {
        let identity = ErrorIdentity::new(None, Some("oops".to_string()));
        assert_eq!(identity.header(), "Error: oops");
    }

    #[test]
    fn test_identity_empty_name_with_message() {
        let identity = ErrorIdentity::new(Some(String::new()), Some("oops".to_string()));
        assert_eq!(identity.header(), "oops");
    }

    #[test]
    fn test_identity_name_with_empty_message() {
        let identity = ErrorIdentity::new(Some("SyntaxError".to_string()), Some(String::new()));
        assert_eq!(identity.header(), "SyntaxError");
    }

    #[test]
    fn test_identity_both_empty() {
        let identity = ErrorIdentity::new(Some(String::new()), Some(String::new()));
        assert_eq!(identity.header(), "");
    }

    #[test]
    fn test_identity_with_handle() {
        let identity = ErrorIdentity::default().with_handle(ObjectHandle::new(3));
        assert_eq!(identity.handle, Some(ObjectHandle::new(3)));
    }

    #[test]
    fn test_identity_deserialize() {
        let identity: ErrorIdentity =
            serde_json::from_str(r#"{"name":"TypeError","message":"boom"}"#).unwrap();
        assert_eq!(identity.header(), "TypeError: boom");
        assert!(identity.handle.is_none());
    }

    #[test]
    fn test_identity_clone() {
        let identity1 = ErrorIdentity::new(Some("URIError".to_string()), Some("URI malformed".to_string()));
        let identity2 = identity1.clone();
        assert_eq!(identity1, identity2);
    }
}
