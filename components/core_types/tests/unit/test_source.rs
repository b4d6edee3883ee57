//! Unit tests for Position and ObjectHandle

use core_types::{ObjectHandle, Position};

#[cfg(test)]
mod position_tests {
    use super::*;

    #[test]
    fn test_position_zero_values() {
        let pos = Position::new(0, 0);
        assert_eq!(pos.line, 0);
        assert_eq!(pos.column, 0);
    }

    #[test]
    fn test_position_large_values() {
        let pos = Position::new(u32::MAX, u32::MAX);
        assert_eq!(pos.line, u32::MAX);
        assert_eq!(pos.column, u32::MAX);
    }

    #[test]
    fn test_position_copy() {
        let pos1 = Position::new(1, 2);
        let pos2 = pos1;
        assert_eq!(pos1, pos2);
    }

    #[test]
    fn test_position_serializes_as_object() {
        let json = serde_json::to_string(&Position::new(5, 6)).unwrap();
        assert_eq!(json, r#"{"line":5,"column":6}"#);
    }
}

#[cfg(test)]
mod handle_tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_handle_roundtrips_id() {
        assert_eq!(ObjectHandle::new(99).id(), 99);
    }

    #[test]
    fn test_handle_hashable() {
        let mut set = HashSet::new();
        set.insert(ObjectHandle::new(1));
        set.insert(ObjectHandle::new(1));
        set.insert(ObjectHandle::new(2));
        assert_eq!(set.len(), 2);
    }
}
