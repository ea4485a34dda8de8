/// Record identifiers are opaque strings (UUID v4 when generated here).
///
/// Kept as a plain string so records written by older tooling with
/// non-UUID ids still load and resolve.
pub type RecordId = String;

/// Generate a fresh record identifier.
pub fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct_uuids() {
        let a = new_record_id();
        let b = new_record_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }
}
