//! Book identifiers: random (version 4) UUIDs in canonical text form.

use uuid::{Uuid, Variant, Version};

const CANONICAL_LEN: usize = 36;

/// True iff `s` is an 8-4-4-4-12 hex UUID with version `4` and an RFC 4122
/// variant nibble (`8`, `9`, `a` or `b`). Case-insensitive.
///
/// The length check restricts parsing to the hyphenated form; braced, URN
/// and simple renderings are rejected.
pub fn is_valid_id(s: &str) -> bool {
    if s.len() != CANONICAL_LEN {
        return false;
    }
    match Uuid::try_parse(s) {
        Ok(uuid) => uuid.get_version() == Some(Version::Random) && uuid.get_variant() == Variant::RFC4122,
        Err(_) => false,
    }
}

/// Fresh identifier, lowercase hyphenated.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
