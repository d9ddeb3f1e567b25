//! Logical id allocation
//!
//! A logical id is the human readable part of a construct path (alphanumerics of
//! every component below the stack) followed by eight hex characters of the BLAKE3
//! hash of the full path. The suffix keeps ids unique when two paths collapse to the
//! same readable part, and it is stable across runs.

/// Length of the hash suffix
pub const HASH_SUFFIX_LEN: usize = 8;

/// CloudFormation caps logical ids at 255 characters
const MAX_LOGICAL_ID_LEN: usize = 255;

/// Allocate the logical id for a construct path
///
/// `path[0]` is the stack name and does not contribute to the readable part.
pub fn allocate(path: &[String]) -> String {
    let readable: String = path
        .iter()
        .skip(1)
        .flat_map(|component| component.chars())
        .filter(char::is_ascii_alphanumeric)
        .collect();

    let hash = blake3::hash(path.join("/").as_bytes()).to_hex();
    let suffix = hash.as_str()[..HASH_SUFFIX_LEN].to_ascii_uppercase();

    let max_readable = MAX_LOGICAL_ID_LEN - HASH_SUFFIX_LEN;
    let readable = if readable.len() > max_readable {
        &readable[..max_readable]
    } else {
        readable.as_str()
    };

    format!("{readable}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| (*p).to_string()).collect()
    }

    #[test]
    fn test_readable_part_skips_stack_name() {
        let id = allocate(&path(&["UniKarlsruheStack", "StaticWebsite", "SiteBucket"]));
        assert!(id.starts_with("StaticWebsiteSiteBucket"));
        assert_eq!(id.len(), "StaticWebsiteSiteBucket".len() + HASH_SUFFIX_LEN);
    }

    #[test]
    fn test_strips_non_alphanumerics() {
        let id = allocate(&path(&["S", "Open to the world", "a-b_c"]));
        assert!(id.starts_with("Opentotheworldabc"));
    }

    #[test]
    fn test_is_deterministic() {
        let p = path(&["S", "Compute", "ASG"]);
        assert_eq!(allocate(&p), allocate(&p));
    }

    #[test]
    fn test_colliding_readable_parts_get_distinct_ids() {
        let a = allocate(&path(&["S", "ab", "c"]));
        let b = allocate(&path(&["S", "a", "bc"]));
        assert_ne!(a, b);
    }

    #[test]
    fn test_suffix_is_uppercase_hex() {
        let id = allocate(&path(&["S", "X"]));
        let suffix = &id[id.len() - HASH_SUFFIX_LEN..];
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        );
    }
}
