//! Content fingerprints over ordered string lists.

use sha2::{Digest, Sha256};

/// Fingerprint an ordered list of strings as 64 lowercase hex chars.
///
/// Each item's bytes are fed into a running SHA-256 with no delimiter,
/// and the resulting digest is hashed once more before rendering.
/// Deployed fingerprints depend on this exact construction, including
/// its insensitivity to item boundaries (`["ab", "c"]` and `["a", "bc"]`
/// collide); changing it would be a wire-compatibility break.
pub fn hash_of<S: AsRef<str>>(items: &[S]) -> String {
    let mut hasher = Sha256::new();
    for item in items {
        hasher.update(item.as_ref().as_bytes());
    }

    let digest = Sha256::digest(hasher.finalize());
    format!("{:x}", digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_LIST_DIGEST: &str =
        "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456";

    #[test]
    fn empty_list_golden_value() {
        assert_eq!(hash_of::<&str>(&[]), EMPTY_LIST_DIGEST);
    }

    #[test]
    fn deterministic() {
        assert_eq!(hash_of(&["a", "b"]), hash_of(&["a", "b"]));
        assert_eq!(
            hash_of(&["a", "b"]),
            "a1ff8f1856b5e24e32e3882edd4a021f48f28a8b21854b77fdef25a97601aace"
        );
    }

    #[test]
    fn order_sensitive() {
        assert_ne!(hash_of(&["a", "b"]), hash_of(&["b", "a"]));
    }

    #[test]
    fn output_is_64_lowercase_hex_chars() {
        let digest = hash_of(&["prod", "dev"]);
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn item_boundaries_do_not_separate_content() {
        // Pinned compatibility behavior, not an oversight: concatenation
        // happens without delimiters.
        let joined = hash_of(&["abc"]);
        assert_eq!(hash_of(&["ab", "c"]), joined);
        assert_eq!(hash_of(&["a", "bc"]), joined);
        assert_eq!(
            joined,
            "4f8b42c22dd3729b519ba6f68d2da7cc5b2d606d05daed5ad5128cc03e6c6358"
        );
    }

    #[test]
    fn accepts_owned_strings() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(hash_of(&items), hash_of(&["a", "b"]));
    }
}
