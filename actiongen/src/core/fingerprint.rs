//! Content fingerprint used to detect stale generated files.

use sha2::{Digest, Sha256};

use crate::core::registry::ActionRegistry;

/// Fingerprint of an action set and module list under a version seed.
///
/// Hashes `version`, the serialized action → module map and the serialized
/// module list. Method signatures and documentation are not part of the input.
/// Returns the first 16 bytes of the SHA-256 digest as 32 hex chars.
pub fn fingerprint(version: &str, actions: &ActionRegistry, modules: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(version.as_bytes());
    hasher.update(canonical_json(actions).as_bytes());
    hasher.update(canonical_json(modules).as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..16])
}

fn canonical_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).expect("string map serializes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(entries: &[(&str, &str)]) -> ActionRegistry {
        let mut registry = ActionRegistry::new();
        for (action, module) in entries {
            registry.register(*action, *module);
        }
        registry
    }

    fn modules(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn fingerprint_deterministic() {
        let actions = registry(&[("click", "A"), ("seeText", "A")]);
        let first = fingerprint("1.0.0", &actions, &modules(&["A"]));
        let second = fingerprint("1.0.0", &actions, &modules(&["A"]));
        assert_eq!(first, second);
        assert_eq!(first.len(), 32);
    }

    #[test]
    fn actions_hash_as_ordered_json_object() {
        let actions = registry(&[("seeText", "A"), ("click", "B")]);
        assert_eq!(canonical_json(&actions), r#"{"seeText":"A","click":"B"}"#);
        assert_eq!(canonical_json(&modules(&["A", "B"])), r#"["A","B"]"#);
    }

    #[test]
    fn fingerprint_tracks_every_input() {
        let actions = registry(&[("click", "A"), ("amOnUrl", "B")]);
        let base = fingerprint("1.0.0", &actions, &modules(&["A", "B"]));

        let remapped = registry(&[("click", "B"), ("amOnUrl", "B")]);
        assert_ne!(base, fingerprint("1.0.0", &remapped, &modules(&["A", "B"])));
        assert_ne!(base, fingerprint("1.0.0", &actions, &modules(&["B", "A"])));
        assert_ne!(base, fingerprint("1.0.1", &actions, &modules(&["A", "B"])));
    }
}
