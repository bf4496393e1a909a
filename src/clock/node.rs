use rand::{Rng, rng};
use sha2::{Digest, Sha256};

/// Environment variable consulted by [`location_from_env`].
pub const NODE_ENV: &str = "KORDER_NODE_ID";

/// Derives a ⟨𝒍⟩ location from an arbitrary seed string: the first 32
/// bits of its SHA-256 digest. Deployments that name their nodes (pod
/// name, hostname) get a stable location per name.
pub fn location_from_seed(seed: &str) -> u32 {
    let digest = Sha256::digest(seed.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Derives a ⟨𝒍⟩ location from the [`NODE_ENV`] environment variable.
/// An unset variable hashes as the empty string.
pub fn location_from_env() -> u32 {
    location_from_seed(&std::env::var(NODE_ENV).unwrap_or_default())
}

/// Draws a ⟨𝒍⟩ location from the thread-local RNG.
pub fn location_from_random() -> u32 {
    rng().random()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_hash_is_stable() {
        assert_eq!(location_from_seed("node-7.eu-west-1"), 0xbb99_2771);
        assert_eq!(location_from_seed(""), 0xe3b0_c442);
        assert_ne!(location_from_seed("node-1"), location_from_seed("node-2"));
    }

    #[test]
    fn env_location_follows_the_variable() {
        // SAFETY: this test is the variable's only accessor.
        unsafe { std::env::set_var(NODE_ENV, "node-7.eu-west-1") };
        assert_eq!(location_from_env(), 0xbb99_2771);
        unsafe { std::env::remove_var(NODE_ENV) };
        assert_eq!(location_from_env(), 0xe3b0_c442);
    }

    #[test]
    fn random_locations_spread() {
        let a = location_from_random();
        let b = location_from_random();
        assert!(a != 0 || b != 0);
    }
}
