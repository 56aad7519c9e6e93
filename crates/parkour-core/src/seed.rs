//! Deterministic seed derivation for reproducible rollouts.
//!
//! [`SeedTree`] derives per-episode and per-subsystem seeds from a single
//! run seed:
//!
//! ```text
//! Run seed
//! └── Episode seed (per episode)
//!     └── Subsystem seed (goal placement, policy, ...)
//! ```
//!
//! Child seeds come from deterministic hashing, so an entire run replays
//! from one root value.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Derive a child seed from a parent seed and a string key.
///
/// Uses `DefaultHasher` (SipHash-1-3) for fast, deterministic mixing.
///
/// # Example
///
/// ```
/// use parkour_core::seed::derive_seed;
///
/// let child = derive_seed(42, "goal");
/// assert_ne!(child, 42); // derived, not identical
/// assert_eq!(child, derive_seed(42, "goal")); // deterministic
/// ```
#[must_use]
pub fn derive_seed(parent: u64, key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    parent.hash(&mut hasher);
    key.hash(&mut hasher);
    hasher.finish()
}

/// Derive a child seed from a parent seed and a numeric index.
#[must_use]
pub fn derive_seed_indexed(parent: u64, index: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    parent.hash(&mut hasher);
    index.hash(&mut hasher);
    hasher.finish()
}

/// Seed derivation tree for a single-environment run.
#[derive(Debug, Clone)]
pub struct SeedTree {
    root: u64,
}

impl SeedTree {
    /// Create a new tree from a root (run-level) seed.
    #[must_use]
    pub const fn new(root: u64) -> Self {
        Self { root }
    }

    /// The root seed.
    #[must_use]
    pub const fn root(&self) -> u64 {
        self.root
    }

    /// Derive a seed for an episode.
    #[must_use]
    pub fn episode_seed(&self, episode_number: u64) -> u64 {
        derive_seed_indexed(self.root, episode_number)
    }

    /// Derive a seed for a named subsystem within an episode.
    #[must_use]
    pub fn subsystem_seed(&self, episode_number: u64, subsystem: &str) -> u64 {
        derive_seed(self.episode_seed(episode_number), subsystem)
    }

    /// Create a `ChaCha8Rng` from the root seed.
    #[must_use]
    pub fn root_rng(&self) -> rand_chacha::ChaCha8Rng {
        use rand::SeedableRng;
        rand_chacha::ChaCha8Rng::seed_from_u64(self.root)
    }

    /// Create a `ChaCha8Rng` from an episode-level seed.
    #[must_use]
    pub fn episode_rng(&self, episode_number: u64) -> rand_chacha::ChaCha8Rng {
        use rand::SeedableRng;
        rand_chacha::ChaCha8Rng::seed_from_u64(self.episode_seed(episode_number))
    }
}

impl Default for SeedTree {
    fn default() -> Self {
        Self::new(0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
