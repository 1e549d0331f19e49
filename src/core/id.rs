//! Zone identifiers and injectable id generation.
//!
//! Zone ids are decoration: the segmentation itself never looks at them.
//! The segmenter takes an `IdGenerator` so callers choose between random
//! UUID-style ids (service use) and predictable ids (tests, snapshots).
//!
//! ## Usage
//!
//! ```
//! use grid_zones::core::{IdGenerator, SeededIdGenerator, SequentialIdGenerator};
//!
//! let mut ids = SequentialIdGenerator::new("zone");
//! assert_eq!(ids.next_id().as_str(), "zone-0");
//! assert_eq!(ids.next_id().as_str(), "zone-1");
//!
//! // Same seed, same ids
//! let mut a = SeededIdGenerator::new(42);
//! let mut b = SeededIdGenerator::new(42);
//! assert_eq!(a.next_id(), b.next_id());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Builder;

/// Opaque zone identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(String);

impl ZoneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh zone identifiers.
pub trait IdGenerator {
    /// Produce the next identifier. Must not repeat within a generator.
    fn next_id(&mut self) -> ZoneId;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> ZoneId {
        (**self).next_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> ZoneId {
        (**self).next_id()
    }
}

/// Random version-4 UUID strings drawn from ChaCha8.
///
/// Seeded generators are deterministic; `from_entropy` gives the usual
/// "fresh unique token" behaviour.
#[derive(Clone, Debug)]
pub struct SeededIdGenerator {
    inner: ChaCha8Rng,
}

impl SeededIdGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }
}

impl IdGenerator for SeededIdGenerator {
    fn next_id(&mut self) -> ZoneId {
        let mut bytes = [0u8; 16];
        self.inner.fill(&mut bytes);
        ZoneId(Builder::from_random_bytes(bytes).into_uuid().to_string())
    }
}

/// `prefix-0`, `prefix-1`, ...
#[derive(Clone, Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ZoneId {
        let id = ZoneId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
