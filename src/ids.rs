//! Identifier generation for queue records.
//!
//! Every record the builders create gets an [`Identifier`] from an
//! [`IdGenerator`]. The generator is injected so tests can swap the
//! clock/random default for a deterministic sequence.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use uuid::Uuid;

use crate::types::Identifier;

/// Source of process-unique identifiers.
pub trait IdGenerator: fmt::Debug + Send + Sync {
    /// Produce an identifier that differs from every earlier one.
    fn next_id(&self) -> Identifier;
}

/// Counter shared by every [`TimeRandomIds`] in the process.
static PROCESS_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Default generator: millisecond timestamp, process counter and a random
/// segment taken from a v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeRandomIds;

impl IdGenerator for TimeRandomIds {
    fn next_id(&self) -> Identifier {
        let millis = chrono::Utc::now().timestamp_millis();
        let seq = PROCESS_COUNTER.fetch_add(1, Ordering::Relaxed);
        let random = Uuid::new_v4().simple().to_string();
        Identifier(format!("{millis:x}-{seq:x}-{}", &random[..12]))
    }
}

/// Deterministic generator yielding `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    /// Create a sequence starting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Identifier {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        Identifier(format!("{}-{n}", self.prefix))
    }
}

/// Shared handle to the default generator.
pub fn default_generator() -> Arc<dyn IdGenerator> {
    Arc::new(TimeRandomIds)
}

/// Keep a caller-supplied identifier, or generate one if it is missing or empty.
pub fn id_or_generate(ids: &dyn IdGenerator, existing: Option<Identifier>) -> Identifier {
    match existing {
        Some(id) if !id.as_str().is_empty() => id,
        _ => ids.next_id(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_time_random_ids_are_distinct() {
        let ids = TimeRandomIds;
        let generated: Vec<Identifier> = (0..1_000).map(|_| ids.next_id()).collect();
        let unique: HashSet<_> = generated.iter().collect();
        assert_eq!(unique.len(), generated.len());
        assert!(generated.iter().all(|id| !id.as_str().is_empty()));
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new("slide");
        assert_eq!(ids.next_id().as_str(), "slide-1");
        assert_eq!(ids.next_id().as_str(), "slide-2");
    }

    #[test]
    fn test_id_or_generate_keeps_existing() {
        let ids = SequentialIds::default();
        let kept = id_or_generate(&ids, Some(Identifier::new("q-7")));
        assert_eq!(kept.as_str(), "q-7");
    }

    #[test]
    fn test_id_or_generate_replaces_empty_and_none() {
        let ids = SequentialIds::default();
        assert_eq!(id_or_generate(&ids, Some(Identifier::new(""))).as_str(), "id-1");
        assert_eq!(id_or_generate(&ids, None).as_str(), "id-2");
    }

    proptest! {
        #[test]
        fn test_sequential_ids_never_repeat(count in 1usize..500) {
            let ids = SequentialIds::new("p");
            let unique: HashSet<Identifier> = (0..count).map(|_| ids.next_id()).collect();
            prop_assert_eq!(unique.len(), count);
        }
    }
}
