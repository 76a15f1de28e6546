use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an item (book, vehicle, room).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

/// Identifier of an actor (member, customer, guest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Source of raw identifiers for a store.
///
/// Generators are not required to avoid collisions on their own; the store
/// keeps drawing until it gets an id it has not handed out yet.
pub trait IdGenerator {
    fn next_id(&mut self) -> u32;
}

/// Counts upward from a fixed offset.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u32,
}

impl SequentialIds {
    /// The first id handed out is `offset + 1`.
    pub fn starting_after(offset: u32) -> Self {
        Self { last: offset }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> u32 {
        self.last = self.last.wrapping_add(1);
        self.last
    }
}

/// Draws identifiers from an injected random source.
///
/// Pass a seeded RNG (e.g. `StdRng::seed_from_u64`) for reproducible ids.
#[derive(Debug, Clone)]
pub struct RandomIds<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RandomIds<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> IdGenerator for RandomIds<R> {
    fn next_id(&mut self) -> u32 {
        self.rng.gen_range(1..u32::MAX)
    }
}
