use crate::domain::actor::{Actor, ActorDraft};
use crate::domain::ids::{ActorId, IdGenerator, ItemId, SequentialIds};
use crate::domain::item::{Item, ItemDraft};
use crate::domain::ports::EntityStore;
use std::collections::BTreeMap;

/// Item ids start after this, so the first item is 101.
pub const ITEM_ID_OFFSET: u32 = 100;

/// An in-memory store for items and actors.
///
/// Records live in `BTreeMap`s so listings come back in id order. Each
/// entity kind has its own id generator.
#[derive(Debug, Clone)]
pub struct InMemoryStore<G: IdGenerator = SequentialIds> {
    items: BTreeMap<ItemId, Item>,
    actors: BTreeMap<ActorId, Actor>,
    item_ids: G,
    actor_ids: G,
}

impl InMemoryStore {
    /// Creates an empty store numbering items from 101 and actors from 1.
    pub fn new() -> Self {
        Self::with_generators(
            SequentialIds::starting_after(ITEM_ID_OFFSET),
            SequentialIds::default(),
        )
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> InMemoryStore<G> {
    pub fn with_generators(item_ids: G, actor_ids: G) -> Self {
        Self {
            items: BTreeMap::new(),
            actors: BTreeMap::new(),
            item_ids,
            actor_ids,
        }
    }

    fn fresh_item_id(&mut self) -> ItemId {
        loop {
            let id = ItemId(self.item_ids.next_id());
            if !self.items.contains_key(&id) {
                return id;
            }
        }
    }

    fn fresh_actor_id(&mut self) -> ActorId {
        loop {
            let id = ActorId(self.actor_ids.next_id());
            if !self.actors.contains_key(&id) {
                return id;
            }
        }
    }
}

impl<G: IdGenerator> EntityStore for InMemoryStore<G> {
    fn create_item(&mut self, draft: ItemDraft) -> ItemId {
        let id = self.fresh_item_id();
        self.items.insert(id, Item::new(id, draft));
        id
    }

    fn create_actor(&mut self, draft: ActorDraft) -> ActorId {
        let id = self.fresh_actor_id();
        self.actors.insert(id, Actor::new(id, draft));
        id
    }

    fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    fn store_item(&mut self, item: Item) {
        self.items.insert(item.id(), item);
    }

    fn store_actor(&mut self, actor: Actor) {
        self.actors.insert(actor.id(), actor);
    }

    fn items(&self) -> Vec<&Item> {
        self.items.values().collect()
    }

    fn actors(&self) -> Vec<&Actor> {
        self.actors.values().collect()
    }
}
