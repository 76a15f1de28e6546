use super::actor::{Actor, ActorDraft};
use super::ids::{ActorId, ItemId};
use super::item::{Item, ItemDraft};

/// Owns the items and actors of one registry.
///
/// `create_*` always succeeds and hands out an id the store has never used.
/// Lookups return `None` for unknown ids; that is an expected outcome.
pub trait EntityStore {
    fn create_item(&mut self, draft: ItemDraft) -> ItemId;
    fn create_actor(&mut self, draft: ActorDraft) -> ActorId;
    fn item(&self, id: ItemId) -> Option<&Item>;
    fn actor(&self, id: ActorId) -> Option<&Actor>;
    /// Replaces the stored record with the same id.
    fn store_item(&mut self, item: Item);
    /// Replaces the stored record with the same id.
    fn store_actor(&mut self, actor: Actor);
    /// All items, ordered by id.
    fn items(&self) -> Vec<&Item>;
    /// All actors, ordered by id.
    fn actors(&self) -> Vec<&Actor>;
}

pub type EntityStoreBox = Box<dyn EntityStore>;
pub type EntityStoreFactory = Box<dyn Fn() -> EntityStoreBox>;

impl<S: EntityStore + ?Sized> EntityStore for Box<S> {
    fn create_item(&mut self, draft: ItemDraft) -> ItemId {
        (**self).create_item(draft)
    }

    fn create_actor(&mut self, draft: ActorDraft) -> ActorId {
        (**self).create_actor(draft)
    }

    fn item(&self, id: ItemId) -> Option<&Item> {
        (**self).item(id)
    }

    fn actor(&self, id: ActorId) -> Option<&Actor> {
        (**self).actor(id)
    }

    fn store_item(&mut self, item: Item) {
        (**self).store_item(item)
    }

    fn store_actor(&mut self, actor: Actor) {
        (**self).store_actor(actor)
    }

    fn items(&self) -> Vec<&Item> {
        (**self).items()
    }

    fn actors(&self) -> Vec<&Actor> {
        (**self).actors()
    }
}
