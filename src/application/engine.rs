use crate::domain::actor::{Actor, ActorDraft};
use crate::domain::hold::{Hold, Term};
use crate::domain::ids::{ActorId, ItemId};
use crate::domain::item::{Item, ItemDraft, ItemKind, ItemStatus};
use crate::domain::money::Money;
use crate::domain::ports::EntityStore;
use crate::error::{HoldError, Result};
use crate::infrastructure::in_memory::InMemoryStore;
use tracing::{debug, info};

/// Moves items between `Available` and `Held` on behalf of actors.
///
/// `HoldingEngine` owns its store and is the only thing that changes item
/// status or actor holdings. Every request either commits both the item and
/// the actor record or leaves the store untouched.
pub struct HoldingEngine<S: EntityStore = InMemoryStore> {
    store: S,
}

impl Default for HoldingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HoldingEngine {
    pub fn new() -> Self {
        Self {
            store: InMemoryStore::new(),
        }
    }
}

impl<S: EntityStore> HoldingEngine<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn register_item(&mut self, draft: ItemDraft) -> ItemId {
        let kind = draft.kind;
        let id = self.store.create_item(draft);
        debug!(item = %id, %kind, "registered item");
        id
    }

    pub fn register_actor(&mut self, draft: ActorDraft) -> ActorId {
        let policy = draft.policy;
        let id = self.store.create_actor(draft);
        debug!(actor = %id, %policy, "registered actor");
        id
    }

    pub fn item(&self, id: ItemId) -> Result<&Item> {
        self.store.item(id).ok_or(HoldError::EntityNotFound(id))
    }

    pub fn actor(&self, id: ActorId) -> Result<&Actor> {
        self.store.actor(id).ok_or(HoldError::ActorNotFound(id))
    }

    /// Hands `item` to `actor` for `term`.
    ///
    /// Checks, in order: the actor exists, the item exists, the item is
    /// available, the actor is under their hold limit, and the term is within
    /// their maximum. The first failing check is returned.
    pub fn acquire(&mut self, actor_id: ActorId, item_id: ItemId, term: Term) -> Result<Hold> {
        let outcome = self.try_acquire(actor_id, item_id, term);
        match &outcome {
            Ok(hold) => info!(
                actor = %actor_id,
                item = %item_id,
                days = term.days(),
                cost = %hold.cost,
                "item acquired"
            ),
            Err(e) => info!(actor = %actor_id, item = %item_id, "acquire rejected: {e}"),
        }
        outcome
    }

    fn try_acquire(&mut self, actor_id: ActorId, item_id: ItemId, term: Term) -> Result<Hold> {
        let actor = self.actor(actor_id)?;
        let item = self.item(item_id)?;

        if let ItemStatus::Held { holder, .. } = item.status() {
            return Err(HoldError::EntityUnavailable {
                item: item_id,
                holder,
            });
        }

        let policy = actor.policy();
        if !actor.can_take_more() {
            return Err(HoldError::LimitExceeded {
                actor: actor_id,
                limit: policy.hold_limit(),
            });
        }
        if term.days() > policy.max_term() {
            return Err(HoldError::TermExceeded {
                requested: term.days(),
                max: policy.max_term(),
            });
        }

        let cost = policy.cost(item.daily_rate(), term)?;
        let mut item = item.clone();
        let mut actor = actor.clone();
        item.mark_held(actor_id, term);
        actor.take(item_id, term);
        self.store.store_item(item);
        self.store.store_actor(actor);

        Ok(Hold {
            item: item_id,
            actor: actor_id,
            term,
            cost,
        })
    }

    /// Hands the first available item of `kind` (lowest id) to `actor`.
    pub fn acquire_any(&mut self, actor_id: ActorId, kind: ItemKind, term: Term) -> Result<Hold> {
        self.actor(actor_id)?;
        let candidate = self
            .store
            .items()
            .into_iter()
            .find(|item| item.kind() == kind && item.is_available())
            .map(Item::id);

        match candidate {
            Some(item_id) => self.acquire(actor_id, item_id, term),
            None => {
                let e = HoldError::NoneAvailable(kind);
                info!(actor = %actor_id, %kind, "acquire rejected: {e}");
                Err(e)
            }
        }
    }

    /// Takes `item` back from `actor`.
    ///
    /// Checks, in order: the item exists, the actor exists, the item is held,
    /// and it is held by this actor. The returned `Hold` carries the term and
    /// cost that were agreed when the item was acquired.
    pub fn release(&mut self, actor_id: ActorId, item_id: ItemId) -> Result<Hold> {
        let outcome = self.try_release(actor_id, item_id);
        match &outcome {
            Ok(hold) => info!(
                actor = %actor_id,
                item = %item_id,
                cost = %hold.cost,
                "item released"
            ),
            Err(e) => info!(actor = %actor_id, item = %item_id, "release rejected: {e}"),
        }
        outcome
    }

    fn try_release(&mut self, actor_id: ActorId, item_id: ItemId) -> Result<Hold> {
        let item = self.item(item_id)?;
        let actor = self.actor(actor_id)?;

        let (holder, term) = match item.status() {
            ItemStatus::Available => return Err(HoldError::NotHeld(item_id)),
            ItemStatus::Held { holder, term } => (holder, term),
        };
        if holder != actor_id {
            return Err(HoldError::WrongHolder {
                item: item_id,
                actor: actor_id,
                holder,
            });
        }

        let cost = actor.policy().cost(item.daily_rate(), term)?;
        let mut item = item.clone();
        let mut actor = actor.clone();
        item.mark_available();
        actor.give_back(item_id);
        self.store.store_item(item);
        self.store.store_actor(actor);

        Ok(Hold {
            item: item_id,
            actor: actor_id,
            term,
            cost,
        })
    }

    /// What `actor` would pay to hold `item` for `term`. Changes nothing.
    pub fn quote(&self, actor_id: ActorId, item_id: ItemId, term: Term) -> Result<Money> {
        let actor = self.actor(actor_id)?;
        let item = self.item(item_id)?;
        actor.policy().cost(item.daily_rate(), term)
    }

    /// Items `actor` currently holds, with their terms, in id order.
    pub fn holdings(&self, actor_id: ActorId) -> Result<Vec<(ItemId, Term)>> {
        let actor = self.actor(actor_id)?;
        Ok(actor.held().iter().map(|(id, term)| (*id, *term)).collect())
    }

    /// Actors that have held `item`, oldest first.
    pub fn history(&self, item_id: ItemId) -> Result<&[ActorId]> {
        Ok(self.item(item_id)?.history())
    }

    /// Available items of `kind`, in id order.
    pub fn available(&self, kind: ItemKind) -> Vec<&Item> {
        self.store
            .items()
            .into_iter()
            .filter(|item| item.kind() == kind && item.is_available())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::{RoomClass, VehicleClass};
    use crate::domain::policy::{Limits, Policy};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn days(n: u32) -> Term {
        Term::new(n).unwrap()
    }

    fn book(engine: &mut HoldingEngine, title: &str) -> ItemId {
        engine.register_item(ItemDraft::new(ItemKind::Book, title, Money::ZERO))
    }

    fn single_limit() -> Policy {
        Policy::Custom(Limits {
            hold_limit: 1,
            max_term: 14,
            discount: Decimal::ZERO,
        })
    }

    #[test]
    fn test_acquire_marks_both_sides() {
        let mut engine = HoldingEngine::new();
        let book = book(&mut engine, "Clean Code");
        let member = engine.register_actor(ActorDraft::new("Srimani", Policy::Premium));

        let hold = engine.acquire(member, book, days(14)).unwrap();
        assert_eq!(hold.item, book);
        assert_eq!(hold.actor, member);
        assert_eq!(hold.cost, Money::ZERO);

        assert_eq!(engine.item(book).unwrap().holder(), Some(member));
        assert_eq!(engine.holdings(member).unwrap(), vec![(book, days(14))]);
        assert_eq!(engine.history(book).unwrap(), &[member]);
    }

    #[test]
    fn test_acquire_checks_run_in_order() {
        let mut engine = HoldingEngine::new();
        let book = book(&mut engine, "Operating Systems");
        let member = engine.register_actor(ActorDraft::new("Rahul", Policy::Regular));

        // Unknown actor wins over unknown item.
        assert_eq!(
            engine.acquire(ActorId(99), ItemId(999), days(1)),
            Err(HoldError::ActorNotFound(ActorId(99)))
        );
        assert_eq!(
            engine.acquire(member, ItemId(999), days(1)),
            Err(HoldError::EntityNotFound(ItemId(999)))
        );
        assert_eq!(
            engine.acquire(member, book, days(10)),
            Err(HoldError::TermExceeded {
                requested: 10,
                max: 7
            })
        );
        assert!(engine.item(book).unwrap().is_available());
        assert_eq!(engine.actor(member).unwrap().held_count(), 0);
    }

    #[test]
    fn test_unavailable_reported_before_policy() {
        let mut engine = HoldingEngine::new();
        let book = book(&mut engine, "DSA with Java");
        let first = engine.register_actor(ActorDraft::new("A", single_limit()));
        let second = engine.register_actor(ActorDraft::new("B", single_limit()));

        engine.acquire(first, book, days(7)).unwrap();
        // Second also asks for too long a term, but the item check comes first.
        assert_eq!(
            engine.acquire(second, book, days(30)),
            Err(HoldError::EntityUnavailable {
                item: book,
                holder: first
            })
        );
    }

    #[test]
    fn test_limit_exceeded() {
        let mut engine = HoldingEngine::new();
        let a = book(&mut engine, "A");
        let b = book(&mut engine, "B");
        let c = book(&mut engine, "C");
        let member = engine.register_actor(ActorDraft::new("Rahul", Policy::Regular));

        engine.acquire(member, a, days(5)).unwrap();
        engine.acquire(member, b, days(5)).unwrap();
        assert_eq!(
            engine.acquire(member, c, days(5)),
            Err(HoldError::LimitExceeded {
                actor: member,
                limit: 2
            })
        );
        assert!(engine.item(c).unwrap().is_available());
    }

    #[test]
    fn test_limit_reported_before_term() {
        let mut engine = HoldingEngine::new();
        let first = book(&mut engine, "A");
        let second = book(&mut engine, "B");
        let member = engine.register_actor(ActorDraft::new("Rahul", single_limit()));

        engine.acquire(member, first, days(7)).unwrap();
        // Both the limit and the term are exceeded; the limit check comes first.
        assert_eq!(
            engine.acquire(member, second, days(30)),
            Err(HoldError::LimitExceeded {
                actor: member,
                limit: 1
            })
        );
        assert!(engine.item(second).unwrap().is_available());
    }

    #[test]
    fn test_unpriceable_request_is_rejected() {
        let mut engine = HoldingEngine::new();
        let item = engine.register_item(ItemDraft::new(
            ItemKind::Vehicle(VehicleClass::Truck),
            "Tata Ace",
            Money::new(Decimal::MAX).unwrap(),
        ));
        let customer = engine.register_actor(ActorDraft::new("Srimani", Policy::Regular));

        let err = engine.acquire(customer, item, days(2)).unwrap_err();
        assert!(matches!(err, HoldError::Validation(_)));
        assert!(engine.quote(customer, item, days(2)).is_err());
        assert!(engine.item(item).unwrap().is_available());
        assert_eq!(engine.actor(customer).unwrap().held_count(), 0);
    }

    #[test]
    fn test_release_checks_ownership() {
        let mut engine = HoldingEngine::new();
        let book = book(&mut engine, "Clean Code");
        let owner = engine.register_actor(ActorDraft::new("A", single_limit()));
        let other = engine.register_actor(ActorDraft::new("B", single_limit()));

        assert_eq!(engine.release(owner, book), Err(HoldError::NotHeld(book)));

        engine.acquire(owner, book, days(7)).unwrap();
        assert_eq!(
            engine.release(other, book),
            Err(HoldError::WrongHolder {
                item: book,
                actor: other,
                holder: owner
            })
        );
        assert_eq!(engine.item(book).unwrap().holder(), Some(owner));

        let hold = engine.release(owner, book).unwrap();
        assert_eq!(hold.term, days(7));
        assert!(engine.item(book).unwrap().is_available());
        assert!(engine.holdings(owner).unwrap().is_empty());
    }

    #[test]
    fn test_release_checks_item_before_actor() {
        let mut engine = HoldingEngine::new();
        assert_eq!(
            engine.release(ActorId(9), ItemId(999)),
            Err(HoldError::EntityNotFound(ItemId(999)))
        );
        let book = book(&mut engine, "A");
        assert_eq!(
            engine.release(ActorId(9), book),
            Err(HoldError::ActorNotFound(ActorId(9)))
        );
    }

    #[test]
    fn test_release_returns_the_bill() {
        let mut engine = HoldingEngine::new();
        let car = engine.register_item(ItemDraft::new(
            ItemKind::Vehicle(VehicleClass::Car),
            "Honda City",
            Money::new(dec!(1200)).unwrap(),
        ));
        let customer = engine.register_actor(ActorDraft::new("Srimani", Policy::Premium));

        assert_eq!(
            engine.quote(customer, car, days(3)).unwrap(),
            Money::new(dec!(3240)).unwrap()
        );
        let booked = engine.acquire(customer, car, days(3)).unwrap();
        let bill = engine.release(customer, car).unwrap();
        assert_eq!(booked, bill);
    }

    #[test]
    fn test_acquire_any_picks_lowest_free_room() {
        let mut engine = HoldingEngine::new();
        let rate = Money::new(dec!(2000)).unwrap();
        let first = engine.register_item(ItemDraft::new(
            ItemKind::Room(RoomClass::Single),
            "Room 101",
            rate,
        ));
        let second = engine.register_item(ItemDraft::new(
            ItemKind::Room(RoomClass::Single),
            "Room 103",
            rate,
        ));
        let guest = engine.register_actor(ActorDraft::new("Guest", Policy::Premium));

        let kind = ItemKind::Room(RoomClass::Single);
        assert_eq!(engine.acquire_any(guest, kind, days(2)).unwrap().item, first);
        assert_eq!(engine.acquire_any(guest, kind, days(2)).unwrap().item, second);
        assert_eq!(
            engine.acquire_any(guest, kind, days(2)),
            Err(HoldError::NoneAvailable(kind))
        );
        assert_eq!(
            engine.acquire_any(ActorId(42), kind, days(2)),
            Err(HoldError::ActorNotFound(ActorId(42)))
        );
        assert!(engine.available(kind).is_empty());
    }
}
