use super::hold::Term;
use super::ids::{ActorId, ItemId};
use super::policy::Policy;
use std::collections::BTreeMap;

/// Attributes needed to register a new actor.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorDraft {
    pub name: String,
    pub policy: Policy,
}

impl ActorDraft {
    pub fn new(name: impl Into<String>, policy: Policy) -> Self {
        Self {
            name: name.into(),
            policy,
        }
    }
}

/// A member, customer or guest who holds items.
///
/// The held map never grows past `policy.hold_limit()`; the engine checks
/// the limit before it calls [`Actor::take`].
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    id: ActorId,
    name: String,
    policy: Policy,
    held: BTreeMap<ItemId, Term>,
}

impl Actor {
    pub fn new(id: ActorId, draft: ActorDraft) -> Self {
        Self {
            id,
            name: draft.name,
            policy: draft.policy,
            held: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn held(&self) -> &BTreeMap<ItemId, Term> {
        &self.held
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    pub fn holds(&self, item: ItemId) -> bool {
        self.held.contains_key(&item)
    }

    /// Whether one more item fits under the policy limit.
    pub fn can_take_more(&self) -> bool {
        self.held.len() < self.policy.hold_limit()
    }

    pub(crate) fn take(&mut self, item: ItemId, term: Term) {
        self.held.insert(item, term);
    }

    pub(crate) fn give_back(&mut self, item: ItemId) -> Option<Term> {
        self.held.remove(&item)
    }
}
