use super::engine::HoldingEngine;
use crate::domain::hold::{Hold, Term};
use crate::domain::ids::{ActorId, ItemId};
use crate::domain::item::ItemKind;
use crate::domain::ports::EntityStore;
use crate::error::Result;

/// One instruction for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Acquire {
        actor: ActorId,
        item: ItemId,
        term: Term,
    },
    AcquireAny {
        actor: ActorId,
        kind: ItemKind,
        term: Term,
    },
    Release {
        actor: ActorId,
        item: ItemId,
    },
}

impl Request {
    pub fn actor(&self) -> ActorId {
        match self {
            Request::Acquire { actor, .. }
            | Request::AcquireAny { actor, .. }
            | Request::Release { actor, .. } => *actor,
        }
    }

    pub fn apply<S: EntityStore>(&self, engine: &mut HoldingEngine<S>) -> Result<Hold> {
        match *self {
            Request::Acquire { actor, item, term } => engine.acquire(actor, item, term),
            Request::AcquireAny { actor, kind, term } => engine.acquire_any(actor, kind, term),
            Request::Release { actor, item } => engine.release(actor, item),
        }
    }
}

/// A request paired with what the engine made of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub request: Request,
    pub result: Result<Hold>,
}

/// Applies `requests` in order. A rejected request does not stop the run.
pub fn replay<S, I>(engine: &mut HoldingEngine<S>, requests: I) -> Vec<Outcome>
where
    S: EntityStore,
    I: IntoIterator<Item = Request>,
{
    requests
        .into_iter()
        .map(|request| Outcome {
            request,
            result: request.apply(engine),
        })
        .collect()
}
