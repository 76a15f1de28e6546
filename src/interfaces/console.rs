use crate::application::engine::HoldingEngine;
use crate::application::request::{Outcome, Request};
use crate::domain::ids::{ActorId, ItemId};
use crate::domain::ports::EntityStore;
use std::io::{self, Write};

/// Describes a run in plain sentences, one line per event.
pub struct Narrator<W: Write> {
    out: W,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "== {title} ==")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Lists every registered item and actor.
    pub fn roster<S: EntityStore>(&mut self, engine: &HoldingEngine<S>) -> io::Result<()> {
        for item in engine.store().items() {
            writeln!(
                self.out,
                "Added {} \"{}\" (#{}, {} per day)",
                item.kind(),
                item.title(),
                item.id(),
                item.daily_rate()
            )?;
        }
        for actor in engine.store().actors() {
            let policy = actor.policy();
            writeln!(
                self.out,
                "Added {} (#{}, {}: up to {} item(s) for {} day(s))",
                actor.name(),
                actor.id(),
                policy,
                policy.hold_limit(),
                policy.max_term()
            )?;
        }
        Ok(())
    }

    pub fn outcome<S: EntityStore>(
        &mut self,
        engine: &HoldingEngine<S>,
        outcome: &Outcome,
    ) -> io::Result<()> {
        let who = actor_name(engine, outcome.request.actor());
        match (&outcome.request, &outcome.result) {
            (Request::Acquire { .. } | Request::AcquireAny { .. }, Ok(hold)) => writeln!(
                self.out,
                "{who} acquired {} for {}, cost {}",
                item_label(engine, hold.item),
                hold.term,
                hold.cost
            ),
            (Request::Release { .. }, Ok(hold)) => writeln!(
                self.out,
                "{who} returned {} after {}, bill {}",
                item_label(engine, hold.item),
                hold.term,
                hold.cost
            ),
            (Request::Acquire { item, .. }, Err(e)) => writeln!(
                self.out,
                "{who} could not acquire {}: {e}",
                item_label(engine, *item)
            ),
            (Request::AcquireAny { kind, .. }, Err(e)) => {
                writeln!(self.out, "{who} could not acquire any {kind}: {e}")
            }
            (Request::Release { item, .. }, Err(e)) => writeln!(
                self.out,
                "{who} could not return {}: {e}",
                item_label(engine, *item)
            ),
        }
    }

    /// Prints who has held each item, for items that were ever held.
    pub fn histories<S: EntityStore>(&mut self, engine: &HoldingEngine<S>) -> io::Result<()> {
        for item in engine.store().items() {
            if item.history().is_empty() {
                continue;
            }
            let names: Vec<String> = item
                .history()
                .iter()
                .map(|id| actor_name(engine, *id))
                .collect();
            writeln!(
                self.out,
                "History of \"{}\": {}",
                item.title(),
                names.join(", ")
            )?;
        }
        Ok(())
    }
}

fn actor_name<S: EntityStore>(engine: &HoldingEngine<S>, id: ActorId) -> String {
    match engine.actor(id) {
        Ok(actor) => actor.name().to_string(),
        Err(_) => format!("actor {id}"),
    }
}

fn item_label<S: EntityStore>(engine: &HoldingEngine<S>, id: ItemId) -> String {
    match engine.item(id) {
        Ok(item) => format!("\"{}\" (#{id})", item.title()),
        Err(_) => format!("item {id}"),
    }
}
