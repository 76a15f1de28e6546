use super::hold::Term;
use super::ids::{ActorId, ItemId};
use super::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Car,
    Bike,
    Truck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomClass {
    Single,
    Double,
    Suite,
}

/// What sort of thing an item is.
///
/// One tag on a single `Item` type stands in for a family of subclasses;
/// per-kind behavior lives in [`crate::domain::policy::Policy`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Book,
    Vehicle(VehicleClass),
    Room(RoomClass),
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Book => f.write_str("book"),
            ItemKind::Vehicle(class) => write!(f, "vehicle/{}", class.as_str()),
            ItemKind::Room(class) => write!(f, "room/{}", class.as_str()),
        }
    }
}

impl VehicleClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::Car => "car",
            VehicleClass::Bike => "bike",
            VehicleClass::Truck => "truck",
        }
    }
}

impl RoomClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomClass::Single => "single",
            RoomClass::Double => "double",
            RoomClass::Suite => "suite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state")]
pub enum ItemStatus {
    #[default]
    Available,
    Held { holder: ActorId, term: Term },
}

/// Attributes needed to register a new item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub kind: ItemKind,
    pub title: String,
    pub daily_rate: Money,
}

impl ItemDraft {
    pub fn new(kind: ItemKind, title: impl Into<String>, daily_rate: Money) -> Self {
        Self {
            kind,
            title: title.into(),
            daily_rate,
        }
    }
}

/// A book, vehicle or room that actors can hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    id: ItemId,
    kind: ItemKind,
    title: String,
    daily_rate: Money,
    status: ItemStatus,
    history: Vec<ActorId>,
}

impl Item {
    pub fn new(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            kind: draft.kind,
            title: draft.title,
            daily_rate: draft.daily_rate,
            status: ItemStatus::Available,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn daily_rate(&self) -> Money {
        self.daily_rate
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == ItemStatus::Available
    }

    pub fn holder(&self) -> Option<ActorId> {
        match self.status {
            ItemStatus::Available => None,
            ItemStatus::Held { holder, .. } => Some(holder),
        }
    }

    /// Every actor that has held this item, oldest first.
    pub fn history(&self) -> &[ActorId] {
        &self.history
    }

    pub(crate) fn mark_held(&mut self, holder: ActorId, term: Term) {
        self.status = ItemStatus::Held { holder, term };
        self.history.push(holder);
    }

    pub(crate) fn mark_available(&mut self) {
        self.status = ItemStatus::Available;
    }
}
