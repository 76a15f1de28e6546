use super::ids::{ActorId, ItemId};
use super::money::Money;
use crate::error::HoldError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of days an item is requested for. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Term(u32);

impl Term {
    pub fn new(days: u32) -> Result<Self, HoldError> {
        if days > 0 {
            Ok(Self(days))
        } else {
            Err(HoldError::Validation(
                "Term must be at least one day".to_string(),
            ))
        }
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Term {
    type Error = HoldError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<Term> for u32 {
    fn from(term: Term) -> Self {
        term.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("1 day"),
            days => write!(f, "{days} days"),
        }
    }
}

/// Receipt for one actor holding one item.
///
/// Returned by a successful acquire (the booking) and by the matching
/// release (the bill). `cost` comes from the item's daily rate and the
/// holder's policy, neither of which changes while the hold lasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hold {
    pub item: ItemId,
    pub actor: ActorId,
    pub term: Term,
    pub cost: Money,
}
