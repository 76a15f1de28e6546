//! Hard-coded demonstration runs: a library lending books to members, a
//! rental desk hiring out vehicles, and a hotel booking rooms.

use super::engine::HoldingEngine;
use super::request::Request;
use crate::domain::actor::ActorDraft;
use crate::domain::hold::Term;
use crate::domain::item::{ItemDraft, ItemKind, RoomClass, VehicleClass};
use crate::domain::money::Money;
use crate::domain::policy::{Limits, Policy};
use crate::domain::ports::EntityStore;
use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rental customers may hire one vehicle at a time, for up to 30 days.
pub const RENTAL_CUSTOMER: Limits = Limits {
    hold_limit: 1,
    max_term: 30,
    discount: Decimal::ZERO,
};

/// Hotel guests may hold up to three rooms, for up to 30 nights.
pub const HOTEL_GUEST: Limits = Limits {
    hold_limit: 3,
    max_term: 30,
    discount: Decimal::ZERO,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Library,
    Rental,
    Hotel,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Library, Scenario::Rental, Scenario::Hotel];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Library => "library",
            Scenario::Rental => "rental",
            Scenario::Hotel => "hotel",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Scenario::Library => "Library membership",
            Scenario::Rental => "Vehicle rental",
            Scenario::Hotel => "Hotel booking",
        }
    }

    /// Registers this scenario's catalog and cast in `engine`, returning the
    /// scripted requests that go with them.
    pub fn seed<S: EntityStore>(&self, engine: &mut HoldingEngine<S>) -> Result<Vec<Request>> {
        match self {
            Scenario::Library => seed_library(engine),
            Scenario::Rental => seed_rental(engine),
            Scenario::Hotel => seed_hotel(engine),
        }
    }
}

fn days(n: u32) -> Result<Term> {
    Term::new(n)
}

fn seed_library<S: EntityStore>(engine: &mut HoldingEngine<S>) -> Result<Vec<Request>> {
    let clean_code =
        engine.register_item(ItemDraft::new(ItemKind::Book, "Clean Code", Money::ZERO));
    let os = engine.register_item(ItemDraft::new(
        ItemKind::Book,
        "Operating Systems",
        Money::ZERO,
    ));
    let dsa = engine.register_item(ItemDraft::new(ItemKind::Book, "DSA with Java", Money::ZERO));

    let srimani = engine.register_actor(ActorDraft::new("Srimani", Policy::Premium));
    let rahul = engine.register_actor(ActorDraft::new("Rahul", Policy::Regular));

    Ok(vec![
        Request::Acquire {
            actor: srimani,
            item: clean_code,
            term: days(14)?,
        },
        // Regular members are capped at 7 days.
        Request::Acquire {
            actor: rahul,
            item: os,
            term: days(10)?,
        },
        Request::Acquire {
            actor: rahul,
            item: os,
            term: days(5)?,
        },
        Request::Acquire {
            actor: rahul,
            item: dsa,
            term: days(5)?,
        },
        Request::Acquire {
            actor: rahul,
            item: clean_code,
            term: days(5)?,
        },
        Request::Release {
            actor: srimani,
            item: clean_code,
        },
        Request::Release {
            actor: rahul,
            item: os,
        },
    ])
}

fn seed_rental<S: EntityStore>(engine: &mut HoldingEngine<S>) -> Result<Vec<Request>> {
    let car = engine.register_item(ItemDraft::new(
        ItemKind::Vehicle(VehicleClass::Car),
        "Honda City",
        Money::new(dec!(1200))?,
    ));
    engine.register_item(ItemDraft::new(
        ItemKind::Vehicle(VehicleClass::Bike),
        "Yamaha FZ",
        Money::new(dec!(500))?,
    ));
    engine.register_item(ItemDraft::new(
        ItemKind::Vehicle(VehicleClass::Truck),
        "Tata Ace",
        Money::new(dec!(2000))?,
    ));

    let srimani = engine.register_actor(ActorDraft::new(
        "Srimani",
        Policy::Custom(RENTAL_CUSTOMER),
    ));
    let rahul = engine.register_actor(ActorDraft::new("Rahul", Policy::Custom(RENTAL_CUSTOMER)));

    Ok(vec![
        Request::Acquire {
            actor: srimani,
            item: car,
            term: days(3)?,
        },
        Request::Acquire {
            actor: rahul,
            item: car,
            term: days(2)?,
        },
        Request::Release {
            actor: rahul,
            item: car,
        },
        Request::Release {
            actor: srimani,
            item: car,
        },
        Request::Acquire {
            actor: rahul,
            item: car,
            term: days(2)?,
        },
    ])
}

fn seed_hotel<S: EntityStore>(engine: &mut HoldingEngine<S>) -> Result<Vec<Request>> {
    let single = engine.register_item(ItemDraft::new(
        ItemKind::Room(RoomClass::Single),
        "Room 101",
        Money::new(dec!(2000))?,
    ));
    engine.register_item(ItemDraft::new(
        ItemKind::Room(RoomClass::Double),
        "Room 102",
        Money::new(dec!(3500))?,
    ));
    engine.register_item(ItemDraft::new(
        ItemKind::Room(RoomClass::Suite),
        "Room 201",
        Money::new(dec!(8000))?,
    ));

    let srimani = engine.register_actor(ActorDraft::new("Srimani", Policy::Custom(HOTEL_GUEST)));
    let ananya = engine.register_actor(ActorDraft::new("Ananya", Policy::Custom(HOTEL_GUEST)));

    let single_room = ItemKind::Room(RoomClass::Single);
    Ok(vec![
        Request::AcquireAny {
            actor: srimani,
            kind: single_room,
            term: days(2)?,
        },
        Request::AcquireAny {
            actor: ananya,
            kind: single_room,
            term: days(1)?,
        },
        Request::AcquireAny {
            actor: ananya,
            kind: ItemKind::Room(RoomClass::Suite),
            term: days(1)?,
        },
        Request::Release {
            actor: srimani,
            item: single,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::request::replay;
    use crate::domain::ids::{ActorId, ItemId};
    use crate::error::HoldError;

    #[test]
    fn test_library_script() {
        let mut engine = HoldingEngine::new();
        let requests = Scenario::Library.seed(&mut engine).unwrap();
        let results: Vec<_> = replay(&mut engine, requests)
            .into_iter()
            .map(|outcome| outcome.result)
            .collect();

        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(HoldError::TermExceeded {
                requested: 10,
                max: 7
            })
        );
        assert!(results[2].is_ok());
        assert!(results[3].is_ok());
        assert_eq!(
            results[4],
            Err(HoldError::EntityUnavailable {
                item: ItemId(101),
                holder: ActorId(1)
            })
        );
        assert!(results[5].is_ok());
        assert!(results[6].is_ok());

        // Rahul still has DSA with Java.
        assert_eq!(engine.item(ItemId(103)).unwrap().holder(), Some(ActorId(2)));
        assert!(engine.item(ItemId(101)).unwrap().is_available());
    }

    #[test]
    fn test_rental_script() {
        let mut engine = HoldingEngine::new();
        let requests = Scenario::Rental.seed(&mut engine).unwrap();
        let outcomes = replay(&mut engine, requests);

        let first = outcomes[0].result.as_ref().unwrap();
        assert_eq!(first.cost, Money::new(dec!(3600)).unwrap());
        assert!(matches!(
            outcomes[1].result,
            Err(HoldError::EntityUnavailable { .. })
        ));
        assert!(matches!(
            outcomes[2].result,
            Err(HoldError::WrongHolder { .. })
        ));
        assert!(outcomes[3].result.is_ok());
        assert_eq!(
            outcomes[4].result.as_ref().unwrap().cost,
            Money::new(dec!(2400)).unwrap()
        );
        assert_eq!(
            engine.history(ItemId(101)).unwrap(),
            &[ActorId(1), ActorId(2)]
        );
    }

    #[test]
    fn test_hotel_script() {
        let mut engine = HoldingEngine::new();
        let requests = Scenario::Hotel.seed(&mut engine).unwrap();
        let outcomes = replay(&mut engine, requests);

        assert_eq!(outcomes[0].result.as_ref().unwrap().item, ItemId(101));
        assert_eq!(
            outcomes[1].result,
            Err(HoldError::NoneAvailable(ItemKind::Room(RoomClass::Single)))
        );
        assert_eq!(outcomes[2].result.as_ref().unwrap().item, ItemId(103));
        let bill = outcomes[3].result.as_ref().unwrap();
        assert_eq!(bill.cost, Money::new(dec!(4000)).unwrap());
    }
}
