//! Application layer orchestrating the domain.
//!
//! `HoldingEngine` is the single entry point that changes state: it validates
//! each acquire or release against the store and the actor's policy, then
//! commits the item and actor records together.

pub mod engine;
pub mod request;
pub mod scenarios;
