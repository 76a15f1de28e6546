//! Domain types: items, actors, the policies binding actors, and the port
//! through which they are stored.

pub mod actor;
pub mod hold;
pub mod ids;
pub mod item;
pub mod money;
pub mod policy;
pub mod ports;
