//! Edges of the process: console narration, CSV request scripts and the
//! final item snapshot.

pub mod console;
pub mod csv;
pub mod snapshot;
