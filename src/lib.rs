//! An interactive single-user account ledger.
//!
//! Named accounts carry a PIN, a balance, debt maps, pending transfer
//! notifications, and an append-only history, all persisted to a flat JSON
//! file between sessions. The crate is organized the same way the data
//! flows: `app` runs the input loop, `common` holds the command parser,
//! error enum, and `Money` value object, `domain` owns the records and the
//! ledger map, `io` is the persistence and terminal edge, and `worker`
//! dispatches each command to its handler under the active session.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
