//! artscout
//!
//! Terminal browser for the Artsy artist catalog: search artists, select
//! a result, read its details.
//!
//! Follows a Pure Core / Impure Shell split. `model` and `state` hold the
//! supersession logic and never perform I/O; `catalog`, `app` and `view`
//! are the shell that talks HTTP, spawns tasks and owns the terminal.

pub mod app;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
