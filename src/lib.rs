//! Offline campus map companion — spot annotations, events, photo galleries,
//! and a keyword chat assistant.
//!
//! All state is held by a single process and persisted to named JSON "slots"
//! in a local SQLite database; there is no server, no multi-user sync, and no
//! authentication. The frontend (map rendering, panels, forms) sits behind
//! the [`markers::presenter::Presenter`] and [`app::View`] traits; the
//! shipped binary provides a thin terminal rendition.
//!
//! # Architecture
//!
//! - **Storage**: SQLite holding three slots — `campusMarkers` (the marker
//!   list), `campusEvents` (the event list), `campusChat` (the rendered
//!   chat transcript, stored verbatim)
//! - **Markers**: ordered in-memory list mirrored to its slot on every
//!   create/remove; ids are UUID v7
//! - **Chat**: keyword matching — first containment match over a fixed
//!   question→answer table, in table order
//! - **Dispatch**: every user interaction is an [`app::Command`] handled by
//!   one synchronous entry point
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite slot store: initialization, schema, migrations
//! - [`markers`] — Marker lifecycle: create, remove, list, persist, restore
//! - [`events`] — Campus event log with positional deletion
//! - [`gallery`] — Fixed photo sets for named spots
//! - [`chat`] — Keyword responder and the persisted transcript
//! - [`app`] — Application state and command dispatch

pub mod app;
pub mod chat;
pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod gallery;
pub mod markers;
