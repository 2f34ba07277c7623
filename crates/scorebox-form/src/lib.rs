//! # scorebox-form — Conditional Requirement Binding
//!
//! The score claim form asks for different things depending on what the
//! player opts into: a leaderboard entry needs a nickname, a raffle entry
//! needs contact details. Which fields are mandatory is therefore a function
//! of two checkboxes, and that rule has to hold in two places at once —
//! in the browser (toggling the `required` attribute as the player clicks)
//! and on the server (a browser cannot be trusted to enforce `required`).
//!
//! This crate is the single source of truth for that rule:
//!
//! - [`RequirementBindings`] — the trigger-to-targets configuration,
//!   passed explicitly wherever it is consumed.
//! - [`FormDocument`] / [`Binder`] — an in-memory projection of the claim
//!   page that the binder keeps synchronized, driven entirely by values so
//!   tests can construct arbitrary documents and identifier sets.
//! - [`client_script`] — renders the browser projection: a script that
//!   attaches one change listener per trigger and mirrors the same
//!   synchronization rule in the live page.
//!
//! ## Lookup failures
//!
//! Element lookups return `Option` rather than failing. A missing
//! identifier is reported (in the [`InitReport`] / [`SyncReport`] and on the
//! log) and the remaining identifiers are still processed, so one absent
//! field never silently disables the rest of the form's bindings.

pub mod binder;
pub mod bindings;
pub mod document;
pub mod script;

pub use binder::{BindError, Binder, InitReport, SyncReport};
pub use bindings::{Binding, RequirementBindings};
pub use document::{Field, FieldKind, FormDocument};
pub use script::client_script;
