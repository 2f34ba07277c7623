//! # scorebox-relay — Event Registration Relay
//!
//! Players who opt into the prize raffle at the claim kiosk are entered
//! into the event organizer's registration system. That system is not an
//! API: it is an HTML form. Submitting to it takes two steps:
//!
//! 1. GET the form page and extract the hidden one-shot submission token
//!    (`zz_id`) from its markup.
//! 2. POST the entry as `application/x-www-form-urlencoded`, using the
//!    form's exact field names, with the token attached.
//!
//! The field names, event id, and the fixed occupation/consent values are
//! the upstream form's wire contract and are kept verbatim in this crate.
//!
//! The form URL is configuration: the service runs without a relay when no
//! URL is configured (raffle submissions are then refused upstream of this
//! crate).

pub mod client;
pub mod entry;
pub mod error;

pub use client::{RelayClient, RelayConfig};
pub use entry::{Occupation, RegistrationEntry};
pub use error::RelayError;
