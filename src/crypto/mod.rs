//! Credential handling for the ATM
//!
//! Isolates PIN storage and verification behind a single type, with
//! optional Argon2id hashing.

pub mod credential;

pub use credential::{Credential, PinVerification};
