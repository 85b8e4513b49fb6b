//! # parcial
//!
//! Core logic for a terminal cut-grade helper: given the first two cut
//! grades of a three-cut course, compute the minimum final-cut grade that
//! reaches the passing average. The document model, input guard, and
//! calculator are pure given string inputs; all terminal binding lives in
//! the binary.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// The decorative background symbol field and its simulated timeline
pub mod ambient;
/// Validating the two cut grades and computing the required final grade
pub mod calc;
/// Environment-driven presentation and playback configuration
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// The in-memory host document the components read and mutate
pub mod document;
/// Keeping field text close to a valid decimal while the user types
pub mod guard;
/// A JSON description of the tool's fixed contract
pub mod info;
/// The interactive terminal session
pub mod session;
