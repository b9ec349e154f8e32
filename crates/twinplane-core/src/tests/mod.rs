//! End-to-end tests over whole matches.
//!
//! - `determinism.rs`: identical event streams give identical matches
//! - `integration.rs`: full frames through input, update, resolution and
//!   round flow
//! - `helpers.rs`: match setup and scripted input

mod helpers;
mod integration;

pub use helpers::*;
