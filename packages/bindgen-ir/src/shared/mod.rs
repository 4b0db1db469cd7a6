//! Shared models used across features
//!
//! The declaration model is the contract with the C front end: it arrives
//! fully resolved (typedefs carry their canonical type, annotations are
//! typed) and is never mutated afterwards.

pub mod models;
