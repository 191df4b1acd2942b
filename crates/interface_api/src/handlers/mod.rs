//! Request handlers

pub mod health;
pub mod races;
pub mod participants;
pub mod weather;
