//! Stay Engine for hotel room bookings
//!
//! This crate prices and validates hotel stays: it turns check-in/check-out
//! dates, a guest count and a room's price and capacity into a night count,
//! a total and a validity verdict, and assembles booking records from them.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
