//! Fuel station receipt generator.
//!
//! Reconciles price, volume and cash amount for a fuel sale, keeps station
//! receipt templates, and lays the receipt out as fixed-width text.

pub mod actors;
pub mod config;
pub mod engine;
pub mod generator;
pub mod models;
pub mod reconcile;
pub mod render;
pub mod storage;
pub mod types;
