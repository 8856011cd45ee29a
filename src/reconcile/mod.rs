//! Price, volume and total reconciliation for a single fuel sale.

mod engine;

pub use engine::{evaluate, Reconciliation};
