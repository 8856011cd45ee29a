mod monetary;

pub use monetary::{non_negative, parse_amount, Liters, Rupiah};

pub type TemplateId = String;
pub type TransactionNumber = String;
