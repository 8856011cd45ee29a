mod errors;
mod station;
mod transaction;

pub use errors::TemplateError;
pub use station::{generate_template_id, StationTemplate, DEFAULT_RECEIPT_WIDTH};
pub use transaction::{
    format_date, format_time, AmountField, FieldView, FormEdit, FormField, TransactionForm, TransactionInputs
};
