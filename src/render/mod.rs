//! Fixed-width text layout of a fuel receipt.
//!
//! Rasterizing the receipt to an image and sending it to a printer happen
//! outside this crate; the text produced here is the preview they work from.

mod builder;
mod receipt;

pub use builder::ReceiptBuilder;
pub use receipt::render_receipt;
