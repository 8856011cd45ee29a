use crate::models::{StationTemplate, TransactionForm};
use crate::types::{Liters, Rupiah};

use super::ReceiptBuilder;

const LABEL_WIDTH: usize = 12;
const HEADER_LABEL_WIDTH: usize = 6;

/// Lays out the receipt for `form` under the station's header and footer.
///
/// Volume and totals come from the reconciled amounts, never the raw fields.
pub fn render_receipt(station: &StationTemplate, form: &TransactionForm) -> String {
    let reconciliation = form.reconcile();
    let total = Rupiah(reconciliation.derived_total);
    let mut builder = ReceiptBuilder::new(station.columns());

    builder.center(&station.name);
    for line in station.address_lines() {
        builder.center(line);
    }

    builder
        .divider()
        .pair(&format!("{:<HEADER_LABEL_WIDTH$}: {}", "Shift", form.shift), &format!("No.Nota : {}", form.no_trans))
        .pair(&format!("{:<HEADER_LABEL_WIDTH$}: {}", "Waktu", form.date), &form.time)
        .divider()
        .labeled("Pulau/Pompa", LABEL_WIDTH, &form.island_pump)
        .labeled("Nama Produk", LABEL_WIDTH, &form.product_name)
        .labeled("Harga/Liter", LABEL_WIDTH, &format!("Rp. {}", Rupiah(form.inputs.unit_price)))
        .labeled("Volume", LABEL_WIDTH, &format!("(L) {}", Liters(reconciliation.derived_volume)))
        .labeled("Total Harga", LABEL_WIDTH, &format!("Rp. {total}"))
        .labeled("Operator", LABEL_WIDTH, &form.operator)
        .labeled("Nopol", LABEL_WIDTH, &form.nopol)
        .divider()
        .pair("Total Bayar", &format!("Rp. {total}"))
        .divider();

    for line in station.footer_lines() {
        builder.center(line);
    }

    builder.build()
}
