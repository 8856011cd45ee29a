use chrono::{DateTime, Local};
use rand::Rng;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::reconcile::{evaluate, Reconciliation};
use crate::types::{non_negative, parse_amount, Liters, TransactionNumber};

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H : %M";

/// The three amounts the reconciliation works on.
///
/// This is transient form state: it lives as long as the form that owns it and
/// is never persisted.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TransactionInputs {
    pub unit_price: Decimal,
    pub volume: Decimal,
    pub cash_amount: Decimal
}

/// Amount fields that go through the edit policy.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AmountField {
    UnitPrice,
    Volume,
    CashAmount
}

/// What a form field shows and whether the user may type into it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FieldView {
    pub value: String,
    pub editable: bool
}

impl TransactionInputs {
    pub fn new(unit_price: Decimal, volume: Decimal, cash_amount: Decimal) -> Self {
        Self {
            unit_price: non_negative(unit_price),
            volume: non_negative(volume),
            cash_amount: non_negative(cash_amount)
        }
    }

    pub fn reconcile(&self) -> Reconciliation {
        evaluate(self.unit_price, self.volume, self.cash_amount)
    }

    /// Stores a user edit.
    ///
    /// Editing the volume by hand hands control back from the cash amount: a
    /// positive cash amount is cleared, otherwise it would keep deriving the
    /// volume and the edit would have no visible effect.
    pub fn edit(&mut self, field: AmountField, value: Decimal) {
        let value = non_negative(value);

        match field {
            AmountField::UnitPrice => self.unit_price = value,
            AmountField::CashAmount => self.cash_amount = value,
            AmountField::Volume => {
                self.volume = value;

                if self.cash_amount > Decimal::ZERO {
                    debug!("Volume edited by hand, clearing cash amount [{}]", self.cash_amount);
                    self.cash_amount = Decimal::ZERO;
                }
            }
        }
    }

    pub fn volume_field(&self) -> FieldView {
        let reconciliation = self.reconcile();

        if reconciliation.volume_is_derived {
            return FieldView {
                value: Liters(reconciliation.derived_volume).to_string(),
                editable: false
            };
        }

        let value = if self.volume.is_zero() { String::new() } else { self.volume.normalize().to_string() };

        FieldView { value, editable: true }
    }
}

/// Every field of the receipt form that an edit record can target.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Shift,
    NoTrans,
    Date,
    Time,
    IslandPump,
    ProductName,
    PricePerLiter,
    Volume,
    CashAmount,
    Operator,
    Nopol,
    RefreshTime
}

/// A single keystroke-level change to the form, one row of an edit stream.
#[derive(Debug, Clone, Deserialize)]
pub struct FormEdit {
    pub field: FormField,
    #[serde(default)]
    pub value: String
}

impl FormEdit {
    pub fn new(field: FormField, value: &str) -> Self {
        Self { field, value: value.to_string() }
    }
}

/// The full transaction form behind one receipt.
#[derive(Debug, Clone)]
pub struct TransactionForm {
    pub shift: String,
    pub no_trans: TransactionNumber,
    pub date: String,
    pub time: String,
    pub island_pump: String,
    pub product_name: String,
    pub operator: String,
    pub nopol: String,
    pub inputs: TransactionInputs
}

impl Default for TransactionForm {
    fn default() -> Self {
        let now = Local::now();

        Self {
            shift: "1".to_string(),
            no_trans: random_transaction_number(),
            date: format_date(&now),
            time: format_time(&now),
            island_pump: "1".to_string(),
            product_name: "Pertalite".to_string(),
            operator: "Admin".to_string(),
            nopol: "DR 1234 XY".to_string(),
            inputs: TransactionInputs::new(Decimal::from(10_000), Decimal::from(10), Decimal::from(100_000))
        }
    }
}

impl TransactionForm {
    /// Applies one edit to the form.
    ///
    /// Text fields are stored as typed. Amount fields are coerced and routed
    /// through [`TransactionInputs::edit`].
    pub fn apply(&mut self, edit: &FormEdit) {
        let value = edit.value.clone();

        match edit.field {
            FormField::Shift => self.shift = value,
            FormField::NoTrans => self.no_trans = value,
            FormField::Date => self.date = value,
            FormField::Time => self.time = value,
            FormField::IslandPump => self.island_pump = value,
            FormField::ProductName => self.product_name = value,
            FormField::Operator => self.operator = value,
            FormField::Nopol => self.nopol = value,
            FormField::PricePerLiter => self.inputs.edit(AmountField::UnitPrice, parse_amount(&value)),
            FormField::Volume => self.inputs.edit(AmountField::Volume, parse_amount(&value)),
            FormField::CashAmount => self.inputs.edit(AmountField::CashAmount, parse_amount(&value)),
            FormField::RefreshTime => self.refresh_time(&Local::now())
        }
    }

    pub fn refresh_time(&mut self, now: &DateTime<Local>) {
        self.date = format_date(now);
        self.time = format_time(now);
    }

    pub fn reconcile(&self) -> Reconciliation {
        self.inputs.reconcile()
    }

    /// File name an exported receipt is saved under.
    ///
    /// The transaction number and plate are free text, so anything that is not
    /// allowed in a single path component becomes `_`.
    pub fn export_file_name(&self, extension: &str) -> String {
        format!("Nota-{}-{}.{}", file_name_safe(&self.no_trans), file_name_safe(&self.nopol), extension)
    }
}

fn file_name_safe(value: &str) -> String {
    value.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c
        })
        .collect()
}

fn random_transaction_number() -> TransactionNumber {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

pub fn format_date(moment: &DateTime<Local>) -> String {
    moment.format(DATE_FORMAT).to_string()
}

pub fn format_time(moment: &DateTime<Local>) -> String {
    moment.format(TIME_FORMAT).to_string()
}
