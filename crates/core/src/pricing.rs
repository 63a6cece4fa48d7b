//! Checkout totals
//!
//! Computes the money fields of a purchase from a VAT-inclusive subtotal
//! and the buyer's discount standing. The quoted subtotal already carries
//! the 12% VAT; a discount-eligible buyer pays the VAT-exempt amount less
//! a further 20%, while everyone else pays the subtotal plus 12% tax on
//! top.
//!
//! All intermediate arithmetic stays at full [`Decimal`] precision;
//! rounding to two decimal places happens only when an amount is
//! formatted for a receipt or stored.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::eligibility::{DiscountType, Eligibility};

/// VAT multiplier: a quoted subtotal is `net * 1.12`.
pub const VAT_RATE: Decimal = Decimal::from_parts(112, 0, 0, false, 2);

/// VAT fraction applied on top of a non-discounted sale.
pub const VAT_FRACTION: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Discount fraction applied to the VAT-exempt amount.
pub const DISCOUNT_FRACTION: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// The computed money fields of one purchase.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Totals {
    /// The VAT-inclusive subtotal the computation started from.
    pub subtotal: Decimal,

    /// Whether the senior/PWD discount was applied.
    pub discount_applied: bool,

    /// Receipt label for the discount.
    pub discount_type: DiscountType,

    /// Amount removed by the discount; zero when not eligible.
    pub discount_amount: Decimal,

    /// VAT charged; zero for discounted (VAT-exempt) sales.
    pub tax_amount: Decimal,

    /// Subtotal after discount; equals `subtotal` when not eligible.
    pub discounted_total: Decimal,

    /// Amount the buyer pays.
    pub final_total: Decimal,
}

/// Compute totals from a VAT-inclusive subtotal and the buyer's standing.
///
/// Eligible: the sale becomes VAT-exempt (`subtotal / 1.12`) and is
/// discounted by 20% of that amount; no tax. Not eligible: 12% tax is
/// added on top of the subtotal. Pure and deterministic.
#[must_use]
pub fn compute_totals(subtotal: Decimal, eligibility: Eligibility) -> Totals {
    let vat_exempt_sale = subtotal / VAT_RATE;

    if eligibility.is_eligible() {
        let discount_amount = vat_exempt_sale * DISCOUNT_FRACTION;
        let discounted_total = vat_exempt_sale - discount_amount;

        Totals {
            subtotal,
            discount_applied: true,
            discount_type: eligibility.discount_type(),
            discount_amount,
            tax_amount: Decimal::ZERO,
            discounted_total,
            final_total: discounted_total,
        }
    } else {
        let tax_amount = subtotal * VAT_FRACTION;

        Totals {
            subtotal,
            discount_applied: false,
            discount_type: DiscountType::None,
            discount_amount: Decimal::ZERO,
            tax_amount,
            discounted_total: subtotal,
            final_total: subtotal + tax_amount,
        }
    }
}

/// Format an amount as a two-decimal money string, e.g. `"1120.00"`.
///
/// Midpoints round away from zero, matching how the receipts have always
/// been printed.
#[must_use]
pub fn money_string(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
