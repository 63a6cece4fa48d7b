//! Checkout service.
//!
//! Sequences one purchase: precondition checks, authoritative totals, the
//! transaction append and the per-line stock decrements. The append and the
//! decrements share a single database transaction, so a crash mid-checkout
//! can never strand a recorded sale with half-applied inventory.

use async_trait::async_trait;
use jiff::Zoned;
use mockall::automock;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};
use vend::{Eligibility, pricing::compute_totals};

use crate::{
    database::Db,
    domain::{
        buyers::repository::PgBuyersRepository,
        checkout::{
            errors::CheckoutError,
            models::{CartLine, CheckoutOrder, CompletedCheckout},
            receipt::{build_receipt, frozen_line_items},
        },
        inventory::repository::PgInventoryRepository,
        transactions::{
            models::{NewTransaction, Status, TransactionUuid},
            repository::PgTransactionsRepository,
        },
    },
};

/// Tolerance before a client-claimed total is logged as out of step with
/// the recomputed subtotal.
const CLAIM_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

#[derive(Debug, Clone)]
pub struct PgCheckoutService {
    db: Db,
    buyers: PgBuyersRepository,
    inventory: PgInventoryRepository,
    transactions: PgTransactionsRepository,
}

impl PgCheckoutService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            buyers: PgBuyersRepository::new(),
            inventory: PgInventoryRepository::new(),
            transactions: PgTransactionsRepository::new(),
        }
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    async fn checkout(&self, order: CheckoutOrder) -> Result<CompletedCheckout, CheckoutError> {
        let mut tx = self.db.begin().await?;

        let buyer = self.buyers.get_buyer(&mut tx, order.buyer).await?;

        if !buyer.has_shipping_address() {
            return Err(CheckoutError::AddressRequired);
        }

        if order.lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let subtotal: Decimal = order.lines.iter().map(CartLine::line_total).sum();

        if (subtotal - order.claimed_total).abs() > CLAIM_TOLERANCE {
            warn!(
                buyer = %buyer.uuid,
                claimed = %order.claimed_total,
                computed = %subtotal,
                "client-claimed total disagrees with cart lines; billing the computed subtotal"
            );
        }

        let now = Zoned::now();
        let eligibility = Eligibility::assess(buyer.birthday, buyer.is_pwd, now.date());
        let totals = compute_totals(subtotal, eligibility);

        let new = NewTransaction {
            uuid: TransactionUuid::new(),
            buyer_uuid: buyer.uuid,
            order_date: now.timestamp(),
            total_amount: totals
                .final_total
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            status: Status::Shipped,
            receipt: build_receipt(&buyer, &order.lines, &totals, &now),
            line_items: frozen_line_items(&order.lines),
        };

        let recorded = self.transactions.record(&mut tx, &new).await?;

        for line in &order.lines {
            let decremented = self
                .inventory
                .decrement_stock(&mut tx, line.product, line.color_label(), line.quantity)
                .await?;

            match decremented {
                Some(new_stock) => {
                    debug!(product = %line.product, color = line.color_label(), new_stock, "stock decremented");
                }
                // Sale wins: a variant that vanished from the catalog does not
                // undo the recorded purchase.
                None => {
                    warn!(
                        product = %line.product,
                        color = line.color_label(),
                        "no matching colour variant; stock not decremented"
                    );
                }
            }
        }

        tx.commit().await?;

        Ok(CompletedCheckout {
            transaction: recorded.uuid,
            receipt: recorded.receipt,
        })
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Run one purchase to completion.
    ///
    /// Precondition failures (`BuyerNotFound`, `AddressRequired`,
    /// `EmptyCart`) abort before any write. A storage failure rolls the
    /// whole purchase back. A cart line whose product/colour no longer
    /// exists is skipped with a warning and the sale stands.
    async fn checkout(&self, order: CheckoutOrder) -> Result<CompletedCheckout, CheckoutError>;
}
