//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;
use vend::DiscountType;

use vend_app::{
    context::AppContext,
    domain::{
        buyers::MockBuyersService,
        checkout::MockCheckoutService,
        inventory::MockInventoryService,
        transactions::{
            MockTransactionsService,
            models::{LineItem, Receipt, ReceiptItem, Status, Transaction},
        },
    },
};

use crate::state::State;

fn strict_buyers_mock() -> MockBuyersService {
    let mut buyers = MockBuyersService::new();

    buyers.expect_get_buyer().never();
    buyers.expect_create_buyer().never();
    buyers.expect_update_buyer().never();

    buyers
}

fn strict_inventory_mock() -> MockInventoryService {
    let mut inventory = MockInventoryService::new();

    inventory.expect_get_product().never();
    inventory.expect_create_product().never();
    inventory.expect_get_stock().never();
    inventory.expect_decrement_stock().never();

    inventory
}

fn strict_transactions_mock() -> MockTransactionsService {
    let mut transactions = MockTransactionsService::new();

    transactions.expect_record().never();
    transactions.expect_set_status().never();
    transactions.expect_list().never();
    transactions.expect_list_for_buyer().never();

    transactions
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_checkout().never();

    checkout
}

pub(crate) fn state_with_checkout(checkout: MockCheckoutService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        buyers: Arc::new(strict_buyers_mock()),
        inventory: Arc::new(strict_inventory_mock()),
        transactions: Arc::new(strict_transactions_mock()),
        checkout: Arc::new(checkout),
    }))
}

pub(crate) fn state_with_transactions(transactions: MockTransactionsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        buyers: Arc::new(strict_buyers_mock()),
        inventory: Arc::new(strict_inventory_mock()),
        transactions: Arc::new(transactions),
        checkout: Arc::new(strict_checkout_mock()),
    }))
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_checkout(checkout)))
            .push(route),
    )
}

pub(crate) fn transactions_service(
    transactions: MockTransactionsService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_transactions(transactions)))
            .push(route),
    )
}

/// A standard-rate receipt for a single ₱1,000 item.
pub(crate) fn make_receipt() -> Receipt {
    Receipt {
        buyer_name: "Ana".to_string(),
        address: "7 Bonifacio Drive".to_string(),
        timestamp: "2025-06-01 12:00:00".to_string(),
        discount_applied: false,
        discount_type: DiscountType::None,
        discount_amount: "0.00".to_string(),
        tax_amount: "120.00".to_string(),
        subtotal: "1000.00".to_string(),
        discounted_total: "1000.00".to_string(),
        final_total: "1120.00".to_string(),
        items: vec![ReceiptItem {
            name: "Aria 55 OLED".to_string(),
            brand: "Vexel".to_string(),
            color: "Black".to_string(),
            quantity: 1,
            price: "1000.00".to_string(),
            total: "1000.00".to_string(),
        }],
    }
}

/// A shipped transaction for the given buyer wrapping [`make_receipt`].
pub(crate) fn make_transaction(buyer: Uuid) -> Transaction {
    Transaction {
        uuid: Uuid::now_v7().into(),
        buyer_uuid: buyer.into(),
        order_date: Timestamp::UNIX_EPOCH,
        total_amount: Decimal::new(1120_00, 2),
        status: Status::Shipped,
        receipt: make_receipt(),
        line_items: vec![LineItem {
            product_uuid: Uuid::now_v7(),
            color: "Black".to_string(),
            quantity: 1,
        }],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
