//! Vend
//!
//! Vend is the pricing engine for the gadget storefront: VAT and
//! senior-citizen/PWD discount computation over a VAT-inclusive cart
//! subtotal, plus the eligibility rules that feed it. Pure computation
//! only; persistence and orchestration live in `vend-app`.

pub mod eligibility;
pub mod pricing;

pub use eligibility::{DiscountType, Eligibility};
pub use pricing::Totals;
