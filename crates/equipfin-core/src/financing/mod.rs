//! Leasing (annuity) and 0% installment financing.
//!
//! `amortization` and `installment` are the pure engines; `quote` layers the
//! storefront's defaults, input warnings and display labels on top of them.

pub mod amortization;
pub mod installment;
pub mod quote;
