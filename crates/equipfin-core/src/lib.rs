pub mod config;
pub mod error;
pub mod financing;
pub mod format;
pub mod time_value;
pub mod types;

pub use config::FinancingConfig;
pub use error::FinanceError;
pub use financing::amortization::{compute_annuity, AmortizationResult, LoanTerms, PaymentPeriod};
pub use financing::installment::{compute_equal_installment, FlatPeriod, FlatScheduleResult};
pub use financing::quote::{
    quote_installment, quote_leasing, InstallmentQuoteInput, LeasingQuoteInput,
};
pub use types::*;

/// Standard result type for all equipfin operations
pub type FinanceResult<T> = Result<T, FinanceError>;
