//! Lump-sum versus installment purchase decisions

mod advisor;

pub use advisor::{
    advise_installment, present_value_of_installments, InstallmentDecision, InstallmentStrategy,
    PaymentChoice,
};
