//! Application layer containing the checkout flow orchestration.
//!
//! This module defines the `CheckoutController`, which owns the form and view
//! state and sequences tokenization, payment submission and status refresh.

pub mod checkout;
