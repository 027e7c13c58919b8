//! Adapters to the outside world: the payment backend and the card vendor.

pub mod backend;
pub mod wompi;
