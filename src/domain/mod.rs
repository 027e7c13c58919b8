//! Checkout domain types and the ports the flow controller depends on.

pub mod card;
pub mod payment;
pub mod ports;
