//! Storefront client
//!
//! The client side of order submission: a transport gateway that posts the
//! payload to the order endpoint, and a checkout session that owns the cart
//! and contact form and drives the submit flow.

mod gateway;
mod session;

pub use gateway::*;
pub use session::*;
