//! Stripe Connect integration

mod client;

pub use client::StripeClient;
