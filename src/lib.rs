//! State management for the Stellar Burgers storefront.
//!
//! The heart of the crate is the burger constructor slice
//! ([`constructor`]): a pure reducer over the burger being assembled and the
//! status of the last order. Peer slices cache the ingredient catalog, the
//! user session and the public order feed. The [`store`] composes them, and
//! [`order`] / [`ingredients`] drive external requests through their
//! lifecycle events.

pub mod config;
pub mod constructor;
pub mod domain;
pub mod feed;
pub mod ingredients;
pub mod logging;
pub mod mvi;
pub mod order;
pub mod scenario;
pub mod store;
pub mod user;
