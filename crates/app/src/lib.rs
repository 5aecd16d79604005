//! # syncpart-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`ContentLookup` port** that integrators implement
//!   (driven/outbound port): `retrieve_content(identifier) → content | absent`
//! - Provide the [`ContentLookupDelegator`](ports::ContentLookupDelegator),
//!   a zero-behavior forwarding adapter for integrators whose lookup object
//!   lives in an unrelated ownership structure
//! - Define the **`ContentService`** use-case (driving/inbound port):
//!   resolve one identifier to content, turning an absent lookup result
//!   into a not-found outcome
//!
//! ## Dependency rule
//! Depends on `syncpart-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
