//! # syncpart-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the participant's **content-retrieval endpoint**:
//!   `GET /content?identifier=…` → the entity's current content
//! - Map each inbound request into exactly one application service call
//!   (driving adapter)
//! - Map application results into plain-text HTTP responses with the fixed
//!   status/body contract (400 missing parameter, 404 unknown identifier,
//!   200 content verbatim)
//!
//! ## Response contract
//! Bodies are UTF-8 text, written exactly once per request. Content is
//! returned byte for byte — no trimming, no escaping, no content-type
//! negotiation. Transport failures while writing the body stay with the
//! hosting server; they are never folded into the status decision.
//!
//! ## Dependency rule
//! Depends on `syncpart-app` (for the lookup port and service) and
//! `syncpart-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
