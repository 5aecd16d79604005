//! # syncpart-domain
//!
//! Pure domain model for the syncpart content-retrieval participant.
//!
//! ## Responsibilities
//! - Foundational types: the opaque [`EntityIdentifier`](id::EntityIdentifier)
//!   naming one entity in the participant's data set, and the opaque
//!   [`Content`](content::Content) payload carrying its current state
//! - Error conventions shared by every layer: client-input validation,
//!   not-found outcomes, and collaborator lookup failures
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod content;
pub mod error;
pub mod id;
