//! Use-case services over the repository layer.
//!
//! # Responsibility
//! - Provide the stable entry points presentation callers talk to.
//!
//! # Invariants
//! - Services never bypass repository persistence contracts.
//! - The service layer stays storage-agnostic.

pub mod inventory_service;
