//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the use-case oriented catalog access contract.
//! - Isolate catalog-file details from service/business orchestration.
//!
//! # Invariants
//! - Repository mutations keep the backing file synchronized with memory
//!   after every successful operation (whole-file rewrite).
//! - Expected domain outcomes (duplicate key, not found, persist failure)
//!   are reported as `bool` results, never as raised faults.

pub mod book_repo;
