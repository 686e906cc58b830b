//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **crypto**: Argon2id password hashing.
//!
//! Adapters translate between domain types and infrastructure representations
//! and contain no business rules.

pub mod crypto;
pub mod persistence;
