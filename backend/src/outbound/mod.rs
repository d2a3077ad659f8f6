//! Outbound adapters implementing domain ports.
//!
//! - **argon2_hasher**: Argon2id password hashing
//! - **memory**: in-memory user and recipe stores, plus the demo seed data
//!
//! Adapters translate between domain types and their storage representation.
//! They contain no business logic.

mod argon2_hasher;
pub mod memory;

pub use argon2_hasher::Argon2PasswordHasher;
