//! In-memory adapters for the user and recipe ports.
//!
//! State lives behind `RwLock`s; a poisoned lock surfaces as a `Query` port
//! error rather than a panic.

pub mod demo;
mod recipes;
mod users;

pub use demo::{DEMO_PASSWORD, DemoData, DemoSeedError, seed_demo_data};
pub use recipes::InMemoryRecipeRepository;
pub use users::InMemoryUserRepository;
