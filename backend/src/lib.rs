//! SanjiBook account and recipe core.
//!
//! The domain validates account forms, authenticates users and manages the
//! recipe collection; outbound adapters provide hashing and storage.

pub mod config;
pub mod domain;
pub mod outbound;
