//! # Repository Implementations
//!
//! Data access objects over the connection pool.
//!
//! The key-value schema keeps this small: one repository owns the
//! `records` table and every entity kind flows through it.

pub mod record;

pub use record::RecordRepository;
