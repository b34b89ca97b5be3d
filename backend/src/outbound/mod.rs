//! Outbound adapters implementing the driven repository ports.
//!
//! - **persistence**: PostgreSQL repositories on Diesel and bb8.
//! - **memory**: a mutex-guarded in-process store with the same semantics,
//!   used when no database is configured.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
