//! Outbound adapters implementing domain ports for infrastructure.
//!
//! - **memory**: in-process resource store guarded by a reader/writer lock
//!
//! Adapters are thin translators between domain types and their backing
//! representation. They contain no business logic.

pub mod memory;
