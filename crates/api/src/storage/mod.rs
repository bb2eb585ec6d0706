//! Storage backends for accepted submissions.
//!
//! The only backend today is [`memory::MemoryStore`]. Anything durable
//! would live here too, implementing the same
//! [`securevision_core::SubmissionStore`] port.

pub mod memory;

pub use memory::MemoryStore;
