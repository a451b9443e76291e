// Shared types and the scheduler contract, kept apart from the implementations.
pub mod common;
pub mod scheduler;
