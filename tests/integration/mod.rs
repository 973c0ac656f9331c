//! Integration test modules for cadenza.
//!
//! - engine: stream config, block rendering, size contract
//! - mixing: summation across sources, snapshot semantics
//! - concurrency: control threads mutating a live graph
//! - store: buffer registry key allocation

pub mod concurrency;
pub mod engine;
pub mod store;
