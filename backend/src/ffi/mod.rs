//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the dashboard dataset to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only the dashboard queries are exposed
//! 2. **Simple types**: Primitives, strings, dicts and lists at the boundary
//! 3. **Safe errors**: Rust errors become Python exceptions
//! 4. **No references**: Python gets copies, never references to Rust state

pub mod dashboard;
pub mod types;
