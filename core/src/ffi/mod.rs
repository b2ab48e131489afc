//! Python bindings (feature `pyo3`)
//!
//! The FFI boundary is minimal: one class wrapping the generator, with
//! seed errors surfaced as `ValueError`.

pub mod generator;
