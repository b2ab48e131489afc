//! PyO3 wrapper for Xoshiro256StarStar

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::rng::Xoshiro256StarStar;

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from xoshiro_core_rs import Xoshiro256
///
/// rng = Xoshiro256([0x012de1babb3c4104, 0xa5a818b8fc5aa503,
///                   0xb124ea2b701f4993, 0x18e0374933d8c782])
/// assert rng.next_u64() == 0x462c422df780c48e
/// data = rng.next_bytes(16)
/// ```
#[pyclass(name = "Xoshiro256")]
pub struct PyXoshiro256 {
    inner: Xoshiro256StarStar,
}

#[pymethods]
impl PyXoshiro256 {
    /// Create a generator from exactly four seed words
    ///
    /// Raises ValueError for any other number of words.
    #[new]
    fn new(seed: Vec<u64>) -> PyResult<Self> {
        let inner = Xoshiro256StarStar::from_seed_words(&seed)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn next_u16(&mut self) -> u16 {
        self.inner.next_u16()
    }

    fn next_bool(&mut self) -> bool {
        self.inner.next_bool()
    }

    fn next_i32(&mut self) -> i32 {
        self.inner.next_i32()
    }

    fn next_i64(&mut self) -> i64 {
        self.inner.next_i64()
    }

    fn next_f32(&mut self) -> f32 {
        self.inner.next_f32()
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.next_f64()
    }

    fn next_bytes<'py>(&mut self, py: Python<'py>, length: usize) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, &self.inner.next_bytes(length))
    }

    /// Current 4-word state; does not advance the generator
    fn get_state(&self) -> [u64; 4] {
        self.inner.get_state()
    }

    fn __repr__(&self) -> String {
        let [s0, s1, s2, s3] = self.inner.get_state();
        format!(
            "Xoshiro256(state=[0x{:016x}, 0x{:016x}, 0x{:016x}, 0x{:016x}])",
            s0, s1, s2, s3
        )
    }
}
