//! PyO3 wrapper for DashboardData
//!
//! # Example (from Python)
//!
//! ```python
//! from restaurant_synth_core_rs import Dashboard
//!
//! data = Dashboard()
//! for item in data.daily_content(2):
//!     print(item["title"])
//! print(data.cost_for_month(201, 3, 2025))
//! ```

use chrono::NaiveDate;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyList;

use super::types::{
    cost_entry_to_py, fiscal_month_to_py, scoop_item_to_py, summary_line_to_py, vendor_to_py,
};
use crate::engine::{DashboardData, EngineConfig};

/// Python wrapper for the dashboard dataset
#[pyclass(name = "Dashboard")]
pub struct PyDashboard {
    inner: DashboardData,
}

#[pymethods]
impl PyDashboard {
    /// Build the canonical dataset, or the one described by a JSON config.
    #[new]
    #[pyo3(signature = (config_json=None))]
    fn new(config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => EngineConfig::from_json(json)
                .map_err(|e| PyValueError::new_err(format!("Invalid config: {}", e)))?,
            None => EngineConfig::default(),
        };
        let inner = DashboardData::build(config)
            .map_err(|e| PyRuntimeError::new_err(format!("Failed to build dataset: {}", e)))?;
        Ok(PyDashboard { inner })
    }

    /// Today's feed, or the feed for an ISO date (`"2025-03-14"`).
    #[pyo3(signature = (store_id, date=None))]
    fn daily_content(&self, py: Python, store_id: u32, date: Option<&str>) -> PyResult<Py<PyList>> {
        let items = match date {
            Some(raw) => {
                let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|e| PyValueError::new_err(format!("Invalid date '{}': {}", raw, e)))?;
                self.inner.daily_content_on(store_id, date)
            }
            None => self.inner.daily_content(store_id),
        };

        let list = PyList::empty_bound(py);
        for item in &items {
            list.append(scoop_item_to_py(py, item)?)?;
        }
        Ok(list.unbind())
    }

    fn vendors_for_store(&self, py: Python, store_id: u32) -> PyResult<Py<PyList>> {
        let list = PyList::empty_bound(py);
        for vendor in self.inner.vendors_for_store(store_id) {
            list.append(vendor_to_py(py, vendor)?)?;
        }
        Ok(list.unbind())
    }

    fn cost_history(&self, py: Python, vendor_id: u32) -> PyResult<Py<PyList>> {
        let list = PyList::empty_bound(py);
        for entry in self.inner.cost_history(vendor_id) {
            list.append(cost_entry_to_py(py, entry)?)?;
        }
        Ok(list.unbind())
    }

    fn cost_for_month(&self, vendor_id: u32, month: u32, year: i32) -> i64 {
        self.inner.cost_for_month(vendor_id, month, year)
    }

    fn monthly_summary(&self, py: Python, store_id: u32, month: u32, year: i32) -> PyResult<Py<PyList>> {
        let list = PyList::empty_bound(py);
        for line in self.inner.monthly_summary(store_id, month, year) {
            list.append(summary_line_to_py(py, &line)?)?;
        }
        Ok(list.unbind())
    }

    fn fiscal_months(&self, py: Python) -> PyResult<Py<PyList>> {
        let list = PyList::empty_bound(py);
        for fm in self.inner.fiscal_year().months() {
            list.append(fiscal_month_to_py(py, fm)?)?;
        }
        Ok(list.unbind())
    }

    fn fingerprint(&self) -> PyResult<String> {
        self.inner
            .fingerprint()
            .map_err(|e| PyRuntimeError::new_err(format!("Fingerprint failed: {}", e)))
    }
}
