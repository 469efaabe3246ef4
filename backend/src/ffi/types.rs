//! Type conversion utilities for FFI boundary
//!
//! Converts dataset types into Python dicts. Money stays in integer cents;
//! dates are ISO-8601 strings.

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::content::ScoopItem;
use crate::core::FiscalMonth;
use crate::ledger::MonthlySummaryLine;
use crate::models::{CostEntry, Vendor};

pub fn vendor_to_py(py: Python<'_>, vendor: &Vendor) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("id", vendor.id)?;
    dict.set_item("store_id", vendor.store_id)?;
    dict.set_item("category", format!("{:?}", vendor.category))?;
    dict.set_item("name", &vendor.name)?;
    Ok(dict.unbind())
}

pub fn cost_entry_to_py(py: Python<'_>, entry: &CostEntry) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("vendor_id", entry.vendor_id)?;
    dict.set_item("amount", entry.amount)?;
    dict.set_item("month", entry.month)?;
    dict.set_item("year", entry.year)?;
    dict.set_item("invoice_id", entry.invoice_id.as_deref())?;
    dict.set_item("note", entry.note.as_deref())?;
    Ok(dict.unbind())
}

pub fn summary_line_to_py(py: Python<'_>, line: &MonthlySummaryLine) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("vendor", vendor_to_py(py, &line.vendor)?)?;
    dict.set_item("amount", line.amount)?;
    dict.set_item("prior_amount", line.prior_amount)?;
    dict.set_item("change", line.change)?;
    dict.set_item("change_pct", line.change_pct)?;
    Ok(dict.unbind())
}

pub fn scoop_item_to_py(py: Python<'_>, item: &ScoopItem) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("id", &item.id)?;
    dict.set_item("type", format!("{:?}", item.kind))?;
    dict.set_item("title", &item.title)?;
    dict.set_item("body", &item.body)?;
    dict.set_item("detail", item.detail.as_deref())?;
    dict.set_item("source", item.source.as_deref())?;
    dict.set_item("display_date", item.display_date.to_string())?;
    dict.set_item("read_time_minutes", item.read_time_minutes)?;
    Ok(dict.unbind())
}

pub fn fiscal_month_to_py(py: Python<'_>, fm: &FiscalMonth) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("month", fm.month)?;
    dict.set_item("year", fm.year)?;
    dict.set_item("index", fm.index)?;
    Ok(dict.unbind())
}
