//! Python bindings for the HoloScript tree-sitter grammar.
//!
//! Importing `tree_sitter_holoscript._binding` publishes the grammar's export
//! record as module attributes: `name` is a `str` and `language` is a
//! `PyCapsule` named `tree_sitter.Language`, the form `py-tree-sitter`'s
//! `Language` constructor accepts.

use std::ffi::CStr;

use pyo3::prelude::*;
use tree_sitter_holoscript::{initialize, ExportValue, GrammarHandle, Holoscript};

/// Capsule name `py-tree-sitter` checks before reading the pointer.
const LANGUAGE_CAPSULE: &CStr = c"tree_sitter.Language";

/// Wraps the raw grammar pointer in a capsule without a destructor.
///
/// The capsule aliases the statically linked table; Python never owns it.
fn language_capsule(py: Python<'_>, handle: GrammarHandle) -> PyResult<Bound<'_, PyAny>> {
    // SAFETY: the pointer is a process-lifetime grammar table that the capsule
    // only carries, and the capsule name is a static C string.
    unsafe {
        let capsule = pyo3::ffi::PyCapsule_New(
            handle.as_ptr().cast_mut().cast(),
            LANGUAGE_CAPSULE.as_ptr(),
            None,
        );
        Bound::from_owned_ptr_or_err(py, capsule)
    }
}

#[pymodule]
#[pyo3(name = "_binding")]
fn holoscript_binding(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let record = initialize(&Holoscript);

    for (key, value) in record.entries() {
        match value {
            ExportValue::Name(name) => m.add(key.as_str(), name)?,
            ExportValue::Language(handle) => {
                m.add(key.as_str(), language_capsule(m.py(), handle)?)?;
            }
        }
    }

    Ok(())
}
