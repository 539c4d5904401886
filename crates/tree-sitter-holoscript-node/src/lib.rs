//! Node.js bindings for the HoloScript tree-sitter grammar.
//!
//! Loading the addon sets `exports.name` to the grammar's name and
//! `exports.language` to an external wrapping the grammar table pointer,
//! which `node-tree-sitter`'s `Parser#setLanguage` unwraps after checking
//! its type tag.

use std::ptr;

use napi::{check_status, sys, Env, JsObject, JsUnknown, NapiValue, Result};
use napi_derive::module_exports;
use tree_sitter_holoscript::{initialize, ExportValue, GrammarHandle, Holoscript};

/// Type tag `node-tree-sitter` expects on language externals.
const LANGUAGE_TYPE_TAG: sys::napi_type_tag = sys::napi_type_tag {
    lower: 0x8AF2_E521_2AD5_8ABF,
    upper: 0xD500_6CAD_83AB_BA16,
};

/// Wraps the raw grammar pointer in a tagged external with no finalizer.
///
/// The external aliases the statically linked table; the JS heap never owns it.
fn language_external(env: &Env, handle: GrammarHandle) -> Result<JsUnknown> {
    let mut value = ptr::null_mut();
    // SAFETY: the environment is live for this call and the pointer is a
    // process-lifetime grammar table that the external only carries.
    unsafe {
        check_status!(sys::napi_create_external(
            env.raw(),
            handle.as_ptr().cast_mut().cast(),
            None,
            ptr::null_mut(),
            &mut value,
        ))?;
        check_status!(sys::napi_type_tag_object(
            env.raw(),
            value,
            &LANGUAGE_TYPE_TAG,
        ))?;
        Ok(JsUnknown::from_raw_unchecked(env.raw(), value))
    }
}

#[module_exports]
fn init(mut exports: JsObject, env: Env) -> Result<()> {
    let record = initialize(&Holoscript);

    for (key, value) in record.entries() {
        match value {
            ExportValue::Name(name) => {
                exports.set_named_property(key.as_str(), env.create_string(name)?)?;
            }
            ExportValue::Language(handle) => {
                exports.set_named_property(key.as_str(), language_external(&env, handle)?)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_type_tag_matches_tree_sitter() {
        assert_eq!(LANGUAGE_TYPE_TAG.lower, 0x8AF2_E521_2AD5_8ABF);
        assert_eq!(LANGUAGE_TYPE_TAG.upper, 0xD500_6CAD_83AB_BA16);
        assert_ne!(LANGUAGE_TYPE_TAG.lower, LANGUAGE_TYPE_TAG.upper);
    }
}
