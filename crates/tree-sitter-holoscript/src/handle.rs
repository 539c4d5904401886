//! The opaque reference to a compiled grammar.
//!
//! A [`GrammarHandle`] aliases the `TSLanguage` table that the grammar
//! artifact owns for the lifetime of the process. The handle is never
//! dereferenced and never freed here; it only carries the pointer bits from
//! the artifact accessor to whichever host publishes them.

use std::fmt;

use tree_sitter_language::LanguageFn;

/// A non-owning, immutable reference to a compiled grammar table.
///
/// The bits are exactly those returned by the artifact accessor. Copying a
/// handle copies the alias, never the table.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrammarHandle(*const ());

// SAFETY: the pointee is a static, fully constructed table that nothing in
// this crate reads or writes, so sharing the alias across threads is sound.
#[allow(unsafe_code)]
unsafe impl Send for GrammarHandle {}

// SAFETY: see `Send`.
#[allow(unsafe_code)]
unsafe impl Sync for GrammarHandle {}

impl GrammarHandle {
    /// Calls the grammar accessor once and keeps the pointer it returns.
    #[must_use]
    pub fn from_language_fn(language: LanguageFn) -> Self {
        let accessor = language.into_raw();
        // SAFETY: `LanguageFn::from_raw` already requires the wrapped function
        // to be a zero-argument tree-sitter accessor that is always callable.
        #[allow(unsafe_code)]
        let raw = unsafe { accessor() };
        Self(raw)
    }

    /// Returns the raw pointer without interpreting it.
    #[must_use]
    pub fn as_ptr(self) -> *const () {
        self.0
    }

    /// Returns the pointer as an address, e.g. for diagnostics.
    #[must_use]
    pub fn addr(self) -> usize {
        self.0 as usize
    }

    /// Returns `true` if the accessor handed back a null pointer.
    ///
    /// A linked tree-sitter grammar never does.
    #[must_use]
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

impl fmt::Debug for GrammarHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GrammarHandle({:#x})", self.addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: u8 = 0;

    extern "C" fn table_accessor() -> *const () {
        std::ptr::from_ref(&TABLE).cast()
    }

    #[allow(unsafe_code)]
    const TABLE_FN: LanguageFn = unsafe { LanguageFn::from_raw(table_accessor) };

    #[test]
    fn test_preserves_accessor_bits() {
        let handle = GrammarHandle::from_language_fn(TABLE_FN);
        assert_eq!(handle.as_ptr(), table_accessor());
        assert!(!handle.is_null());
    }

    #[test]
    fn test_copies_alias_the_same_table() {
        let first = GrammarHandle::from_language_fn(TABLE_FN);
        let second = first;
        assert_eq!(first, second);
        assert_eq!(first.addr(), second.addr());
    }

    #[test]
    fn test_debug_shows_hex_address() {
        let handle = GrammarHandle::from_language_fn(TABLE_FN);
        assert_eq!(
            format!("{handle:?}"),
            format!("GrammarHandle({:#x})", handle.addr())
        );
    }

    #[test]
    fn test_is_thread_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GrammarHandle>();
    }
}
