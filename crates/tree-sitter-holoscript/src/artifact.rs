//! Where grammar handles come from.
//!
//! A grammar artifact is anything that can hand out the zero-argument
//! tree-sitter accessor for a compiled grammar: the statically linked
//! HoloScript parser, another grammar crate's `LANGUAGE` constant, or a
//! table produced at build time. Whether the artifact links is decided before
//! any of this code runs.

use tree_sitter_language::LanguageFn;

use crate::handle::GrammarHandle;

/// A provider of a compiled grammar's accessor function.
pub trait GrammarArtifact {
    /// Returns the accessor for the grammar table this artifact owns.
    fn language_fn(&self) -> LanguageFn;
}

impl GrammarArtifact for LanguageFn {
    fn language_fn(&self) -> LanguageFn {
        *self
    }
}

/// Resolves the handle an artifact provides.
pub(crate) fn resolve<A: GrammarArtifact + ?Sized>(artifact: &A) -> GrammarHandle {
    GrammarHandle::from_language_fn(artifact.language_fn())
}

#[cfg(feature = "linked")]
mod linked {
    use tree_sitter_language::LanguageFn;

    use super::GrammarArtifact;

    #[allow(unsafe_code)]
    unsafe extern "C" {
        fn tree_sitter_holoscript() -> *const ();
    }

    /// The tree-sitter [`LanguageFn`] for the HoloScript grammar.
    ///
    /// ```
    /// let language = tree_sitter_holoscript::LANGUAGE;
    /// let mut parser = tree_sitter::Parser::new();
    /// parser
    ///     .set_language(&language.into())
    ///     .expect("Error loading HoloScript parser");
    /// ```
    #[allow(unsafe_code)]
    pub const LANGUAGE: LanguageFn = unsafe { LanguageFn::from_raw(tree_sitter_holoscript) };

    /// The statically linked HoloScript grammar.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Holoscript;

    impl GrammarArtifact for Holoscript {
        fn language_fn(&self) -> LanguageFn {
            LANGUAGE
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_can_load_grammar() {
            let mut parser = tree_sitter::Parser::new();
            parser
                .set_language(&LANGUAGE.into())
                .expect("Error loading HoloScript parser");
        }
    }
}

#[cfg(feature = "linked")]
#[cfg_attr(docsrs, doc(cfg(feature = "linked")))]
pub use linked::{Holoscript, LANGUAGE};
