//! Tree-sitter grammar bindings for HoloScript.
//!
//! The crate hands a compiled HoloScript grammar to whatever host loads it.
//! A host calls [`initialize`] once at module load and publishes the two
//! entries of the returned [`ExportRecord`]: the grammar [`NAME`] and an
//! opaque [`GrammarHandle`] a tree-sitter parsing engine can consume.
//!
//! Enable the `linked` feature to compile the generated parser and get the
//! `Holoscript` artifact and its `LANGUAGE` constant.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::multiple_crate_versions)]

/// Providers of compiled grammar tables.
///
/// An artifact is the one capability this crate needs from the grammar
/// compiler: a zero-argument accessor for the grammar table.
pub mod artifact;

/// The fixed-shape export record and the initialization step that builds it.
pub mod export;

/// Opaque, non-owning references to grammar tables.
pub mod handle;

/// The `tree-sitter.json` manifest shipped with the grammar.
pub mod metadata;

#[cfg(feature = "linked")]
pub use artifact::{Holoscript, LANGUAGE};
pub use artifact::GrammarArtifact;
pub use export::{initialize, ExportKey, ExportRecord, ExportValue, NAME};
pub use handle::GrammarHandle;
pub use metadata::{metadata, parse_metadata, GrammarInfo, Metadata, MetadataError};
