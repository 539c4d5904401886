//! The grammar package manifest.
//!
//! Tree-sitter grammar packages describe themselves in a `tree-sitter.json`
//! file: which grammars they contain, the file types each one claims, and
//! package-level details. This module deserializes that manifest with
//! [`facet_json`]. It never looks at the grammar's rules.

use facet::Facet;
use std::collections::HashMap;
use std::path::Path;

/// The manifest compiled into this crate.
pub const TREE_SITTER_JSON: &str = include_str!("../tree-sitter.json");

/// The contents of a `tree-sitter.json` manifest.
///
/// See <https://tree-sitter.github.io/tree-sitter/cli/init.html>
#[derive(Debug, Clone, Facet)]
pub struct Metadata {
    /// The grammars shipped by the package; the first one is the primary.
    pub grammars: Vec<GrammarInfo>,

    /// Package-level details.
    pub metadata: PackageInfo,

    /// Which language bindings the package generates, keyed by binding name.
    #[facet(default)]
    pub bindings: HashMap<String, bool>,
}

/// One grammar entry in the manifest.
#[derive(Debug, Clone, Facet)]
pub struct GrammarInfo {
    /// The grammar's name, matching the name published by its module.
    pub name: String,

    /// Name in `CamelCase`, used by generated bindings.
    #[facet(default)]
    pub camelcase: Option<String>,

    /// Human-facing title.
    #[facet(default)]
    pub title: Option<String>,

    /// `TextMate` scope (e.g. `source.holoscript`).
    pub scope: String,

    /// Grammar directory relative to the manifest.
    #[facet(default)]
    pub path: Option<String>,

    /// File extensions (without the dot) handled by this grammar.
    #[facet(rename = "file-types")]
    #[facet(default)]
    pub file_types: Vec<String>,

    /// Regex matched against language names in injections.
    #[facet(rename = "injection-regex")]
    #[facet(default)]
    pub injection_regex: Option<String>,
}

/// Package-level details from the manifest.
#[derive(Debug, Clone, Facet)]
pub struct PackageInfo {
    /// Semver version of the grammar package.
    pub version: String,

    /// SPDX license identifier.
    #[facet(default)]
    pub license: Option<String>,

    /// One-line description.
    #[facet(default)]
    pub description: Option<String>,

    /// Package authors.
    #[facet(default)]
    pub authors: Vec<Author>,

    /// Project links.
    #[facet(default)]
    pub links: Option<Links>,
}

/// A package author.
#[derive(Debug, Clone, Facet)]
pub struct Author {
    /// Display name.
    pub name: String,

    /// Contact address.
    #[facet(default)]
    pub email: Option<String>,

    /// Personal or organisation URL.
    #[facet(default)]
    pub url: Option<String>,
}

/// Project links from the manifest.
#[derive(Debug, Clone, Facet)]
pub struct Links {
    /// Source repository URL.
    pub repository: String,

    /// Project homepage.
    #[facet(default)]
    pub homepage: Option<String>,
}

/// Errors raised while reading a manifest.
#[derive(Debug)]
pub enum MetadataError {
    /// The input JSON was syntactically invalid or structurally mismatched.
    JsonParse(String),

    /// The manifest does not declare the requested grammar.
    MissingGrammar(String),
}

impl std::fmt::Display for MetadataError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MetadataError::JsonParse(e) => write!(f, "JSON parse error: {e}"),
            MetadataError::MissingGrammar(name) => {
                write!(f, "manifest declares no grammar named '{name}'")
            }
        }
    }
}

impl std::error::Error for MetadataError {}

/// Parse a `tree-sitter.json` manifest.
///
/// # Errors
///
/// Returns [`MetadataError::JsonParse`] if the string is not valid JSON or
/// does not have the manifest's shape, and [`MetadataError::MissingGrammar`]
/// if it declares no grammars at all.
pub fn parse_metadata(json: &str) -> Result<Metadata, MetadataError> {
    let metadata: Metadata =
        facet_json::from_str(json).map_err(|e| MetadataError::JsonParse(e.to_string()))?;

    if metadata.grammars.is_empty() {
        return Err(MetadataError::MissingGrammar(String::from("<primary>")));
    }

    Ok(metadata)
}

/// Parse the manifest compiled into this crate.
///
/// # Errors
///
/// Propagates [`parse_metadata`] errors; the embedded manifest is checked by
/// this crate's tests, so they indicate a packaging mistake.
pub fn metadata() -> Result<Metadata, MetadataError> {
    parse_metadata(TREE_SITTER_JSON)
}

impl Metadata {
    /// Returns the first grammar in the manifest.
    ///
    /// Always `Some` for values produced by [`parse_metadata`].
    #[must_use]
    pub fn primary(&self) -> Option<&GrammarInfo> {
        self.grammars.first()
    }

    /// Looks up a grammar by name.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::MissingGrammar`] if no grammar has that name.
    pub fn grammar(&self, name: &str) -> Result<&GrammarInfo, MetadataError> {
        self.grammars
            .iter()
            .find(|grammar| grammar.name == name)
            .ok_or_else(|| MetadataError::MissingGrammar(name.to_string()))
    }

    /// Returns the grammar that claims `path` by its extension, if any.
    #[must_use]
    pub fn grammar_for_path(&self, path: &Path) -> Option<&GrammarInfo> {
        self.grammars
            .iter()
            .find(|grammar| grammar.matches_path(path))
    }
}

impl GrammarInfo {
    /// Returns `true` if the path's extension is one of this grammar's file types.
    #[must_use]
    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.file_types.iter().any(|ty| ty == ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::NAME;

    #[test]
    fn test_embedded_manifest_names_this_grammar() {
        let metadata = metadata().unwrap();
        assert_eq!(metadata.primary().unwrap().name, NAME);
        assert_eq!(metadata.grammar(NAME).unwrap().scope, "source.holoscript");
        assert_eq!(metadata.metadata.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_matches_holoscript_file_types() {
        let metadata = metadata().unwrap();
        let grammar = metadata.primary().unwrap();
        assert!(grammar.matches_path(Path::new("scene.holo")));
        assert!(grammar.matches_path(Path::new("dir/cube.hsplus")));
        assert!(grammar.matches_path(Path::new("legacy.hs")));
        assert!(!grammar.matches_path(Path::new("scene.json")));
        assert!(!grammar.matches_path(Path::new("holo")));
        assert!(metadata.grammar_for_path(Path::new("a.holo")).is_some());
        assert!(metadata.grammar_for_path(Path::new("a.rs")).is_none());
    }

    #[test]
    fn test_parse_minimal_manifest() {
        let json = r#"{
            "grammars": [
                {
                    "name": "test",
                    "scope": "source.test",
                    "file-types": ["tst"]
                }
            ],
            "metadata": {
                "version": "1.2.3"
            }
        }"#;

        let metadata = parse_metadata(json).unwrap();
        let grammar = metadata.primary().unwrap();
        assert_eq!(grammar.name, "test");
        assert_eq!(grammar.file_types, vec!["tst".to_string()]);
        assert!(grammar.injection_regex.is_none());
        assert!(metadata.bindings.is_empty());
        assert!(metadata.metadata.authors.is_empty());
    }

    #[test]
    fn test_rejects_manifest_without_grammars() {
        let json = r#"{ "grammars": [], "metadata": { "version": "0.1.0" } }"#;
        assert!(matches!(
            parse_metadata(json),
            Err(MetadataError::MissingGrammar(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = parse_metadata("{ \"grammars\": ").unwrap_err();
        assert!(matches!(err, MetadataError::JsonParse(_)));
        assert!(err.to_string().starts_with("JSON parse error"));
    }

    #[test]
    fn test_unknown_grammar_is_an_error() {
        let metadata = metadata().unwrap();
        let err = metadata.grammar("javascript").unwrap_err();
        assert_eq!(
            err.to_string(),
            "manifest declares no grammar named 'javascript'"
        );
    }
}
