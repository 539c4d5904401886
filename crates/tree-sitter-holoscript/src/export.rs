//! The record a host module publishes after loading the grammar.
//!
//! Every host binding builds its exports from one [`ExportRecord`] and
//! publishes exactly the pairs yielded by [`ExportRecord::entries`]: a `name`
//! string and a `language` handle.

use crate::artifact::{self, GrammarArtifact};
use crate::handle::GrammarHandle;

/// The fixed identifier published under the `name` key.
pub const NAME: &str = "holoscript";

/// One of the two keys on a module's export surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKey {
    /// The grammar's human-readable identifier.
    Name,
    /// The wrapped grammar handle.
    Language,
}

impl ExportKey {
    /// Every key, in the order hosts publish them.
    pub const ALL: [ExportKey; 2] = [ExportKey::Name, ExportKey::Language];

    /// Returns the property name the host sees.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ExportKey::Name => "name",
            ExportKey::Language => "language",
        }
    }

    /// Looks up a key by its property name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

/// A value stored under an [`ExportKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportValue {
    /// A string, published under `name`.
    Name(&'static str),
    /// An opaque grammar reference, published under `language`.
    Language(GrammarHandle),
}

/// The fixed-shape export surface of a grammar module.
///
/// Built once by [`initialize`] and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRecord {
    name: &'static str,
    language: GrammarHandle,
}

impl ExportRecord {
    /// The grammar identifier.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The grammar handle, unchanged from the artifact accessor.
    #[must_use]
    pub fn language(&self) -> GrammarHandle {
        self.language
    }

    /// Property names present on the record.
    #[must_use]
    pub fn keys(&self) -> [&'static str; 2] {
        ExportKey::ALL.map(ExportKey::as_str)
    }

    /// Returns the value for a property name, if the record has it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<ExportValue> {
        ExportKey::from_name(key).map(|key| self.value(key))
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn value(&self, key: ExportKey) -> ExportValue {
        match key {
            ExportKey::Name => ExportValue::Name(self.name),
            ExportKey::Language => ExportValue::Language(self.language),
        }
    }

    /// Every key/value pair, in publication order.
    #[must_use]
    pub fn entries(&self) -> [(ExportKey, ExportValue); 2] {
        ExportKey::ALL.map(|key| (key, self.value(key)))
    }
}

/// Builds the export record for a grammar artifact.
///
/// The artifact's accessor is called once; its pointer is carried over as is
/// and the record is paired with [`NAME`]. Calling this again yields an equal
/// record, since the artifact's table does not move for the life of the
/// process.
#[must_use]
pub fn initialize<A: GrammarArtifact + ?Sized>(artifact: &A) -> ExportRecord {
    let language = artifact::resolve(artifact);
    tracing::debug!(name = NAME, ?language, "grammar exports initialized");

    ExportRecord {
        name: NAME,
        language,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_in_publication_order() {
        let record = initialize(&tree_sitter_json::LANGUAGE);
        assert_eq!(record.keys(), ["name", "language"]);
    }

    #[test]
    fn test_get_by_property_name() {
        let record = initialize(&tree_sitter_json::LANGUAGE);
        assert_eq!(record.get("name"), Some(ExportValue::Name(NAME)));
        assert_eq!(
            record.get("language"),
            Some(ExportValue::Language(record.language()))
        );
        assert_eq!(record.get("Language"), None);
        assert_eq!(record.get("version"), None);
    }

    #[test]
    fn test_entries_match_accessors() {
        let record = initialize(&tree_sitter_json::LANGUAGE);
        let [(name_key, name), (language_key, language)] = record.entries();
        assert_eq!(name_key, ExportKey::Name);
        assert_eq!(name, ExportValue::Name(record.name()));
        assert_eq!(language_key, ExportKey::Language);
        assert_eq!(language, ExportValue::Language(record.language()));
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in ExportKey::ALL {
            assert_eq!(ExportKey::from_name(key.as_str()), Some(key));
        }
    }
}
