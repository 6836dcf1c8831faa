//! The ordered prefix table used to expand CURIEs and to compact IRIs when
//! writing Turtle.

use crate::consts::DEFAULT_PREFIXES;
use anyhow::{anyhow, Result};
use log::info;
use oxigraph::model::NamedNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTable {
    bindings: Vec<(String, String)>,
}

impl Default for NamespaceTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl NamespaceTable {
    /// An empty table with no bindings, not even the default prefix.
    pub fn empty() -> Self {
        Self { bindings: vec![] }
    }

    /// The built-in vocabulary bindings, with the project namespace bound both
    /// as `utr` and as the empty prefix.
    pub fn with_defaults() -> Self {
        let bindings = DEFAULT_PREFIXES
            .iter()
            .map(|(prefix, iri)| (prefix.to_string(), iri.to_string()))
            .collect();
        Self { bindings }
    }

    /// Binds `prefix` to `iri`. Rebinding an existing prefix replaces its IRI
    /// but keeps its position in the table.
    pub fn bind(&mut self, prefix: &str, iri: &str) -> Result<()> {
        if prefix.contains(':') {
            return Err(anyhow!("Invalid prefix '{}': must not contain ':'", prefix));
        }
        NamedNode::new(iri).map_err(|e| anyhow!("Invalid namespace IRI '{}': {}", iri, e))?;
        if let Some(existing) = self.bindings.iter_mut().find(|(p, _)| p == prefix) {
            info!("Rebinding prefix '{}' from {} to {}", prefix, existing.1, iri);
            existing.1 = iri.to_string();
        } else {
            self.bindings.push((prefix.to_string(), iri.to_string()));
        }
        Ok(())
    }

    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, iri)| iri.as_str())
    }

    /// Splits `curie` at its first colon and looks the prefix up. Returns the
    /// bound namespace and the local part, or `None` when the token has no
    /// colon or its prefix is not bound.
    pub fn split_curie<'a>(&'a self, curie: &'a str) -> Option<(&'a str, &'a str)> {
        let (prefix, local) = curie.split_once(':')?;
        self.namespace(prefix).map(|ns| (ns, local))
    }

    pub fn expand_curie(&self, curie: &str) -> Option<String> {
        self.split_curie(curie)
            .map(|(ns, local)| format!("{}{}", ns, local))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, iri)| (p.as_str(), iri.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{REC, UTR};

    #[test]
    fn test_default_table_order() {
        let table = NamespaceTable::with_defaults();
        let prefixes: Vec<&str> = table.iter().map(|(p, _)| p).collect();
        assert_eq!(prefixes.first(), Some(&"rdf"));
        assert_eq!(prefixes.last(), Some(&""));
        assert_eq!(table.namespace(""), Some(UTR));
        assert_eq!(table.namespace("utr"), Some(UTR));
    }

    #[test]
    fn test_expand_curie_splits_at_first_colon() {
        let table = NamespaceTable::default();
        assert_eq!(
            table.expand_curie("rec:area"),
            Some(format!("{}area", REC))
        );
        assert_eq!(
            table.expand_curie("rec:a:b"),
            Some(format!("{}a:b", REC))
        );
        assert_eq!(table.expand_curie(":R101"), Some(format!("{}R101", UTR)));
        assert_eq!(table.expand_curie("nope:R101"), None);
        assert_eq!(table.expand_curie("R101"), None);
    }

    #[test]
    fn test_bind_replaces_in_place() {
        let mut table = NamespaceTable::default();
        let len = table.len();
        table.bind("rec", "https://example.com/rec#").unwrap();
        assert_eq!(table.len(), len);
        assert_eq!(table.namespace("rec"), Some("https://example.com/rec#"));

        table.bind("ex", "http://example.com/").unwrap();
        assert_eq!(table.len(), len + 1);
        assert_eq!(table.iter().last(), Some(("ex", "http://example.com/")));

        assert!(table.bind("bad", "not an iri").is_err());
        assert!(table.bind("a:b", "http://example.com/").is_err());
    }
}
