//! Resolves subject, predicate and object tokens to IRIs.
//!
//! A token in `prefix:local` form whose prefix is bound in the
//! [`NamespaceTable`] expands to `namespace + local`. Anything else falls back
//! to a namespace chosen by where the token came from, using the text after
//! the last colon as the local name. Resolution never fails.

use crate::consts::{UTR, WMTO};
use crate::namespaces::NamespaceTable;
use log::debug;
use oxigraph::model::NamedNode;

/// Where a token was read from. Decides the fallback namespace.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ResolveMode {
    /// First column of a row.
    Subject,
    /// A normalized column header.
    Predicate,
    /// A cell string containing a colon.
    Object,
}

impl ResolveMode {
    pub fn fallback_namespace(self) -> &'static str {
        match self {
            ResolveMode::Subject | ResolveMode::Object => UTR,
            ResolveMode::Predicate => WMTO,
        }
    }
}

pub struct Resolver<'a> {
    namespaces: &'a NamespaceTable,
}

impl<'a> Resolver<'a> {
    pub fn new(namespaces: &'a NamespaceTable) -> Self {
        Self { namespaces }
    }

    pub fn namespaces(&self) -> &NamespaceTable {
        self.namespaces
    }

    pub fn resolve(&self, token: &str, mode: ResolveMode) -> NamedNode {
        if let Some((ns, local)) = self.namespaces.split_curie(token) {
            if let Some(node) = join_iri(ns, local) {
                return node;
            }
            debug!("Expanded CURIE '{}' is not a valid IRI", token);
        }
        let local = token.rsplit(':').next().unwrap_or(token);
        let ns = mode.fallback_namespace();
        debug!("Resolving '{}' ({:?}) in fallback namespace {}", token, mode, ns);
        join_iri(ns, local).unwrap_or_else(|| {
            // strict encoding leaves only unreserved, sub-delim and escaped ASCII
            NamedNode::new_unchecked(format!("{}{}", ns, encode_local_name(local, true)))
        })
    }

    pub fn resolve_subject(&self, token: &str) -> NamedNode {
        self.resolve(token, ResolveMode::Subject)
    }

    pub fn resolve_predicate(&self, token: &str) -> NamedNode {
        self.resolve(token, ResolveMode::Predicate)
    }

    pub fn resolve_object(&self, token: &str) -> NamedNode {
        self.resolve(token, ResolveMode::Object)
    }
}

fn join_iri(ns: &str, local: &str) -> Option<NamedNode> {
    NamedNode::new(format!("{}{}", ns, encode_local_name(local, false)))
        .or_else(|_| NamedNode::new(format!("{}{}", ns, encode_local_name(local, true))))
        .ok()
}

/// Percent-encodes the characters of `local` that cannot appear in an IRI.
/// With `strict`, every non-ASCII character is encoded as well.
pub fn encode_local_name(local: &str, strict: bool) -> String {
    let bytes = local.as_bytes();
    let mut out = String::with_capacity(local.len());
    for (i, c) in local.char_indices() {
        let escape = match c {
            '%' => !is_escape(&bytes[i..]),
            '<' | '>' | '"' | '{' | '}' | '|' | '\\' | '^' | '`' | '#' | '[' | ']' => true,
            c if c.is_control() || c == ' ' => true,
            c if !c.is_ascii() => strict || c.is_whitespace(),
            _ => false,
        };
        if escape {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{:02X}", b));
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn is_escape(rest: &[u8]) -> bool {
    rest.len() >= 3 && rest[1].is_ascii_hexdigit() && rest[2].is_ascii_hexdigit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_local_name() {
        assert_eq!(encode_local_name("R101", false), "R101");
        assert_eq!(encode_local_name("Air Handler", false), "Air%20Handler");
        assert_eq!(encode_local_name("a#b", false), "a%23b");
        assert_eq!(encode_local_name("50%", false), "50%25");
        assert_eq!(encode_local_name("a%20b", false), "a%20b");
        assert_eq!(encode_local_name("caffè", false), "caffè");
        assert_eq!(encode_local_name("caffè", true), "caff%C3%A8");
    }

    #[test]
    fn test_fallback_namespaces() {
        assert_eq!(ResolveMode::Subject.fallback_namespace(), UTR);
        assert_eq!(ResolveMode::Object.fallback_namespace(), UTR);
        assert_eq!(ResolveMode::Predicate.fallback_namespace(), WMTO);
    }
}
