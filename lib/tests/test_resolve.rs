use xlsx2ttl::consts::{BRICK, DEFAULT_PREFIXES, REC, UTR, WMTO};
use xlsx2ttl::{NamespaceTable, ResolveMode, Resolver};

const MODES: [ResolveMode; 3] = [
    ResolveMode::Subject,
    ResolveMode::Predicate,
    ResolveMode::Object,
];

#[test]
fn registered_prefixes_expand_in_every_mode() {
    let table = NamespaceTable::default();
    let resolver = Resolver::new(&table);
    for (prefix, iri) in DEFAULT_PREFIXES {
        let token = format!("{}:Thing_1", prefix);
        for mode in MODES {
            let node = resolver.resolve(&token, mode);
            assert_eq!(node.as_str(), format!("{}Thing_1", iri), "{} {:?}", token, mode);
        }
    }
}

#[test]
fn registered_prefix_keeps_text_after_first_colon() {
    let table = NamespaceTable::default();
    let resolver = Resolver::new(&table);
    let node = resolver.resolve_subject("brick:AHU:1");
    assert_eq!(node.as_str(), format!("{}AHU:1", BRICK));
}

#[test]
fn subject_fallback_uses_default_namespace() {
    let table = NamespaceTable::default();
    let resolver = Resolver::new(&table);
    assert_eq!(
        resolver.resolve_subject("R102").as_str(),
        format!("{}R102", UTR)
    );
    assert_eq!(
        resolver.resolve_subject("ex:R102").as_str(),
        format!("{}R102", UTR)
    );
    assert_eq!(
        resolver.resolve_subject("a:b:c").as_str(),
        format!("{}c", UTR)
    );
}

#[test]
fn predicate_fallback_uses_secondary_namespace() {
    let table = NamespaceTable::default();
    let resolver = Resolver::new(&table);
    assert_eq!(
        resolver.resolve_predicate("note").as_str(),
        format!("{}note", WMTO)
    );
    assert_eq!(
        resolver.resolve_predicate("custom:floorArea").as_str(),
        format!("{}floorArea", WMTO)
    );
    assert_eq!(
        resolver.resolve_predicate("rec:area").as_str(),
        format!("{}area", REC)
    );
}

#[test]
fn object_fallback_uses_default_namespace() {
    let table = NamespaceTable::default();
    let resolver = Resolver::new(&table);
    assert_eq!(
        resolver.resolve_object("site:Z9").as_str(),
        format!("{}Z9", UTR)
    );
    // the colon test comes before date parsing
    assert_eq!(
        resolver.resolve_object("2024-01-01T10:00:00").as_str(),
        format!("{}00", UTR)
    );
}

#[test]
fn empty_prefix_is_the_default_namespace() {
    let table = NamespaceTable::default();
    let resolver = Resolver::new(&table);
    assert_eq!(
        resolver.resolve_predicate(":hasRoom").as_str(),
        format!("{}hasRoom", UTR)
    );
}

#[test]
fn resolution_always_yields_a_valid_iri() {
    let table = NamespaceTable::default();
    let resolver = Resolver::new(&table);
    for token in ["Air Handler", "rec:floor area", "x:<weird>", "50%", "a#b", ""] {
        for mode in MODES {
            let node = resolver.resolve(token, mode);
            assert!(
                oxigraph::model::NamedNode::new(node.as_str()).is_ok(),
                "{:?} -> {}",
                token,
                node
            );
        }
    }
    assert_eq!(
        resolver.resolve_predicate("Air Handler").as_str(),
        format!("{}Air%20Handler", WMTO)
    );
}

#[test]
fn empty_table_falls_back_for_everything() {
    let table = NamespaceTable::empty();
    let resolver = Resolver::new(&table);
    assert_eq!(
        resolver.resolve_subject("rec:R1").as_str(),
        format!("{}R1", UTR)
    );
    assert_eq!(
        resolver.resolve_predicate("rec:area").as_str(),
        format!("{}area", WMTO)
    );
}
