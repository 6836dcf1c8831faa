//! Defines the well-known namespace IRIs bound during conversion, the default
//! input/output locations, and the cell texts treated as missing values.

use oxigraph::model::NamedNodeRef;

// w3c vocabularies
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
pub const ORG: &str = "http://www.w3.org/ns/org#";
pub const SDO: &str = "https://schema.org/";
pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";
// building vocabularies
pub const BRICK: &str = "https://brickschema.org/schema/Brick#";
pub const REC: &str = "https://w3id.org/rec#";
pub const BOT: &str = "https://w3id.org/bot#";
pub const WMTO: &str = "https://w3id.org/wmto#";
// project namespace, also bound as the default (empty) prefix
pub const UTR: &str = "https://example.org/UniToResources#";

/// Prefix bindings in the order they are declared in the Turtle output.
pub const DEFAULT_PREFIXES: [(&str, &str); 14] = [
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("owl", OWL),
    ("xsd", XSD),
    ("foaf", FOAF),
    ("org", ORG),
    ("sdo", SDO),
    ("brick", BRICK),
    ("skos", SKOS),
    ("rec", REC),
    ("bot", BOT),
    ("wmto", WMTO),
    ("utr", UTR),
    ("", UTR),
];

// xsd datatypes produced by literal inference
pub const XSD_BOOLEAN: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#boolean");
pub const XSD_INTEGER: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#integer");
pub const XSD_DOUBLE: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#double");
pub const XSD_DATE_TIME: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#dateTime");
pub const XSD_STRING: NamedNodeRef<'_> =
    NamedNodeRef::new_unchecked("http://www.w3.org/2001/XMLSchema#string");

pub const DEFAULT_INPUT: &str = "input/resources.xlsx";
pub const DEFAULT_OUTPUT: &str = "output/resources.ttl";

/// Cell texts read as missing values. Matches the markers common spreadsheet
/// readers treat as NA, so `N/A` or an `#N/A` error cell never becomes a triple.
pub const DEFAULT_NA_VALUES: [&str; 19] = [
    "",
    "#N/A",
    "#N/A N/A",
    "#NA",
    "-1.#IND",
    "-1.#QNAN",
    "-NaN",
    "-nan",
    "1.#IND",
    "1.#QNAN",
    "<NA>",
    "N/A",
    "NA",
    "NULL",
    "NaN",
    "None",
    "n/a",
    "nan",
    "null",
];
