//! Converts spreadsheet resource tables into RDF triples serialized as Turtle.
//!
//! Every sheet of a workbook is read as a table: the first column holds the
//! subject of each row, the other column headers are predicates, and every
//! non-empty cell becomes an object. Identifiers written as CURIEs expand
//! through a [`NamespaceTable`]; other cells become typed literals.
//!
//! ```no_run
//! use xlsx2ttl::config::Config;
//!
//! let summary = xlsx2ttl::api::run(&Config::default())?;
//! println!("{}", summary.message());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod consts;
pub mod convert;
pub mod errors;
pub mod infer;
pub mod namespaces;
pub mod resolve;
pub mod util;
pub mod workbook;

pub use crate::convert::{Conversion, ConversionReport, Converter};
pub use crate::infer::{infer_literal, CellValue, InferredLiteral, Timestamp};
pub use crate::namespaces::NamespaceTable;
pub use crate::resolve::{ResolveMode, Resolver};
pub use crate::workbook::{normalize_header, Sheet, Workbook};
