use crate::errors::OutputWriteError;
use crate::namespaces::NamespaceTable;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use oxigraph::io::{RdfFormat, RdfParser, RdfSerializer};
use oxigraph::model::graph::Graph as OxigraphGraph;
use oxigraph::model::{Triple, TripleRef};

use log::{debug, info};

/// Triples of `graph` ordered by their N-Triples text, so that the same set
/// of triples always serializes to the same bytes.
pub fn sorted_triples(graph: &OxigraphGraph) -> Vec<TripleRef<'_>> {
    let mut triples: Vec<TripleRef<'_>> = graph.iter().collect();
    triples.sort_by_cached_key(|t| t.to_string());
    triples
}

/// Serializes `graph` as Turtle into `writer`, declaring every prefix of
/// `namespaces` in table order.
pub fn write_graph<W: Write>(
    graph: &OxigraphGraph,
    namespaces: &NamespaceTable,
    writer: W,
) -> Result<W> {
    let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle);
    for (prefix, iri) in namespaces.iter() {
        serializer = serializer
            .with_prefix(prefix, iri)
            .with_context(|| format!("Invalid prefix binding {}: <{}>", prefix, iri))?;
    }
    let mut serializer = serializer.for_writer(writer);
    for triple in sorted_triples(graph) {
        serializer.serialize_triple(triple)?;
    }
    Ok(serializer.finish()?)
}

pub fn graph_to_turtle(graph: &OxigraphGraph, namespaces: &NamespaceTable) -> Result<String> {
    let bytes = write_graph(graph, namespaces, Vec::new())?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes `graph` to `file` as Turtle, creating missing parent directories
/// and replacing any existing file.
pub fn write_graph_to_file(
    graph: &OxigraphGraph,
    namespaces: &NamespaceTable,
    file: &Path,
) -> Result<()> {
    info!(
        "Writing graph to file: {} with length {}",
        file.display(),
        graph.len()
    );
    let output_error = || OutputWriteError {
        file: file.display().to_string(),
    };
    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Creating output directory: {}", parent.display());
        std::fs::create_dir_all(parent).context(output_error())?;
    }
    let handle = File::create(file).context(output_error())?;
    let mut writer = write_graph(graph, namespaces, BufWriter::new(handle))?;
    writer.flush().context(output_error())?;
    Ok(())
}

/// Reads a Turtle file back into a graph.
pub fn read_file(file: &Path) -> Result<OxigraphGraph> {
    debug!("Reading file: {}", file.display());
    let content = BufReader::new(File::open(file)?);
    let parser = RdfParser::from_format(RdfFormat::Turtle).for_reader(content);
    let mut graph = OxigraphGraph::new();
    for quad in parser {
        let quad = quad?;
        let triple = Triple::new(quad.subject, quad.predicate, quad.object);
        graph.insert(&triple);
    }
    Ok(graph)
}
