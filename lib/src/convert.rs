//! Walks a workbook and turns every non-empty cell into a triple.

use crate::infer::{infer_literal, CellValue};
use crate::namespaces::NamespaceTable;
use crate::resolve::Resolver;
use crate::workbook::{Row, Sheet, Workbook};
use log::{debug, info, warn};
use oxigraph::model::{Graph, NamedNode, Term, Triple};

/// Counters collected while converting a workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub sheets: usize,
    pub rows: usize,
    /// Rows without a subject, which contribute nothing.
    pub skipped_rows: usize,
    /// Distinct triples in the resulting graph.
    pub triples: usize,
}

pub struct Conversion {
    pub graph: Graph,
    pub report: ConversionReport,
}

pub struct Converter {
    namespaces: NamespaceTable,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(NamespaceTable::default())
    }
}

impl Converter {
    pub fn new(namespaces: NamespaceTable) -> Self {
        Self { namespaces }
    }

    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    pub fn convert_workbook(&self, workbook: &Workbook) -> Conversion {
        let mut graph = Graph::new();
        let mut report = ConversionReport::default();
        for sheet in workbook.sheets() {
            self.convert_sheet(sheet, &mut graph, &mut report);
        }
        report.triples = graph.len();
        info!(
            "Converted {} sheets ({} rows, {} skipped) into {} triples",
            report.sheets, report.rows, report.skipped_rows, report.triples
        );
        Conversion { graph, report }
    }

    /// Adds the triples of one sheet to `graph`.
    pub fn convert_sheet(&self, sheet: &Sheet, graph: &mut Graph, report: &mut ConversionReport) {
        let resolver = Resolver::new(&self.namespaces);
        let predicates = self.sheet_predicates(&resolver, sheet);
        let before = graph.len();
        report.sheets += 1;

        for (idx, row) in sheet.rows().enumerate() {
            report.rows += 1;
            // header is spreadsheet row 1
            let row_number = idx + 2;
            match self.row_triples(&resolver, &predicates, row) {
                Some(triples) => {
                    for triple in &triples {
                        graph.insert(triple);
                    }
                }
                None => {
                    warn!(
                        "Sheet '{}' row {} has no subject; skipping it",
                        sheet.name(),
                        row_number
                    );
                    report.skipped_rows += 1;
                }
            }
        }
        info!(
            "Sheet '{}': {} rows, {} new triples",
            sheet.name(),
            sheet.num_rows(),
            graph.len() - before
        );
    }

    // One entry per column after the subject column; `None` for columns
    // whose header is empty after normalization.
    fn sheet_predicates(&self, resolver: &Resolver, sheet: &Sheet) -> Vec<Option<NamedNode>> {
        sheet
            .normalized_headers()
            .into_iter()
            .enumerate()
            .skip(1)
            .map(|(col, header)| {
                if header.is_empty() {
                    warn!(
                        "Sheet '{}' column {} has no header; its cells are ignored",
                        sheet.name(),
                        col + 1
                    );
                    None
                } else {
                    let predicate = resolver.resolve_predicate(header);
                    debug!("Column '{}' -> {}", header, predicate);
                    Some(predicate)
                }
            })
            .collect()
    }

    /// The triples of one row, or `None` when the subject cell is empty.
    fn row_triples(
        &self,
        resolver: &Resolver,
        predicates: &[Option<NamedNode>],
        row: Row<'_>,
    ) -> Option<Vec<Triple>> {
        let subject = row.subject();
        if subject.is_empty() {
            return None;
        }
        let subject = resolver.resolve_subject(&subject.to_string());
        let triples = row
            .cells()
            .iter()
            .skip(1)
            .zip(predicates)
            .filter(|(cell, _)| !cell.is_empty())
            .filter_map(|(cell, predicate)| {
                let predicate = predicate.as_ref()?;
                Some(Triple::new(
                    subject.clone(),
                    predicate.clone(),
                    self.object(resolver, cell),
                ))
            })
            .collect();
        Some(triples)
    }

    /// A cell naming a resource (text with a colon) becomes an IRI; anything
    /// else becomes a typed literal.
    pub fn object(&self, resolver: &Resolver, cell: &CellValue) -> Term {
        match cell.as_identifier() {
            Some(token) => resolver.resolve_object(token).into(),
            None => infer_literal(cell).to_literal().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{UTR, WMTO};
    use oxigraph::model::NamedNodeRef;

    fn sheet(headers: &[&str], rows: Vec<Vec<CellValue>>) -> Sheet {
        Sheet::new(
            "Test",
            headers.iter().map(|h| h.to_string()).collect(),
            rows,
        )
    }

    #[test]
    fn test_rows_without_subject_are_skipped() {
        let sheet = sheet(
            &["id", "note"],
            vec![
                vec![CellValue::Empty, CellValue::String("orphan".to_string())],
                vec![
                    CellValue::String("R1".to_string()),
                    CellValue::String("kept".to_string()),
                ],
            ],
        );
        let conversion = Converter::default().convert_workbook(&Workbook::new(vec![sheet]));
        assert_eq!(conversion.report.rows, 2);
        assert_eq!(conversion.report.skipped_rows, 1);
        assert_eq!(conversion.report.triples, 1);
    }

    #[test]
    fn test_columns_without_header_are_ignored() {
        let sheet = sheet(
            &["id", "", "note"],
            vec![vec![
                CellValue::String("R1".to_string()),
                CellValue::Int(1),
                CellValue::String("x".to_string()),
            ]],
        );
        let conversion = Converter::default().convert_workbook(&Workbook::new(vec![sheet]));
        assert_eq!(conversion.report.triples, 1);
        let predicate = NamedNodeRef::new_unchecked("https://w3id.org/wmto#note");
        assert_eq!(conversion.graph.triples_for_predicate(predicate).count(), 1);
    }

    #[test]
    fn test_numeric_subject_uses_its_text() {
        let sheet = sheet(
            &["id", "note"],
            vec![vec![CellValue::Int(101), CellValue::Bool(true)]],
        );
        let conversion = Converter::default().convert_workbook(&Workbook::new(vec![sheet]));
        let triple = conversion.graph.iter().next().unwrap();
        assert_eq!(triple.subject.to_string(), format!("<{}101>", UTR));
        assert_eq!(triple.predicate.as_str(), format!("{}note", WMTO));
    }
}
