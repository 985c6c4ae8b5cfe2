//! Cross-reference rows returned by the xrefs endpoint

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One cross-reference: an equivalent identifier in another datasource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xref {
    /// The mapped identifier (e.g. "HGNC:1101").
    pub identifier: String,
    /// Full name of the datasource the identifier belongs to
    /// (e.g. "Ensembl", "Gene Ontology").
    pub datasource: String,
}

impl Xref {
    pub fn new(identifier: impl Into<String>, datasource: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            datasource: datasource.into(),
        }
    }
}

/// Parse the tab-separated body of an xrefs response.
///
/// Each non-empty line is `identifier <TAB> datasource`. An empty or
/// whitespace-only body means the service knows no mappings and yields an
/// empty vec; a line without a tab is a malformed response.
pub fn parse_xref_lines(body: &str) -> Result<Vec<Xref>, DomainError> {
    let mut xrefs = Vec::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (identifier, datasource) = line
            .split_once('\t')
            .ok_or_else(|| DomainError::MalformedMappingRow(line.to_string()))?;
        xrefs.push(Xref::new(identifier.trim(), datasource.trim()));
    }
    Ok(xrefs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tsv_rows() {
        let body = "ENSG00000139618\tEnsembl\nHGNC:1101\tHGNC\n";
        let xrefs = parse_xref_lines(body).unwrap();
        assert_eq!(xrefs.len(), 2);
        assert_eq!(xrefs[0], Xref::new("ENSG00000139618", "Ensembl"));
        assert_eq!(xrefs[1], Xref::new("HGNC:1101", "HGNC"));
    }

    #[test]
    fn empty_body_is_no_mappings() {
        assert!(parse_xref_lines("").unwrap().is_empty());
        assert!(parse_xref_lines("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn line_without_tab_is_malformed() {
        let err = parse_xref_lines("not a tsv row").unwrap_err();
        assert!(matches!(err, DomainError::MalformedMappingRow(_)));
    }

    #[test]
    fn trims_fields_and_skips_blank_lines() {
        let body = "\nGO:0005634 \t GeneOntology\n\n";
        let xrefs = parse_xref_lines(body).unwrap();
        assert_eq!(xrefs, vec![Xref::new("GO:0005634", "GeneOntology")]);
    }
}
