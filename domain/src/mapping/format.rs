//! Human-readable rendering of mapping results

use super::datasource::DataSource;
use super::xref::Xref;

/// Render a set of xrefs as display text.
///
/// Gene Ontology terms and UCSC Genome Browser identifiers get an
/// explanatory note: GO terms are concepts looked up on geneontology.org,
/// and UCSC identifiers are internal to the browser.
pub fn format_mappings(identifier: &str, source: &DataSource, xrefs: &[Xref]) -> String {
    if xrefs.is_empty() {
        return format!("No mappings found for {} from {}", identifier, source);
    }

    let mut out = format!("Mapped identifiers for {} from {}:\n", identifier, source);
    for xref in xrefs {
        match xref.datasource.as_str() {
            "GeneOntology" => {
                out.push_str(&format!(
                    "- Gene Ontology term: {} (see http://geneontology.org/)\n",
                    xref.identifier
                ));
            }
            "UCSC Genome Browser" => {
                out.push_str(&format!(
                    "- UCSC Genome Browser identifier: {} (internal; search by gene name or genomic location)\n",
                    xref.identifier
                ));
            }
            _ => {
                out.push_str(&format!("- {} ({})\n", xref.identifier, xref.datasource));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_rows() {
        let source = DataSource::resolve("En");
        let xrefs = vec![
            Xref::new("HGNC:1101", "HGNC"),
            Xref::new("P51587", "Uniprot-TrEMBL"),
        ];
        let text = format_mappings("ENSG00000139618", &source, &xrefs);
        assert!(text.starts_with("Mapped identifiers for ENSG00000139618 from Ensembl (En):"));
        assert!(text.contains("- HGNC:1101 (HGNC)"));
        assert!(text.contains("- P51587 (Uniprot-TrEMBL)"));
    }

    #[test]
    fn annotates_gene_ontology_terms() {
        let source = DataSource::resolve("En");
        let xrefs = vec![Xref::new("GO:0005634", "GeneOntology")];
        let text = format_mappings("ENSG00000139618", &source, &xrefs);
        assert!(text.contains("Gene Ontology term: GO:0005634"));
        assert!(text.contains("http://geneontology.org/"));
    }

    #[test]
    fn annotates_ucsc_identifiers() {
        let source = DataSource::resolve("H");
        let xrefs = vec![Xref::new("uc001abc.1", "UCSC Genome Browser")];
        let text = format_mappings("BRCA2", &source, &xrefs);
        assert!(text.contains("UCSC Genome Browser identifier: uc001abc.1"));
    }

    #[test]
    fn empty_set_reports_no_mappings() {
        let source = DataSource::resolve("Cpc");
        let text = format_mappings("2478", &source, &[]);
        assert_eq!(
            text,
            "No mappings found for 2478 from PubChem Compound (Cpc)"
        );
    }
}
