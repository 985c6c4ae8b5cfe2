//! BridgeDB datasource system codes

use serde::{Deserialize, Serialize};

/// Well-known datasources, as `(system code, full name)` pairs.
///
/// The BridgeDB xrefs endpoint addresses the source database by its system
/// code. This table covers the sources the assistant talks about; the
/// service itself knows many more, so unknown inputs pass through verbatim.
const SYSTEM_CODES: &[(&str, &str)] = &[
    ("En", "Ensembl"),
    ("L", "Entrez Gene"),
    ("H", "HGNC"),
    ("S", "Uniprot-TrEMBL"),
    ("Rf", "RefSeq"),
    ("Ce", "ChEBI"),
    ("Cpc", "PubChem Compound"),
    ("Cs", "ChemSpider"),
    ("Ch", "HMDB"),
    ("Dr", "DrugBank"),
    ("Ik", "InChIKey"),
    ("Wd", "Wikidata"),
    ("Uc", "UCSC Genome Browser"),
];

/// A source database reference, stored as the system code sent to the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSource(String);

impl DataSource {
    /// Resolve a user- or model-supplied datasource reference.
    ///
    /// Accepts a system code ("En"), a full datasource name ("Ensembl",
    /// case-insensitive), or anything else verbatim, since the
    /// service is the authority on which codes exist.
    pub fn resolve(input: &str) -> Self {
        let trimmed = input.trim();
        if SYSTEM_CODES.iter().any(|(code, _)| *code == trimmed) {
            return Self(trimmed.to_string());
        }
        for (code, name) in SYSTEM_CODES {
            if name.eq_ignore_ascii_case(trimmed) {
                return Self((*code).to_string());
            }
        }
        Self(trimmed.to_string())
    }

    /// The PubChem Compound datasource, used for chemical lookups.
    pub fn pubchem_compound() -> Self {
        Self("Cpc".to_string())
    }

    /// The system code as sent to the API.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Full name for display, if this is a known code.
    pub fn full_name(&self) -> Option<&'static str> {
        SYSTEM_CODES
            .iter()
            .find(|(code, _)| *code == self.0)
            .map(|(_, name)| *name)
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.full_name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_system_code_as_is() {
        assert_eq!(DataSource::resolve("En").code(), "En");
        assert_eq!(DataSource::resolve("Cpc").code(), "Cpc");
    }

    #[test]
    fn resolves_full_name_to_code() {
        assert_eq!(DataSource::resolve("Ensembl").code(), "En");
        assert_eq!(DataSource::resolve("hgnc").code(), "H");
        assert_eq!(DataSource::resolve("PubChem Compound").code(), "Cpc");
    }

    #[test]
    fn unknown_input_passes_through() {
        assert_eq!(DataSource::resolve("Zz").code(), "Zz");
        assert!(DataSource::resolve("Zz").full_name().is_none());
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(DataSource::resolve("  Ensembl ").code(), "En");
    }

    #[test]
    fn display_includes_full_name_when_known() {
        assert_eq!(DataSource::resolve("En").to_string(), "Ensembl (En)");
        assert_eq!(DataSource::resolve("Zz").to_string(), "Zz");
    }
}
