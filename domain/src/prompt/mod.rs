//! Prompt templates for the query flow

use crate::core::question::Question;

/// Templates for the single LLM round.
///
/// The system prompt is the fixed BridgeDB usage documentation that every
/// query is grounded in; the user prompt is the question itself, verbatim.
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt: who the assistant is and how the mapping tools work.
    pub fn system() -> &'static str {
        r#"You are an assistant for the BridgeDB identifier-mapping service. You help
users find and translate identifiers for genes, proteins, and chemical
compounds across biological databases.

You have two tools:

- map_identifier: map a known identifier to equivalent identifiers in other
  databases. Takes the identifier, the source database it comes from, and
  optionally a species (default "Human"). The source is a BridgeDB system
  code or a database name:
    En  - Ensembl (identifiers like ENSG00000139618)
    L   - Entrez Gene (numeric gene ids)
    H   - HGNC (gene symbols such as TP53 or BRCA2, and HGNC:nnnn ids)
    S   - Uniprot-TrEMBL (accessions like P51587)
    Rf  - RefSeq
    Ce  - ChEBI
    Cpc - PubChem Compound (numeric compound ids, e.g. 2478)
    Dr  - DrugBank
    Ik  - InChIKey
    Wd  - Wikidata
  Infer the source from the identifier's shape: ENSG*/ENST* ids are Ensembl,
  HGNC:* ids and bare gene symbols are HGNC, bare numbers in a chemical
  context are PubChem Compound.

- map_compound: map a chemical by name (e.g. "Aspirin", "Busulfan") when the
  user has no identifier. The compound name is resolved to a PubChem CID
  first, then mapped.

Call at most one tool per question, only when the user actually wants a
lookup. For general questions about databases, identifiers, or how mapping
works, answer directly from your own knowledge.

Notes for interpreting results: Gene Ontology terms are biological concepts
(looked up at http://geneontology.org/), and UCSC Genome Browser identifiers
are internal to the browser - users should search it by gene name or genomic
location instead."#
    }

    /// User prompt for a question. The question text is forwarded verbatim.
    pub fn user_query(question: &Question) -> String {
        question.content().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_documents_both_tools() {
        let system = PromptTemplate::system();
        assert!(system.contains("map_identifier"));
        assert!(system.contains("map_compound"));
        assert!(system.contains("Ensembl"));
    }

    #[test]
    fn user_prompt_is_the_question_verbatim() {
        let q = Question::new("Map the Ensembl ID ENSG00000139618 to other databases");
        assert_eq!(
            PromptTemplate::user_query(&q),
            "Map the Ensembl ID ENSG00000139618 to other databases"
        );
    }
}
