//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Malformed mapping row: {0:?}")]
    MalformedMappingRow(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_row_display_quotes_the_row() {
        let error = DomainError::MalformedMappingRow("ENSG0001".to_string());
        assert!(error.to_string().contains("\"ENSG0001\""));
    }
}
