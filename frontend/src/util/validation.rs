//! Client-side input validation that blocks a submission before anything is
//! sent to the server.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagColumnsError {
    #[error("Tag column entries must be numbers: '{0}' is not a column number")]
    NotANumber(String),
    #[error("Tag column numbers start at 1")]
    Zero,
}

/// Parses the tag-columns text box: a comma-separated list of 1-based
/// column numbers. Whitespace around entries is ignored and an empty box
/// means "no tag columns", not an error.
pub fn parse_tag_columns(input: &str) -> Result<Vec<usize>, TagColumnsError> {
    let mut columns = Vec::new();
    for entry in input.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let number: usize = entry
            .parse()
            .map_err(|_| TagColumnsError::NotANumber(entry.to_string()))?;
        if number == 0 {
            return Err(TagColumnsError::Zero);
        }
        columns.push(number);
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_spaced_numeric_list() {
        assert_eq!(parse_tag_columns("2, 5,7"), Ok(vec![2, 5, 7]));
    }

    #[test]
    fn rejects_non_numeric_entries() {
        assert_eq!(
            parse_tag_columns("2,a,7"),
            Err(TagColumnsError::NotANumber("a".to_string()))
        );
    }

    #[test]
    fn empty_input_means_no_columns() {
        assert_eq!(parse_tag_columns(""), Ok(vec![]));
        assert_eq!(parse_tag_columns(" , ,"), Ok(vec![]));
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(parse_tag_columns("0,2"), Err(TagColumnsError::Zero));
    }
}
