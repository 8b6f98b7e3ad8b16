use thiserror::Error;

/// Delimiter used by the catalog's sample strings.
///
/// A hyphen doubles as a negative sign, so a negative value can never survive
/// tokenization under this delimiter: `-0.5` splits into an empty token
/// followed by `0.5` and fails as [`ParseError::EmptyToken`]. The catalog only
/// records non-negative values, which is the only reason the format works;
/// callers with signed data should use [`parse_sample_with`] and an
/// unambiguous delimiter such as `','`.
pub const SAMPLE_DELIMITER: char = '-';

/// A sample token failed to parse as a non-negative decimal value.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("empty token at position {position} in sample `{raw}`")]
    EmptyToken { raw: String, position: usize },

    #[error("invalid number `{token}` at position {position} in sample `{raw}`")]
    InvalidNumber {
        raw: String,
        token: String,
        position: usize,
    },

    #[error("non-finite value `{token}` at position {position} in sample `{raw}`")]
    NonFinite {
        raw: String,
        token: String,
        position: usize,
    },

    #[error("negative value `{token}` at position {position} in sample `{raw}`")]
    NegativeValue {
        raw: String,
        token: String,
        position: usize,
    },
}

/// Tokenize one catalog sample into its measurement values.
pub fn parse_sample(raw: &str) -> Result<Vec<f64>, ParseError> {
    parse_sample_with(raw, SAMPLE_DELIMITER)
}

/// Tokenize a sample using an explicit delimiter.
///
/// Tokens are trimmed before parsing. Every token must be a finite,
/// non-negative decimal; the first offending token aborts the parse.
pub fn parse_sample_with(raw: &str, delimiter: char) -> Result<Vec<f64>, ParseError> {
    let mut values = Vec::new();

    for (position, token) in raw.split(delimiter).enumerate() {
        let token = token.trim();
        if token.is_empty() {
            return Err(ParseError::EmptyToken {
                raw: raw.to_string(),
                position,
            });
        }

        let value: f64 = token.parse().map_err(|_| ParseError::InvalidNumber {
            raw: raw.to_string(),
            token: token.to_string(),
            position,
        })?;

        if !value.is_finite() {
            return Err(ParseError::NonFinite {
                raw: raw.to_string(),
                token: token.to_string(),
                position,
            });
        }
        if value < 0.0 {
            return Err(ParseError::NegativeValue {
                raw: raw.to_string(),
                token: token.to_string(),
                position,
            });
        }

        values.push(value);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_values() -> Result<(), ParseError> {
        assert_eq!(parse_sample("0.75-0.13")?, vec![0.75, 0.13]);
        assert_eq!(parse_sample("0-0.69")?, vec![0.0, 0.69]);
        Ok(())
    }

    #[test]
    fn test_parse_trims_token_whitespace() -> Result<(), ParseError> {
        assert_eq!(parse_sample(" 0.75 - 0.13 ")?, vec![0.75, 0.13]);
        Ok(())
    }

    #[test]
    fn test_parse_integers_as_floats() -> Result<(), ParseError> {
        assert_eq!(parse_sample("1-2-3")?, vec![1.0, 2.0, 3.0]);
        Ok(())
    }

    #[test]
    fn test_empty_sample_fails() {
        assert_eq!(
            parse_sample(""),
            Err(ParseError::EmptyToken {
                raw: String::new(),
                position: 0,
            })
        );
    }

    #[test]
    fn test_leading_hyphen_reads_as_empty_token() {
        // The hyphen/negative-sign collision: `-0.5` is not a negative value
        // under the hyphen delimiter, it is a missing first token.
        assert_eq!(
            parse_sample("-0.5"),
            Err(ParseError::EmptyToken {
                raw: "-0.5".to_string(),
                position: 0,
            })
        );
    }

    #[test]
    fn test_double_delimiter_fails() {
        assert_eq!(
            parse_sample("0.1--0.2"),
            Err(ParseError::EmptyToken {
                raw: "0.1--0.2".to_string(),
                position: 1,
            })
        );
    }

    #[test]
    fn test_non_numeric_token_fails() {
        assert_eq!(
            parse_sample("0.5-abc"),
            Err(ParseError::InvalidNumber {
                raw: "0.5-abc".to_string(),
                token: "abc".to_string(),
                position: 1,
            })
        );
    }

    #[test]
    fn test_non_finite_token_fails() {
        assert_eq!(
            parse_sample_with("0.5,NaN", ','),
            Err(ParseError::NonFinite {
                raw: "0.5,NaN".to_string(),
                token: "NaN".to_string(),
                position: 1,
            })
        );
        assert_eq!(
            parse_sample_with("inf", ','),
            Err(ParseError::NonFinite {
                raw: "inf".to_string(),
                token: "inf".to_string(),
                position: 0,
            })
        );
    }

    #[test]
    fn test_comma_delimiter_rejects_negative_values() {
        assert_eq!(
            parse_sample_with("-0.5,1.0", ','),
            Err(ParseError::NegativeValue {
                raw: "-0.5,1.0".to_string(),
                token: "-0.5".to_string(),
                position: 0,
            })
        );
    }

    #[test]
    fn test_comma_delimiter_parses_plain_values() -> Result<(), ParseError> {
        assert_eq!(parse_sample_with("0.75,0.13", ',')?, vec![0.75, 0.13]);
        Ok(())
    }
}
