use crate::core::reverse::reverse_in_place;
use crate::domain::model::Sequence;
use crate::utils::error::{ReverseError, Result};
use num_bigint::BigInt;

/// Parses `n` on the first line followed by exactly `n` integers on the second.
///
/// With `n == 0` the second line may be blank or missing. Blank lines after the
/// second are ignored; anything else there is an error.
pub fn parse_input(text: &str) -> Result<Sequence> {
    let mut lines = text.lines();

    let count_line = lines
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or(ReverseError::MissingCountError)?;
    let declared = parse_count(count_line)?;

    let elements = match lines.next() {
        Some(line) => parse_elements(line)?,
        None if declared == 0 => Vec::new(),
        None => return Err(ReverseError::MissingElementsError { declared }),
    };

    if elements.len() != declared {
        return Err(ReverseError::CountMismatchError {
            declared,
            found: elements.len(),
        });
    }

    // 第三行起只允許空白行
    if let Some(offset) = lines.position(|line| !line.trim().is_empty()) {
        return Err(ReverseError::TrailingInputError { line: offset + 3 });
    }

    tracing::debug!("Parsed {} elements", elements.len());
    Ok(Sequence::new(elements))
}

fn parse_count(value: &str) -> Result<usize> {
    value.parse::<usize>().map_err(|e| {
        let reason = match value.parse::<i64>() {
            Ok(n) if n < 0 => "count must be non-negative".to_string(),
            _ => e.to_string(),
        };
        ReverseError::InvalidCountError {
            value: value.to_string(),
            reason,
        }
    })
}

/// Tokens have no width limit; `+7` and `007` normalise to `7`.
fn parse_elements(line: &str) -> Result<Vec<BigInt>> {
    line.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<BigInt>()
                .map_err(|_| ReverseError::InvalidElementError {
                    position: i + 1,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Elements joined by single spaces, terminated by one newline.
pub fn format_output(elements: &[BigInt]) -> String {
    let mut out = elements
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    out.push('\n');
    out
}

/// Parse, reverse and format in one step.
pub fn solve(input: &str) -> Result<String> {
    let mut sequence = parse_input(input)?;
    reverse_in_place(sequence.as_mut_slice());
    Ok(format_output(sequence.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_parse_basic_input() {
        let seq = parse_input("5\n1 2 3 4 5\n").unwrap();
        assert_eq!(seq.as_slice(), ints(&[1, 2, 3, 4, 5]).as_slice());
    }

    #[test]
    fn test_parse_tolerates_whitespace_and_crlf() {
        let seq = parse_input("  4 \r\n -3\t0  2 -1 \r\n").unwrap();
        assert_eq!(seq.as_slice(), ints(&[-3, 0, 2, -1]).as_slice());
    }

    #[test]
    fn test_parse_empty_sequence() {
        assert!(parse_input("0\n\n").unwrap().is_empty());
        assert!(parse_input("0\n").unwrap().is_empty());
        assert!(parse_input("0").unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_count() {
        assert!(matches!(parse_input(""), Err(ReverseError::MissingCountError)));
        assert!(matches!(
            parse_input("   \n1 2"),
            Err(ReverseError::MissingCountError)
        ));
    }

    #[test]
    fn test_parse_invalid_count() {
        match parse_input("-1\n1") {
            Err(ReverseError::InvalidCountError { value, reason }) => {
                assert_eq!(value, "-1");
                assert_eq!(reason, "count must be non-negative");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            parse_input("five\n1 2 3 4 5"),
            Err(ReverseError::InvalidCountError { .. })
        ));
        assert!(matches!(
            parse_input("2 3\n1 2"),
            Err(ReverseError::InvalidCountError { .. })
        ));
    }

    #[test]
    fn test_parse_missing_elements() {
        assert!(matches!(
            parse_input("3\n"),
            Err(ReverseError::MissingElementsError { declared: 3 })
        ));
    }

    #[test]
    fn test_parse_count_mismatch() {
        assert!(matches!(
            parse_input("3\n1 2"),
            Err(ReverseError::CountMismatchError {
                declared: 3,
                found: 2
            })
        ));
        assert!(matches!(
            parse_input("1\n1 2"),
            Err(ReverseError::CountMismatchError {
                declared: 1,
                found: 2
            })
        ));
        assert!(matches!(
            parse_input("0\n5"),
            Err(ReverseError::CountMismatchError {
                declared: 0,
                found: 1
            })
        ));
    }

    #[test]
    fn test_parse_invalid_element() {
        match parse_input("3\n1 x 3") {
            Err(ReverseError::InvalidElementError { position, token }) => {
                assert_eq!(position, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            parse_input("1\n1.5"),
            Err(ReverseError::InvalidElementError { .. })
        ));
        assert!(matches!(
            parse_input("1\n--5"),
            Err(ReverseError::InvalidElementError { .. })
        ));
    }

    #[test]
    fn test_parse_integers_wider_than_64_bits() {
        let seq = parse_input("3\n1 99999999999999999999 -170141183460469231731687303715884105729\n")
            .unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.as_slice()[1].to_string(), "99999999999999999999");
        assert_eq!(
            solve("2\n1 99999999999999999999\n").unwrap(),
            "99999999999999999999 1\n"
        );
    }

    #[test]
    fn test_elements_are_normalised() {
        assert_eq!(solve("3\n+5 007 -0\n").unwrap(), "0 7 5\n");
    }

    #[test]
    fn test_parse_trailing_input() {
        assert!(parse_input("2\n1 2\n\n  \n").is_ok());
        assert!(matches!(
            parse_input("2\n1 2\n\n3 4\n"),
            Err(ReverseError::TrailingInputError { line: 4 })
        ));
    }

    #[test]
    fn test_format_output() {
        assert_eq!(format_output(&ints(&[5, 4, 3, 2, 1])), "5 4 3 2 1\n");
        assert_eq!(format_output(&ints(&[7])), "7\n");
        assert_eq!(format_output(&[]), "\n");
        assert_eq!(format_output(&ints(&[-1, 2, 0, -3])), "-1 2 0 -3\n");
    }

    #[test]
    fn test_solve_scenarios() {
        let scenarios = [
            ("5\n1 2 3 4 5\n", "5 4 3 2 1\n"),
            ("0\n\n", "\n"),
            ("1\n7\n", "7\n"),
            ("4\n-3 0 2 -1\n", "-1 2 0 -3\n"),
            ("6\n1 1 2 2 3 3\n", "3 3 2 2 1 1\n"),
        ];
        for (input, expected) in scenarios {
            assert_eq!(solve(input).unwrap(), expected, "input: {:?}", input);
        }
    }
}
