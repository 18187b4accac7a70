//! Instance and solutions file parsing.
//!
//! Instance format: `name n` followed by `n * n` whitespace-separated
//! integers, row-major. The diagonal is ignored. Solutions format:
//! whitespace-separated `(file-stem, instance-name, optimal-cost)` triples.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use super::model::TspInstance;
use crate::error::Error;

/// A tolerated per-edge defect found while loading an instance.
///
/// The offending edge is kept at cost 0 and loading continues; callers
/// decide whether the warnings are acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub row: usize,
    pub col: usize,
    pub value: i64,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "edge ({}, {}) has invalid cost {}, stored as 0",
            self.row, self.col, self.value
        )
    }
}

/// Parses an instance from its text representation.
///
/// A negative off-diagonal cost is a malformed edge: it is recorded as a
/// [`LoadWarning`] and stored as 0 rather than aborting the load. A
/// truncated or non-numeric token stream is a fatal data-integrity error.
pub fn parse_instance(text: &str) -> Result<(TspInstance, Vec<LoadWarning>), Error> {
    let mut tokens = text.split_whitespace();

    let name = tokens
        .next()
        .ok_or_else(|| Error::data("instance is empty: missing name".to_string()))?;
    let n: usize = tokens
        .next()
        .ok_or_else(|| Error::data(format!("instance {name}: missing city count")))?
        .parse()
        .map_err(|_| Error::data(format!("instance {name}: city count is not an integer")))?;

    let mut warnings = Vec::new();
    let mut matrix = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            let token = tokens.next().ok_or_else(|| {
                Error::data(format!(
                    "instance {name}: cost matrix truncated at row {i}, column {j} (expected {n}x{n})"
                ))
            })?;
            let value: i64 = token.parse().map_err(|_| {
                Error::data(format!(
                    "instance {name}: invalid cost {token:?} at row {i}, column {j}"
                ))
            })?;
            if i != j && value < 0 {
                warnings.push(LoadWarning {
                    row: i,
                    col: j,
                    value,
                });
                continue;
            }
            matrix[i][j] = value;
        }
    }

    let instance = TspInstance::new(name, matrix)?;
    Ok((instance, warnings))
}

/// Reads and parses an instance file.
pub fn load_instance(path: &Path) -> Result<(TspInstance, Vec<LoadWarning>), Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::resource(path, e))?;
    parse_instance(&text)
}

/// Parses a solutions listing into a map from file stem to optimal cost.
///
/// Keys are stored with any extension stripped, matching how instances
/// are looked up by their file stem.
pub fn parse_solutions(text: &str) -> Result<HashMap<String, i64>, Error> {
    let mut solutions = HashMap::new();
    let mut tokens = text.split_whitespace();
    while let Some(stem) = tokens.next() {
        let instance_name = tokens.next().ok_or_else(|| {
            Error::data(format!("solutions entry {stem}: missing instance name"))
        })?;
        let value_token = tokens.next().ok_or_else(|| {
            Error::data(format!(
                "solutions entry {stem} ({instance_name}): missing optimal cost"
            ))
        })?;
        let value: i64 = value_token.parse().map_err(|_| {
            Error::data(format!(
                "solutions entry {stem}: optimal cost {value_token:?} is not an integer"
            ))
        })?;
        let key = stem.split('.').next().unwrap_or(stem).to_string();
        solutions.insert(key, value);
    }
    Ok(solutions)
}

/// Reads and parses a solutions file.
pub fn load_solutions(path: &Path) -> Result<HashMap<String, i64>, Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::resource(path, e))?;
    parse_solutions(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYMMETRIC: &str = "\
small4 4
0 1 2 3
1 0 4 5
2 4 0 6
3 5 6 0
";

    const ASYMMETRIC: &str = "\
directed3 3
0 10 20
11 0 30
21 31 0
";

    #[test]
    fn test_parse_symmetric_instance() {
        let (instance, warnings) = parse_instance(SYMMETRIC).unwrap();
        assert_eq!(instance.name(), "small4");
        assert_eq!(instance.city_count(), 4);
        assert!(instance.is_symmetric());
        assert_eq!(instance.cost(1, 2), 4);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_parse_asymmetric_instance() {
        let (instance, _) = parse_instance(ASYMMETRIC).unwrap();
        assert!(!instance.is_symmetric());
        assert_eq!(instance.cost(0, 1), 10);
        assert_eq!(instance.cost(1, 0), 11);
    }

    #[test]
    fn test_negative_edge_collected_as_warning() {
        let text = "warned 3\n0 -5 2\n1 0 4\n2 4 0\n";
        let (instance, warnings) = parse_instance(text).unwrap();
        assert_eq!(
            warnings,
            vec![LoadWarning {
                row: 0,
                col: 1,
                value: -5
            }]
        );
        // the malformed edge is kept at cost 0
        assert_eq!(instance.cost(0, 1), 0);
    }

    #[test]
    fn test_truncated_matrix_is_fatal() {
        let err = parse_instance("short 3\n0 1 2\n3 0\n").unwrap_err();
        let text = err.to_string();
        assert!(text.contains("short"), "missing instance name in: {text}");
    }

    #[test]
    fn test_non_numeric_cost_is_fatal() {
        assert!(parse_instance("bad 2\n0 x\n1 0\n").is_err());
    }

    #[test]
    fn test_missing_header_is_fatal() {
        assert!(parse_instance("").is_err());
        assert!(parse_instance("lonely").is_err());
        assert!(parse_instance("name notanumber").is_err());
    }

    #[test]
    fn test_parse_solutions() {
        let text = "data10 inst10 1350\ndata18.txt inst18 2000\n";
        let solutions = parse_solutions(text).unwrap();
        assert_eq!(solutions.get("data10"), Some(&1350));
        // extension stripped on insert
        assert_eq!(solutions.get("data18"), Some(&2000));
        assert_eq!(solutions.len(), 2);
    }

    #[test]
    fn test_incomplete_solutions_triple_is_fatal() {
        assert!(parse_solutions("data10 inst10\n").is_err());
        assert!(parse_solutions("data10 inst10 notanumber\n").is_err());
    }

    #[test]
    fn test_load_missing_file_is_resource_error() {
        let err = load_instance(Path::new("definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, Error::Resource { .. }));
    }
}
