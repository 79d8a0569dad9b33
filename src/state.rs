use super::types::{CompositeKey, DuplicateKey, Header, LineNumber, Row, RowShapeMismatch, Summary};
use std::collections::HashMap;

/// Running accounting for one validation pass.
pub struct State {
    line_number: LineNumber,
    expected_fields: usize,
    key_counts: HashMap<CompositeKey, usize>,
}

impl State {
    /// Starts counting with the header already read as line 1.
    pub fn new(header: &Header) -> Self {
        Self {
            line_number: LineNumber(1),
            expected_fields: header.len(),
            key_counts: HashMap::new(),
        }
    }

    pub fn process(&mut self, row: Row) -> Option<RowShapeMismatch> {
        self.line_number.increment();

        let key = row.composite_key();
        log::trace!("line {}: key {} with {} fields", self.line_number, key, row.len());

        *self.key_counts.entry(key.clone()).or_insert(0) += 1;

        if row.len() != self.expected_fields {
            return Some(RowShapeMismatch {
                line_number: self.line_number,
                key,
                found: row.len(),
                expected: self.expected_fields,
            });
        }

        None
    }

    pub fn summary(&self) -> Summary {
        Summary {
            lines_in_file: self.line_number.0,
            data_lines: self.line_number.0 - 1,
            unique_keys: self.key_counts.len(),
        }
    }

    /// Every key whose count is not exactly one, sorted by key so repeated runs
    /// over the same file report in the same order.
    pub fn duplicate_keys(&self) -> Vec<DuplicateKey> {
        let mut duplicates: Vec<DuplicateKey> = self
            .key_counts
            .iter()
            .filter(|(_, count)| **count != 1)
            .map(|(key, &count)| DuplicateKey {
                key: key.clone(),
                count,
            })
            .collect();
        duplicates.sort_by(|a, b| a.key.cmp(&b.key));
        duplicates
    }

    pub fn write<Writer: std::io::Write>(self, mut f: Writer) -> Result<Summary, std::io::Error> {
        let summary = self.summary();
        writeln!(f, "{}", summary)?;

        for duplicate in self.duplicate_keys() {
            writeln!(f, "{}", duplicate)?;
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::{CompositeKey, DuplicateKey, Header, LineNumber, Row, RowShapeMismatch, State, Summary};

    fn build_state(header: &str, rows: &[&str]) -> (State, Vec<RowShapeMismatch>) {
        let mut state = State::new(&Header::parse(header));
        let mut mismatches = Vec::new();

        for row in rows {
            mismatches.extend(state.process(Row::parse(row)));
        }

        (state, mismatches)
    }

    #[test]
    fn test_basic_example() {
        let (state, mismatches) = build_state("id\tname", &["1\tAlice", "2\tBob", "1\tAlice"]);

        assert!(mismatches.is_empty());
        assert_eq!(
            state.summary(),
            Summary {
                lines_in_file: 4,
                data_lines: 3,
                unique_keys: 2
            }
        );
        assert_eq!(
            state.duplicate_keys(),
            vec![DuplicateKey {
                key: CompositeKey("1-Alice".into()),
                count: 2
            }]
        );
    }

    #[test]
    fn test_short_row() {
        let (state, mismatches) = build_state("a\tb\tc", &["x\ty"]);

        assert_eq!(
            mismatches,
            vec![RowShapeMismatch {
                line_number: LineNumber(2),
                key: CompositeKey("x-y".into()),
                found: 2,
                expected: 3
            }]
        );
        assert!(state.duplicate_keys().is_empty());
    }

    #[test]
    fn test_malformed_rows_still_counted() {
        let (state, mismatches) = build_state("a\tb", &["1\t2", "", "3\t4\t5", "6\t7"]);

        assert_eq!(mismatches.len(), 2);
        assert_eq!(mismatches[0].line_number, LineNumber(3));
        assert_eq!(mismatches[0].found, 0);
        assert_eq!(mismatches[1].line_number, LineNumber(4));
        assert_eq!(mismatches[1].key, CompositeKey("3-4".into()));
        assert_eq!(state.summary().data_lines, 4);
        assert_eq!(state.summary().unique_keys, 4);
    }

    #[test]
    fn test_unique_keys_match_data_lines() {
        let (state, _) = build_state("k1\tk2\tv", &["a\t1\tx", "a\t2\tx", "b\t1\tx"]);

        assert!(state.duplicate_keys().is_empty());
        assert_eq!(state.summary().unique_keys, state.summary().data_lines);
    }

    #[test]
    fn test_header_only() {
        let (state, _) = build_state("a\tb", &[]);

        assert_eq!(
            state.summary(),
            Summary {
                lines_in_file: 1,
                data_lines: 0,
                unique_keys: 0
            }
        );
    }

    #[test]
    fn test_duplicates_sorted() {
        let (state, _) = build_state(
            "a\tb",
            &["z\t1", "m\t1", "z\t1", "a\t1", "m\t1", "z\t1", "a\t1"],
        );

        let keys: Vec<_> = state
            .duplicate_keys()
            .into_iter()
            .map(|duplicate| (duplicate.key.0, duplicate.count))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("a-1".to_string(), 2),
                ("m-1".to_string(), 2),
                ("z-1".to_string(), 3)
            ]
        );
    }

    #[test]
    fn test_write() {
        let (state, _) = build_state("id\tname", &["1\tAlice", "2\tBob", "1\tAlice"]);
        let mut out = Vec::new();

        state.write(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "lines in file   : 4\n\
             data lines      : 3\n\
             unique row count: 2\n\
             Primary key 1-Alice has count 2\n"
        );
    }
}
