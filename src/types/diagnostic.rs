use super::{CompositeKey, LineNumber};

/// A data row whose field count differs from the header's. Reported, never fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct RowShapeMismatch {
    pub line_number: LineNumber,
    pub key: CompositeKey,
    pub found: usize,
    pub expected: usize,
}

impl std::fmt::Display for RowShapeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{} - {}] parts count {} != {}",
            self.line_number, self.key, self.found, self.expected
        )
    }
}

/// A composite key seen a number of times other than once.
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateKey {
    pub key: CompositeKey,
    pub count: usize,
}

impl std::fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Primary key {} has count {}", self.key, self.count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lines_in_file: usize,
    pub data_lines: usize,
    pub unique_keys: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "lines in file   : {}", self.lines_in_file)?;
        writeln!(f, "data lines      : {}", self.data_lines)?;
        write!(f, "unique row count: {}", self.unique_keys)
    }
}
