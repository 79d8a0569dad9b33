const FIELD_DELIMITER: char = '\t';
const KEY_SEPARATOR: &str = "-";

/// Trailing whitespace (newline included) is dropped before splitting. A line
/// that is blank once trimmed has no fields at all.
fn split_fields(line: &str) -> Vec<String> {
    let line = line.trim_end();
    if line.is_empty() {
        return Vec::new();
    }
    line.split(FIELD_DELIMITER).map(String::from).collect()
}

/// 1-based count of physical lines read so far, header included.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineNumber(pub usize);

impl LineNumber {
    pub fn increment(&mut self) {
        self.0 += 1;
    }
}

impl std::fmt::Display for LineNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The first two fields of a row joined with a hyphen. Uniqueness is what gets
/// checked, so nothing here guarantees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompositeKey(pub String);

impl std::fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    fields: Vec<String>,
}

impl Header {
    pub fn parse(line: &str) -> Self {
        Self {
            fields: split_fields(line),
        }
    }

    /// The field count every data row is measured against.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fields.join(" -- "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn parse(line: &str) -> Self {
        Self {
            fields: split_fields(line),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    // Short rows are not padded: a one-field row keys on that field alone.
    pub fn composite_key(&self) -> CompositeKey {
        let end = self.fields.len().min(2);
        CompositeKey(self.fields[..end].join(KEY_SEPARATOR))
    }
}
