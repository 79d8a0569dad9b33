mod diagnostic;
mod row;

pub use diagnostic::{DuplicateKey, RowShapeMismatch, Summary};
pub use row::{CompositeKey, Header, LineNumber, Row};
