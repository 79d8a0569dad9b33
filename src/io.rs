use super::types::{Header, Row};
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::{Path, PathBuf},
};

/// Streams a tab-separated file one physical line at a time. The header is read
/// up front; iterating yields the data rows after it and never rewinds.
pub struct TsvReader<R> {
    header: Header,
    lines: Lines<R>,
}

pub type TsvFileReader = TsvReader<BufReader<File>>;

impl TsvFileReader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ReadError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("opened {}", path.display());

        Self::from_reader(BufReader::new(file))
    }
}

impl<R: BufRead> TsvReader<R> {
    pub fn from_reader(reader: R) -> Result<Self, ReadError> {
        let mut lines = reader.lines();
        let header = match lines.next() {
            Some(line) => Header::parse(&line?),
            None => return Err(ReadError::EmptyFile),
        };

        Ok(Self { header, lines })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }
}

impl<R: BufRead> Iterator for TsvReader<R> {
    type Item = Result<Row, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .next()
            .map(|result| result.map(|line| Row::parse(&line)).map_err(ReadError::from))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("cannot open {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no header line, file is empty")]
    EmptyFile,
    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),
}
