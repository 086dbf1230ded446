//! Corpus loading from a line-oriented text stream.
//!
//! Layout:
//!
//! ```text
//! <stop words separated by spaces>
//! <document count N>
//! <document 0 text>
//! <status code> <rating count> <rating>...
//! ...
//! ```
//!
//! Documents get ids `0..N` in the order they appear.

use crate::document::DocumentStatus;
use crate::engine::SearchServer;
use anyhow::{anyhow, bail, Context, Result};
use std::io::BufRead;
use tracing::{info, warn};

/// A document as read from the corpus, before indexing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub text: String,
    pub status: DocumentStatus,
    pub ratings: Vec<i32>,
}

struct LineReader<R> {
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self, what: &str) -> Result<String> {
        self.line_no += 1;
        match self.lines.next() {
            Some(line) => line.with_context(|| format!("Failed to read line {}", self.line_no)),
            None => bail!("Unexpected end of input at line {}: expected {}", self.line_no, what),
        }
    }
}

/// Parse `<status code> <rating count> <rating>...`
fn parse_metadata(line: &str) -> Result<(DocumentStatus, Vec<i32>)> {
    let mut numbers = line.split_whitespace();

    let code: i64 = numbers
        .next()
        .ok_or_else(|| anyhow!("missing status code"))?
        .parse()
        .context("Failed to parse status code")?;
    let status = DocumentStatus::from_code(code).ok_or_else(|| anyhow!("unknown status code {}", code))?;

    let count: usize = numbers
        .next()
        .ok_or_else(|| anyhow!("missing rating count"))?
        .parse()
        .context("Failed to parse rating count")?;

    let ratings = numbers
        .map(|n| n.parse::<i32>().with_context(|| format!("Failed to parse rating '{}'", n)))
        .collect::<Result<Vec<_>>>()?;
    if ratings.len() != count {
        bail!("expected {} ratings, found {}", count, ratings.len());
    }

    Ok((status, ratings))
}

/// Read the stop-word line and every document of a corpus
pub fn read_corpus<R: BufRead>(reader: R) -> Result<(String, Vec<RawDocument>)> {
    let mut reader = LineReader::new(reader);

    let stop_words = reader.next_line("stop words")?;
    let count: usize = reader
        .next_line("document count")?
        .trim()
        .parse()
        .context("Failed to parse document count")?;

    let mut documents = Vec::with_capacity(count);
    for n in 0..count {
        let text = reader.next_line("document text")?;
        let metadata = reader.next_line("document status and ratings")?;
        let (status, ratings) =
            parse_metadata(&metadata).with_context(|| format!("Invalid metadata for document {}", n))?;
        documents.push(RawDocument {
            text,
            status,
            ratings,
        });
    }

    Ok((stop_words, documents))
}

/// Build a search server from a corpus stream.
///
/// Documents rejected by the server are logged and skipped.
pub fn load_corpus<R: BufRead>(reader: R) -> Result<SearchServer> {
    let (stop_words, documents) = read_corpus(reader)?;

    let mut server = SearchServer::from_stop_words_text(&stop_words).context("Invalid stop words")?;

    let total = documents.len();
    for (n, doc) in documents.into_iter().enumerate() {
        let id = i32::try_from(n).context("Too many documents")?;
        if let Err(e) = server.add_document(id, &doc.text, doc.status, &doc.ratings) {
            warn!("Skipping document {}: {}", id, e);
        }
    }

    info!("Loaded {} of {} documents", server.document_count(), total);
    Ok(server)
}
