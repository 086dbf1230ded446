use anyhow::{Context, Result};
use clap::Parser;
use search_server::loader::load_corpus;
use search_server::{paginate, remove_duplicates, Document, DocumentStatus, IndexStats, RequestQueue};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "In-memory TF-IDF document search", long_about = None)]
struct Args {
    /// Corpus file; standard input is read when omitted
    #[arg(short, long)]
    path: Option<String>,

    /// Query to run, may be repeated
    #[arg(short, long, default_value = "curly -dog", allow_hyphen_values = true)]
    query: Vec<String>,

    /// Only return documents with this status
    #[arg(short, long, default_value = "actual")]
    status: DocumentStatus,

    /// Documents per printed page
    #[arg(long, default_value_t = 2)]
    page_size: usize,

    /// Remove documents that repeat an earlier document's words
    #[arg(long)]
    remove_duplicates: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Print index statistics before the results
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, Serialize)]
struct QueryReport<'a> {
    query: &'a str,
    status: DocumentStatus,
    documents: &'a [Document],
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<IndexStats>,
    queries: Vec<QueryReport<'a>>,
}

fn print_stats(stats: &IndexStats) {
    println!("Documents: {}", stats.total_documents);
    println!("Distinct words: {}", stats.total_words);
    println!("Average documents per word: {:.2}", stats.avg_docs_per_word);
    println!();
}

fn print_results(query: &str, documents: &[Document], page_size: usize) {
    println!("Results for \"{}\":", query);
    if documents.is_empty() {
        println!("  nothing found");
        return;
    }
    for (n, page) in paginate(documents, page_size).iter().enumerate() {
        println!("  page {}", n + 1);
        for document in page.items() {
            println!("    {}", document);
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let start = Instant::now();
    let mut server = match &args.path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open corpus '{}'", path))?;
            load_corpus(BufReader::new(file))?
        }
        None => load_corpus(io::stdin().lock())?,
    };
    tracing::info!("Indexed {} documents in {:?}", server.document_count(), start.elapsed());

    if args.remove_duplicates {
        let removed = remove_duplicates(&mut server);
        tracing::info!("Removed {} duplicate documents", removed.len());
    }

    let mut request_queue = RequestQueue::new(&server);
    let mut reports = Vec::with_capacity(args.query.len());

    for query in &args.query {
        let documents = request_queue
            .add_find_request_with_status(query, args.status)
            .with_context(|| format!("Query \"{}\" failed", query))?;
        reports.push((query.as_str(), documents));
    }

    let stats = args.stats.then(|| server.index_stats());

    if args.json {
        let report = Report {
            stats,
            queries: reports
                .iter()
                .map(|(query, documents)| QueryReport {
                    query: *query,
                    status: args.status,
                    documents: documents.as_slice(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if let Some(stats) = &stats {
            print_stats(stats);
        }
        for (query, documents) in &reports {
            print_results(query, documents, args.page_size);
        }
        println!();
        println!(
            "Requests without results: {}",
            request_queue.no_result_requests()
        );
    }

    Ok(())
}
