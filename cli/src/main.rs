use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use search_core::{paginate, DocId, Document, DocumentStatus, RequestQueue, SearchConfig, SearchServer};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt};
use walkdir::WalkDir;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Deserialize)]
struct InputDoc {
    id: DocId,
    #[serde(alias = "body")]
    text: String,
    #[serde(default)]
    status: DocumentStatus,
    #[serde(default)]
    ratings: Vec<i32>,
}

#[derive(Parser)]
#[command(name = "search-server")]
#[command(about = "Index documents in memory and run TF-IDF ranked queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IndexArgs {
    /// Input path (JSON/JSONL file or a directory of them)
    #[arg(long)]
    input: String,
    /// Space separated stop words
    #[arg(long, default_value = "")]
    stop_words: String,
    /// Maximum number of documents returned per query
    #[arg(long, default_value_t = SearchConfig::DEFAULT_MAX_RESULT_DOCUMENT_COUNT)]
    max_results: usize,
    /// Relevances closer than this are ordered by rating
    #[arg(long, default_value_t = SearchConfig::DEFAULT_RELEVANCE_EPSILON)]
    epsilon: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Run queries (from --query or one per stdin line) and print ranked results
    Search {
        #[command(flatten)]
        index: IndexArgs,
        /// Query text; may be repeated
        #[arg(long = "query")]
        queries: Vec<String>,
        /// Only return documents with this status (default: actual)
        #[arg(long)]
        status: Option<DocumentStatus>,
        /// Results per printed page
        #[arg(long, default_value = "2")]
        page_size: NonZeroUsize,
        /// Width of the empty-request window, in queries
        #[arg(long, default_value_t = RequestQueue::DEFAULT_WINDOW)]
        window: u64,
        /// Print one JSON object per query instead of pages
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the query words found in one document
    Match {
        #[command(flatten)]
        index: IndexArgs,
        #[arg(long)]
        query: String,
        #[arg(long, allow_negative_numbers = true)]
        id: DocId,
    },
}

#[derive(Serialize)]
struct SearchResponse<'a> {
    query: &'a str,
    took_s: f64,
    total_hits: usize,
    results: &'a [Document],
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { index, queries, status, page_size, window, json } => {
            let server = build_server(&index)?;
            let queries = if queries.is_empty() { read_queries(io::stdin().lock())? } else { queries };
            let opts = SearchOptions { status: status.unwrap_or_default(), page_size, window, json };
            run_search(&mut io::stdout().lock(), &server, &queries, &opts)
        }
        Commands::Match { index, query, id } => {
            let server = build_server(&index)?;
            let (words, status) = server.match_document(&query, id)?;
            println!("{{ document_id = {id}, status = {status}, words = {} }}", words.join(" "));
            Ok(())
        }
    }
}

fn build_server(args: &IndexArgs) -> Result<SearchServer> {
    if args.max_results == 0 {
        bail!("--max-results must be at least 1");
    }
    let config = SearchConfig { max_result_document_count: args.max_results, relevance_epsilon: args.epsilon };
    let stop_words = search_core::tokenizer::StopWords::from_text(&args.stop_words).context("invalid --stop-words")?;
    let mut server = SearchServer::from_parts(stop_words, config);

    let files = collect_input_files(Path::new(&args.input));
    if files.is_empty() {
        bail!("no .json or .jsonl input found at {}", args.input);
    }
    let mut rejected = 0usize;
    for file in files {
        for doc in read_input_docs(&file)? {
            if let Err(err) = server.add_document(doc.id, &doc.text, doc.status, &doc.ratings) {
                tracing::warn!(doc_id = doc.id, file = %file.display(), %err, "skipping document");
                rejected += 1;
            }
        }
    }
    tracing::info!(
        num_docs = server.document_count(),
        rejected,
        stop_words = server.stop_words().len(),
        max_results = server.config().max_result_document_count,
        "ingested documents"
    );
    Ok(server)
}

fn collect_input_files(input_path: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input_path.is_dir() {
        for entry in WalkDir::new(input_path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && p.extension().and_then(|s| s.to_str()).is_some_and(|ext| matches!(ext, "json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
    } else if input_path.is_file() {
        files.push(input_path.to_path_buf());
    }
    files
}

fn read_input_docs(file: &Path) -> Result<Vec<InputDoc>> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
        let mut docs = Vec::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }
            let doc = serde_json::from_str(&line)
                .with_context(|| format!("{}:{}: malformed document", file.display(), lineno + 1))?;
            docs.push(doc);
        }
        return Ok(docs);
    }
    let json: serde_json::Value = serde_json::from_reader(reader).with_context(|| format!("parsing {}", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(|v| serde_json::from_value(v).with_context(|| format!("{}: malformed document", file.display())))
            .collect(),
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value(json)?]),
        _ => bail!("{}: expected a document or an array of documents", file.display()),
    }
}

fn read_queries<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut queries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            queries.push(line);
        }
    }
    Ok(queries)
}

struct SearchOptions {
    status: DocumentStatus,
    page_size: NonZeroUsize,
    window: u64,
    json: bool,
}

fn run_search<W: Write>(out: &mut W, server: &SearchServer, queries: &[String], opts: &SearchOptions) -> Result<()> {
    let mut queue = RequestQueue::with_window(server, opts.window);
    for query in queries {
        let start = Instant::now();
        let docs = match queue.add_find_request_by_status(query, opts.status) {
            Ok(docs) => docs,
            Err(err) => {
                writeln!(out, "Error: {err}")?;
                continue;
            }
        };
        if opts.json {
            let response = SearchResponse { query, took_s: start.elapsed().as_secs_f64(), total_hits: docs.len(), results: &docs };
            writeln!(out, "{}", serde_json::to_string(&response)?)?;
            continue;
        }
        writeln!(out, "Query: {query}")?;
        for page in paginate(&docs, opts.page_size).pages() {
            writeln!(out, "{page}")?;
            writeln!(out, "Page break")?;
        }
    }
    tracing::info!(queries = queries.len(), "queries complete");
    writeln!(out, "Total empty requests: {}", queue.get_no_result_requests())?;
    Ok(())
}
