use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chunkdb_cli::{read_content, WalkPolicy, DEFAULT_EXTENSIONS};
use chunkdb_core::config::Config;
use chunkdb_index::ChunkIndex;
use chunkdb_text::ChunkerConfig;
use indicatif::ProgressBar;
use tracing::warn;

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {} <query|stats> <dir> [args...]", prog);
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().context("loading config")?;
    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "query" => {
            let dir = args.first().map(PathBuf::from).unwrap_or_else(|| {
                eprintln!("Usage: chunkdb-cli query <dir> \"<query>\" [k]");
                std::process::exit(1)
            });
            let query = args.get(1).cloned().unwrap_or_else(|| {
                eprintln!("Usage: chunkdb-cli query <dir> \"<query>\" [k]");
                std::process::exit(1)
            });
            let k: usize = match args.get(2) {
                Some(raw) => raw.parse().context("k must be a non-negative integer")?,
                None => config.get("search.k").unwrap_or(3),
            };

            let mut index = build_index(&config)?;
            let (files, chunks) = ingest(&mut index, &dir, &walk_policy(&config));
            println!("Indexed {} files ({} chunks) from {}", files, chunks, dir.display());

            let results = index.search(&query, k);
            if results.is_empty() {
                println!("No relevant chunks found.");
                return Ok(());
            }
            for hit in results {
                println!(
                    "--- {} (lines {}-{}, relevance: {:.2}) ---",
                    hit.file_path, hit.start_line, hit.end_line, hit.score
                );
                println!("{}\n", hit.content);
            }
        }
        "stats" => {
            let dir = args.first().map(PathBuf::from).unwrap_or_else(|| {
                eprintln!("Usage: chunkdb-cli stats <dir>");
                std::process::exit(1)
            });
            let mut index = build_index(&config)?;
            let (files, chunks) = ingest(&mut index, &dir, &walk_policy(&config));
            println!("{}: {} files, {} chunks", dir.display(), files, chunks);
        }
        _ => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn build_index(config: &Config) -> anyhow::Result<ChunkIndex> {
    let default = ChunkerConfig::default();
    let chunk_size: usize = config.get("chunking.chunk_size").unwrap_or(default.chunk_size());
    let overlap: usize = config.get("chunking.overlap").unwrap_or(default.overlap());
    let chunker = ChunkerConfig::new(chunk_size, overlap).context("invalid chunking config")?;
    Ok(ChunkIndex::with_config(chunker))
}

fn walk_policy(config: &Config) -> WalkPolicy {
    let extensions: Vec<String> = config
        .get("data.extensions")
        .unwrap_or_else(|_| DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect());
    WalkPolicy::new(extensions)
}

/// Walks `dir` under the policy and feeds every readable file to the
/// index. Returns (files ingested, chunks added).
fn ingest(index: &mut ChunkIndex, dir: &Path, policy: &WalkPolicy) -> (usize, usize) {
    let files = policy.collect(dir);
    let pb = ProgressBar::new(files.len() as u64);
    let mut ingested = 0;
    let mut chunks = 0;
    for path in &files {
        pb.inc(1);
        let rel = path.strip_prefix(dir).unwrap_or(path);
        match read_content(path) {
            Ok(content) => {
                chunks += index.add_file(&rel.to_string_lossy(), &content);
                ingested += 1;
            }
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable file"),
        }
    }
    pb.finish_and_clear();
    (ingested, chunks)
}
