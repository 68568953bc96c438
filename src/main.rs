use anyhow::{Context, Result};
use clap::Parser;
use docsift::{
    build_index, load_documents, open_index, DocumentIndex, FieldType, SearchEngine,
    SearchOptions,
};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, format_count, format_size, print_result, row, section_bot, section_top};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Index {
            input,
            output,
            pretty,
        } => run_index(&input, &output, pretty),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Search {
            file,
            query,
            limit,
            context_length,
            json,
        } => run_search(
            &file,
            &query,
            SearchOptions {
                limit,
                context_length,
            },
            json,
        ),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "docsift=debug" } else { "docsift=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_index(input: &Path, output: &Path, pretty: bool) -> Result<()> {
    let started = Instant::now();
    let docs = load_documents(input)
        .with_context(|| format!("failed to load documents from {}", input.display()))?;

    if docs.is_empty() {
        eprintln!("⚠️  No documents in {}; writing an empty index", input.display());
    }

    let index = build_index(docs);
    let json = if pretty {
        index.to_json_pretty()?
    } else {
        index.to_json()?
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(output, &json).with_context(|| format!("failed to write {}", output.display()))?;

    eprintln!("  ✓ {}", output.display());
    eprintln!("✅ Indexed {} documents", format_count(index.len()));
    eprintln!(
        "   {} title tokens │ {} content tokens │ {} │ {:.1?}",
        format_count(index.field(FieldType::Title).token_count()),
        format_count(index.field(FieldType::Content).token_count()),
        format_size(json.len()),
        started.elapsed()
    );
    Ok(())
}

fn run_inspect(file: &Path) -> Result<()> {
    let index = open(file)?;

    println!();
    section_top("INDEX");
    row(&format!("  File:      {}", file.display()));
    row(&format!("  Version:   {}", index.version()));
    row(&format!("  Documents: {}", format_count(index.len())));
    section_bot();
    println!();

    section_top("FIELDS");
    row(&format!(
        "  {:<10} {:>12} {:>12} {:>16}",
        "field", "tokens", "postings", "avg postings"
    ));
    for field in FieldType::ALL {
        let field_index = index.field(field);
        let tokens = field_index.token_count();
        let postings = field_index.posting_count();
        let avg = if tokens == 0 {
            0.0
        } else {
            postings as f64 / tokens as f64
        };
        row(&format!(
            "  {:<10} {:>12} {:>12} {:>16.2}",
            field.as_str(),
            format_count(tokens),
            format_count(postings),
            avg
        ));
    }
    section_bot();
    println!();
    Ok(())
}

fn run_search(file: &Path, query: &str, options: SearchOptions, json: bool) -> Result<()> {
    let engine = SearchEngine::with_options(open(file)?, options);

    let started = Instant::now();
    let results = engine
        .try_search(query)
        .with_context(|| format!("search for {:?} failed", query))?;
    let elapsed = started.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results for {:?}", query);
        return Ok(());
    }

    println!();
    for (i, result) in results.iter().enumerate() {
        print_result(i + 1, result);
    }
    eprintln!(
        "{}",
        display::themed(
            display::GRAY,
            &[],
            &format!("{} results in {:.1?}", results.len(), elapsed)
        )
    );
    Ok(())
}

fn open(file: &Path) -> Result<DocumentIndex> {
    open_index(file).with_context(|| format!("failed to open {}", file.display()))
}
