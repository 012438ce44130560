mod export;
mod extract;
mod ingest;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use walkdir::WalkDir;

use extract::{ExtractionResult, FieldCounts, NOT_FOUND};

#[derive(Parser)]
#[command(name = "cv_extract", about = "Resume field extractor: name, desired title, phone")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from every resume under a directory
    Run {
        /// Directory with PDF/DOCX/TXT resumes
        dir: PathBuf,
        /// Write results to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Max files to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Extract one file and show everything found (debugging)
    Show {
        /// A single PDF/DOCX/TXT file
        file: PathBuf,
        /// Print the result record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { dir, output, limit } => {
            let files = collect_files(&dir, limit);
            if files.is_empty() {
                println!("No PDF/DOCX/TXT files found under {}", dir.display());
                return Ok(());
            }
            println!("Processing {} files...", files.len());
            let results = process_files(&files);

            println!(
                "{:>3} | {:<32} | {:<26} | {:<30} | {:<14}",
                "#", "File", "Name", "Title", "Phone"
            );
            println!("{}", "-".repeat(116));
            for (i, r) in results.iter().enumerate() {
                println!(
                    "{:>3} | {:<32} | {:<26} | {:<30} | {:<14}",
                    i + 1,
                    truncate(&r.file, 32),
                    truncate(display(&r.name), 26),
                    truncate(display(&r.title), 30),
                    display(&r.phone),
                );
            }

            let mut counts = FieldCounts::default();
            for r in &results {
                counts.add(r);
            }
            counts.print();

            if let Some(path) = output {
                export::write_csv(&path, &results)?;
                println!("Wrote {}", path.display());
            }
            Ok(())
        }
        Commands::Show { file, json } => {
            let text = ingest::read_file(&file)?;
            let filename = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let result = extract::extract_fields(&text, &filename);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Name:  {}", display(&result.name));
                println!("Title: {}", display(&result.title));
                println!("Phone: {}", display(&result.phone));

                let phones = extract::phone::find_all(&text);
                if phones.len() > 1 {
                    println!("\nAll phone candidates: {}", phones.join(", "));
                }
                if text.trim().is_empty() {
                    println!("\n(no text extracted from document)");
                } else {
                    println!("\n--- Text (first 800 chars) ---");
                    println!("{}", char_prefix(&text, 800));
                }
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn collect_files(dir: &Path, limit: Option<usize>) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            matches!(
                e.path()
                    .extension()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_lowercase())
                    .as_deref(),
                Some("pdf" | "docx" | "txt")
            )
        })
        .map(|e| e.into_path())
        .collect();
    files.sort();
    if let Some(n) = limit {
        files.truncate(n);
    }
    files
}

fn process_files(files: &[PathBuf]) -> Vec<ExtractionResult> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut results = Vec::with_capacity(files.len());
    for chunk in files.chunks(64) {
        let batch: Vec<ExtractionResult> = chunk
            .par_iter()
            .map(|path| {
                let text = match ingest::read_file(path) {
                    Ok(t) => t,
                    Err(e) => {
                        tracing::warn!("{e:#}");
                        String::new()
                    }
                };
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                extract::extract_fields(&text, &filename)
            })
            .collect();
        results.extend(batch);
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    results
}

fn display(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or(NOT_FOUND)
}

fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
