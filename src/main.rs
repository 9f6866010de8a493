mod api;
mod export;
mod model;
mod parser;
mod pdf;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "doe_scraper", about = "DOE/SC pension portaria scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full pipeline: search, resolve, download, extract, export CSV
    Run {
        /// Year to search (default: current year)
        #[arg(short, long)]
        year: Option<i32>,
        /// Month to search, repeatable (default: 1-12)
        #[arg(short, long)]
        month: Vec<u32>,
        /// Output CSV path
        #[arg(short, long, default_value = "portarias_doe.csv")]
        out: PathBuf,
        /// Max matérias to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Search one month and list the matched matérias
    Search {
        #[arg(short, long)]
        year: Option<i32>,
        #[arg(short, long)]
        month: u32,
    },
    /// Extract portarias from a local PDF and print them
    Extract {
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { year, month, out, limit } => run(year, month, out, limit).await,
        Commands::Search { year, month } => search(year, month).await,
        Commands::Extract { path } => extract(&path),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

async fn run(
    year: Option<i32>,
    months: Vec<u32>,
    out: PathBuf,
    limit: Option<usize>,
) -> Result<()> {
    let year = year.unwrap_or_else(current_year);
    let months = if months.is_empty() {
        (1..=12).collect()
    } else {
        months
    };
    let client = api::DoeClient::new()?;

    println!("Searching matérias for {}...", year);
    let mut materias = Vec::new();
    for mes in &months {
        let found = client.search_materias(year, *mes).await?;
        info!("{}/{}: {} matérias", mes, year, found.len());
        materias.extend(found);
    }
    if let Some(n) = limit {
        materias.truncate(n);
    }
    println!("{} matérias found", materias.len());

    let pb = ProgressBar::new(materias.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let mut rows = Vec::new();
    for materia in &materias {
        let url = match client
            .resolve_pdf_url(materia.cd_jornal, materia.cd_materia)
            .await?
        {
            Some(url) => url,
            None => {
                warn!("No PDF URL for matéria {} ({})", materia.cd_materia, materia.ds_titulo);
                pb.inc(1);
                continue;
            }
        };

        let Some(bytes) = client.download_pdf(&url).await? else {
            pb.inc(1);
            continue;
        };
        let Some(text) = pdf::extract_text(&bytes) else {
            pb.inc(1);
            continue;
        };

        for record in parser::parse_document(&text) {
            rows.push(model::ResultRow::new(record, materia));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    export::write_csv(&out, &rows)?;
    println!("{} portarias exported to {}", rows.len(), out.display());
    Ok(())
}

async fn search(year: Option<i32>, month: u32) -> Result<()> {
    let year = year.unwrap_or_else(current_year);
    let client = api::DoeClient::new()?;
    let materias = client.search_materias(year, month).await?;

    if materias.is_empty() {
        println!("No matérias for {}/{}.", month, year);
        return Ok(());
    }
    for (i, m) in materias.iter().enumerate() {
        println!(
            "{:>3} | {:<10} | edição {:<7} | {}",
            i + 1,
            m.data_publicacao(),
            m.edicao(),
            m.ds_titulo
        );
    }
    println!("\n{} matérias", materias.len());
    Ok(())
}

fn extract(path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)?;
    let Some(text) = pdf::extract_text(&bytes) else {
        anyhow::bail!("Could not extract text from {}", path.display());
    };

    let records = parser::parse_document(&text);
    if records.is_empty() {
        println!("No matching portarias.");
        return Ok(());
    }
    for r in &records {
        println!(
            "PORTARIA Nº {} - {}",
            r.numero.as_deref().unwrap_or("?"),
            r.data.as_deref().unwrap_or("?")
        );
        println!("  nome:      {}", r.nome.as_deref().unwrap_or(""));
        println!("  matrícula: {}", r.matricula.as_deref().unwrap_or(""));
        println!("  cargo:     {}", r.cargo.as_deref().unwrap_or(""));
        println!("  órgão:     {}", r.orgao.as_deref().unwrap_or(""));
    }
    println!("\n{} portarias", records.len());
    Ok(())
}

fn current_year() -> i32 {
    chrono::Local::now().year()
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
