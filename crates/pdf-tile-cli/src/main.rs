use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Tile a poster-sized PDF into 8.5 by 11 inch pages.
#[derive(Parser)]
#[command(name = "pdf-tile", version)]
struct Cli {
    /// Input PDF file
    #[arg(short = 'i', long = "input_pdf")]
    input_pdf: PathBuf,

    /// Output PDF file
    #[arg(short = 'o', long = "output_pdf")]
    output_pdf: PathBuf,

    /// Input PDF width in inches
    #[arg(short = 'w', long = "input_pdf_w")]
    input_pdf_w: u32,

    /// Input PDF length in inches
    #[arg(short = 'l', long = "input_pdf_l")]
    input_pdf_l: u32,

    /// Cut each page by its own size instead of requiring uniform pages
    #[arg(long)]
    per_page: bool,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Print statistics as JSON
    #[arg(long)]
    json: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn print_statistics(stats: &pdf_tile::TileStatistics, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("Tiling Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Grid: {} rows x {} columns", stats.rows, stats.columns);
    println!("  Tiles per page: {}", stats.tiles_per_page);
    println!("  Total output pages: {}", stats.total_output_pages);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = pdf_tile::TileOptions {
        poster_width_in: cli.input_pdf_w,
        poster_length_in: cli.input_pdf_l,
        page_geometry: if cli.per_page {
            pdf_tile::PageGeometry::PerPage
        } else {
            pdf_tile::PageGeometry::Uniform
        },
    };

    if cli.stats_only {
        let source = pdf_tile::load_pdf(&cli.input_pdf)
            .await
            .with_context(|| format!("Failed to read {}", cli.input_pdf.display()))?;
        let stats = pdf_tile::calculate_statistics(&source, &options)?;
        return print_statistics(&stats, cli.json);
    }

    println!("Tiling your poster. Please wait.");
    let stats = pdf_tile::tile_pdf(&cli.input_pdf, &cli.output_pdf, &options)
        .await
        .with_context(|| format!("Failed to tile {}", cli.input_pdf.display()))?;
    log::info!("Wrote {}", cli.output_pdf.display());

    if cli.json {
        print_statistics(&stats, true)?;
    } else {
        println!(
            "Total number of 8.5 by 11 inch pages generated: {}",
            stats.tiles_per_page
        );
        if stats.source_pages > 1 {
            println!(
                "Total output pages across {} source pages: {}",
                stats.source_pages, stats.total_output_pages
            );
        }
    }

    Ok(())
}
