mod classify;
mod error;
mod extract;
mod gzip;
mod output;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::error::Error;

const EXAMPLES: &str = "\
Examples:
  unprogmem elop.cpp                           # Decompress to elop_decompressed.html
  unprogmem elop.cpp -o web_interface.html     # Specify output filename
  unprogmem elop.cpp -o /tmp/                  # Output to directory
  unprogmem elop.cpp --stats                   # Show compression statistics";

/// Decompress gzip-compressed HTML/data from firmware byte arrays
#[derive(Parser, Debug)]
#[command(version, about, after_help = EXAMPLES)]
struct Args {
    /// Source file containing the compressed byte array
    input_file: PathBuf,

    /// Output file path (default: input_name_decompressed.ext)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show compression statistics
    #[arg(long)]
    stats: bool,

    /// Keep the raw compressed bytes alongside the output
    #[arg(long)]
    temp: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    ctrlc::set_handler(|| {
        eprintln!("\n{}", Error::Cancelled);
        process::exit(1);
    })?;

    run(&args)?;

    Ok(())
}

fn run(args: &Args) -> Result<(), Error> {
    if !args.input_file.is_file() {
        return Err(Error::MissingInput(args.input_file.clone()));
    }

    info!("Processing file: {}", args.input_file.display());

    let source = fs::read_to_string(&args.input_file).map_err(|e| {
        Error::MalformedInput(format!(
            "Error reading file {}: {e}",
            args.input_file.display()
        ))
    })?;

    let values = extract::byte_array(&source)?;
    info!("Extracted {} bytes from array", values.len());

    let compressed = gzip::to_bytes(&values)?;
    let content = gzip::decompress(&compressed)?;

    let kind = classify::detect(&content);
    info!("Detected content type: {kind}");

    let explicit_is_dir = args.output.as_deref().is_some_and(Path::is_dir);
    let out_path = output::resolve_path(
        args.output.as_deref(),
        explicit_is_dir,
        &args.input_file,
        kind,
    );

    output::write_text(&out_path, &content)?;
    println!("Decompressed content saved to: {}", out_path.display());

    if args.stats {
        print!("{}", format_stats(compressed.len(), content.len()));
    }

    if args.temp {
        let gz_path = out_path.with_extension("gz");
        output::write_raw(&gz_path, &compressed)?;
        println!("Temporary compressed file saved to: {}", gz_path.display());
    }

    println!("Decompression completed successfully!");

    Ok(())
}

fn format_stats(compressed: usize, decompressed: usize) -> String {
    let ratio = if compressed > 0 {
        decompressed as f64 / compressed as f64
    } else {
        0.0
    };
    // an empty payload would divide by zero
    let saved = if decompressed > 0 {
        (decompressed as f64 - compressed as f64) / decompressed as f64 * 100.0
    } else {
        0.0
    };

    format!(
        "\nCompression Statistics:\n  \
         Compressed size:   {compressed} bytes\n  \
         Decompressed size: {decompressed} bytes\n  \
         Compression ratio: {ratio:.1}x\n  \
         Space saved:       {saved:.1}%\n"
    )
}
