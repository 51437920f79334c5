//! eduformat CLI - lesson material formatting tool

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Deserialize;

use eduformat::builder::DATE_FORMAT;
use eduformat::parser::{classifier, split_lines};
use eduformat::{
    export, format_materials, render, BlockKind, DocumentBuilder, FormatOptions, JsonFormat,
    Material, MaterialType, Metadata, RawDocument, StyleProfile,
};

#[derive(Parser)]
#[command(name = "eduformat")]
#[command(version)]
#[command(about = "Format generated lesson materials into GOST-styled documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a text file
    Format {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Subject id (e.g. mathematics)
        #[arg(long)]
        subject: String,

        /// Class name (e.g. 5А)
        #[arg(long = "class")]
        class_name: String,

        /// Lesson topic
        #[arg(long)]
        topic: String,

        /// Material type id (lesson-plan, presentation, worksheet, test, homework, summary)
        #[arg(long = "type", value_parser = parse_material_type)]
        material_type: MaterialType,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Format a serialized request
    Request {
        /// Request JSON file
        #[arg(value_name = "REQUEST")]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Format every material of a generation result
    Batch {
        /// Materials JSON file
        #[arg(value_name = "MATERIALS")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Footer date (DD.MM.YYYY)
        #[arg(long, value_parser = parse_date, env = "EDUFORMAT_DATE")]
        date: Option<NaiveDate>,
    },

    /// Print each line with its classified block kind
    Classify {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show the style profile
    Style,
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Output plain text instead of the JSON tree
    #[arg(long)]
    text: bool,

    /// Output compact JSON
    #[arg(long, conflicts_with = "text")]
    compact: bool,

    /// Footer date (DD.MM.YYYY)
    #[arg(long, value_parser = parse_date, env = "EDUFORMAT_DATE")]
    date: Option<NaiveDate>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// Input of the `batch` command.
#[derive(Deserialize)]
struct BatchInput {
    metadata: Metadata,
    materials: BTreeMap<String, Material>,
}

fn parse_material_type(s: &str) -> Result<MaterialType, String> {
    s.parse().map_err(|e: eduformat::Error| e.to_string())
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| format!("expected DD.MM.YYYY: {}", e))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Format {
            input,
            subject,
            class_name,
            topic,
            material_type,
            output,
        } => cmd_format_file(
            &input,
            Metadata::new(subject, class_name, topic),
            material_type,
            &output,
        ),
        Commands::Request { input, output } => cmd_request(&input, &output),
        Commands::Batch {
            input,
            output,
            date,
        } => cmd_batch(&input, output.as_deref(), date),
        Commands::Classify { input } => cmd_classify(&input),
        Commands::Style => cmd_style(),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn options_for(date: Option<NaiveDate>) -> FormatOptions {
    match date {
        Some(date) => FormatOptions::new().with_date(date),
        None => FormatOptions::new(),
    }
}

fn cmd_format(raw: &RawDocument, args: &OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let result = DocumentBuilder::with_options(options_for(args.date)).build_with_stats(raw)?;
    log::info!(
        "{}: {} headings, {} list items, {} tables",
        raw.material_type,
        result.stats.heading_count(),
        result.stats.list_item_count,
        result.stats.table_count
    );

    let rendered = if args.text {
        render::to_text(&result.document)?
    } else if args.compact {
        render::to_json(&result.document, JsonFormat::Compact)?
    } else {
        render::to_json(&result.document, JsonFormat::Pretty)?
    };

    if let Some(path) = &args.output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn cmd_format_file(
    input: &Path,
    metadata: Metadata,
    material_type: MaterialType,
    args: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let raw = RawDocument::new(content, metadata, material_type);
    cmd_format(&raw, args)
}

fn cmd_request(input: &Path, args: &OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let raw: RawDocument = serde_json::from_str(&json)?;
    cmd_format(&raw, args)
}

fn cmd_batch(
    input: &Path,
    output: Option<&Path>,
    date: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = fs::read_to_string(input)?;
    let batch: BatchInput = serde_json::from_str(&json)?;

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let results = format_materials(&batch.materials, &batch.metadata, &options_for(date));

    println!("{}", "Formatted materials".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (id, result) in &results {
        match result {
            Ok(doc) => {
                // Only known ids build successfully
                let material_type: MaterialType = id.parse()?;
                let name = export::file_name(material_type, &batch.metadata, "json");
                fs::write(output_dir.join(&name), render::to_json(doc, JsonFormat::Pretty)?)?;
                println!("  {} {}", "✓".green(), name);
            }
            Err(e) => println!("  {} {}: {}", "✗".red(), id, e),
        }
    }

    let skipped = batch.materials.len() - results.len();
    if skipped > 0 {
        println!("  {} {} skipped", "-".yellow(), skipped);
    }

    println!();
    println!("{}: {}", "Bundle".bold(), export::zip_name(&batch.metadata));

    Ok(())
}

fn cmd_classify(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let lines = split_lines(&content);

    for (i, line) in lines.iter().enumerate() {
        let next = lines.get(i + 1).map(|l| l.text.as_str());
        let kind = classifier::classify(&line.text, next);
        let padded = format!("{:<12}", kind.label());
        let label = match kind {
            BlockKind::MainHeading => padded.as_str().cyan().bold(),
            BlockKind::SubHeading => padded.as_str().blue().bold(),
            BlockKind::TableRow => padded.as_str().magenta(),
            BlockKind::ListItem => padded.as_str().green(),
            BlockKind::Paragraph => padded.as_str().dimmed(),
        };
        let number = format!("{:>4}", line.source_line);
        println!("{} {} {}", number.as_str().dimmed(), label, line.text);

        let matches = classifier::matching_rules(&line.text, next);
        if matches.len() > 1 {
            let names: Vec<&str> = matches.iter().map(|k| k.label()).collect();
            println!("     {} {}", "also matches:".yellow(), names[1..].join(", "));
        }
    }

    Ok(())
}

fn cmd_style() -> Result<(), Box<dyn std::error::Error>> {
    let style = StyleProfile::GOST;

    println!("{}", "Style Profile (GOST)".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Font".bold(), style.body_font);
    println!("{}: {} pt", "Body".bold(), style.body_size);
    println!("{}: {} pt", "Title".bold(), style.heading_size);
    println!("{}: {} pt", "Heading".bold(), style.subheading_size);
    println!("{}: {} pt", "Table".bold(), style.table_size);
    println!(
        "{}: {} x {} cm",
        "Page".bold(),
        style.page_width,
        style.page_height
    );
    println!(
        "{}: top {} / bottom {} / left {} / right {} cm",
        "Margins".bold(),
        style.margins.top,
        style.margins.bottom,
        style.margins.left,
        style.margins.right
    );
    println!("{}: {}×", "Line spacing".bold(), style.line_spacing);
    println!("{}: {} cm", "First-line indent".bold(), style.first_line_indent);
    println!("{}: {} cm", "Hanging indent".bold(), style.hanging_indent);
    println!("{}: {:.2} pt", "Text width".bold(), style.text_width_pt());

    println!();
    println!("{}", serde_json::to_string_pretty(&style)?);

    Ok(())
}
