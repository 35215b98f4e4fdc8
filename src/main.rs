//! kortone - Browse a traditional color catalog from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use kortone_catalog::parser::parse_catalog_file;
use kortone_catalog::validation::validate_load;
use kortone_catalog::view::{format_detail, format_results};
use kortone_catalog::{
    CatalogConfig, GraphOptions, HeaderPolicy, Language, LoaderConfig, PaletteChange, Session,
};

/// Search, rank and combine traditional colors.
#[derive(Parser, Debug)]
#[command(name = "kortone")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Color dataset (.csv, .tsv or .json)
    #[arg(short, long, global = true, default_value = "Colors.csv")]
    input: PathBuf,

    /// Display language (ko, en)
    #[arg(short, long, global = true, default_value = "ko")]
    lang: String,

    /// Read at most this many data rows
    #[arg(long, global = true)]
    limit: Option<usize>,

    /// Header row handling (detect, present, absent)
    #[arg(long, global = true, default_value = "detect")]
    header: String,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find colors whose name or alternative names contain a term
    Search { term: String },
    /// Rank colors by RGB distance from a reference color
    Similar {
        /// Reference color, #RRGGBB
        hex: String,
        /// Number of results
        #[arg(long, default_value_t = kortone_catalog::config::DEFAULT_TOP_N)]
        top: usize,
    },
    /// Print the relationship graph as JSON
    Graph {
        /// Include "similar to" edges
        #[arg(long)]
        similar: bool,
        /// Leave out "used with" edges
        #[arg(long)]
        no_used_with: bool,
    },
    /// List every color
    Catalog,
    /// Show one color in detail
    Detail { id: usize },
    /// Build a palette and save it as PNG
    Palette {
        /// Colors to toggle into the palette, in order
        #[arg(required = true)]
        colors: Vec<String>,
        /// Order the palette like the catalog
        #[arg(long)]
        sort: bool,
        /// Output PNG path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Save a color chip as PNG
    Chip {
        id: usize,
        /// Output PNG path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check the dataset and report problems
    Validate,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let language = Language::from_code(&args.lang).unwrap_or_else(|| {
        warn!("Unknown language '{}', using ko", args.lang);
        Language::Korean
    });
    let header = HeaderPolicy::from_str_opt(&args.header).unwrap_or_else(|| {
        warn!("Unknown header policy '{}', using detect", args.header);
        HeaderPolicy::Detect
    });

    let mut config = CatalogConfig::new(LoaderConfig {
        row_limit: args.limit,
        header,
        ..Default::default()
    });
    config.language = language;

    if let Command::Similar { top, .. } = &args.command {
        config.top_n = *top;
    }
    if let Command::Graph {
        similar,
        no_used_with,
    } = &args.command
    {
        config.graph = GraphOptions {
            used_with: !no_used_with,
            similar: *similar,
        };
    }

    let input = args.input;
    let open = |config: CatalogConfig| {
        Session::open(&input, config).with_context(|| format!("Failed to load {}", input.display()))
    };

    match args.command {
        Command::Validate => validate(&input, &config.loader)?,
        Command::Search { term } => {
            let mut session = open(config)?;
            let items = session.submit_search(&term)?;
            print_listing(&items, args.json)?;
        }
        Command::Similar { hex, .. } => {
            let mut session = open(config)?;
            let items = session.select_reference_color(&hex)?;
            print_listing(&items, args.json)?;
        }
        Command::Graph { .. } => {
            let session = open(config)?;
            println!("{}", session.graph().to_json()?);
        }
        Command::Catalog => {
            let session = open(config)?;
            let entries = session.catalog_entries();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for e in &entries {
                    println!(
                        "{:<4}{}  {}  RGB: {}  Pantone: {}",
                        e.id, e.hex, e.name, e.rgb_code, e.pantone_code
                    );
                }
            }
        }
        Command::Detail { id } => {
            let session = open(config)?;
            let detail = session.click_node(id)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                print!("{}", format_detail(&detail));
            }
        }
        Command::Palette {
            colors,
            sort,
            output,
        } => {
            let mut session = open(config)?;
            for color in &colors {
                match session.toggle_palette_color(color) {
                    Ok(PaletteChange::Added) => info!("Added {}", color),
                    Ok(PaletteChange::Removed) => info!("Removed {}", color),
                    Err(err) => error!("{}", err),
                }
            }
            if sort {
                session.sort_palette();
            }

            let plan = session.request_export()?;
            let output_path = output.unwrap_or_else(|| PathBuf::from(&plan.file_name));
            plan.save_png(&output_path)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
        }
        Command::Chip { id, output } => {
            let session = open(config)?;
            let chip = session.color_chip(id)?;
            let output_path = output.unwrap_or_else(|| PathBuf::from(chip.file_name()));
            chip.save_png(&output_path)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            for line in chip.label_lines() {
                info!("{}", line);
            }
        }
    }

    Ok(())
}

fn validate(input: &std::path::Path, loader: &LoaderConfig) -> Result<()> {
    let report = parse_catalog_file(input, loader)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    let validation = validate_load(&report);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    info!("Validation passed: {} color(s)", report.catalog.len());
    Ok(())
}

fn print_listing(items: &[kortone_catalog::view::SearchResultItem], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else if items.is_empty() {
        info!("No matching colors");
    } else {
        print!("{}", format_results(items));
    }
    Ok(())
}
