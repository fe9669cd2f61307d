//! deckwright CLI - PowerPoint deck generation tool
//!
//! Builds the OIDC beta session deck and inspects `.pptx` files.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use deckwright::render::{JsonFormat, RenderOptions};
use deckwright::{DeckOptions, SlideSize};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Build and inspect PowerPoint decks
#[derive(Parser)]
#[command(
    name = "deckwright",
    author = "iyulab",
    version,
    about = "Build and inspect PowerPoint decks",
    long_about = "deckwright - PowerPoint deck generation tool.\n\n\
                  Run without a command to build OIDC_Beta_Intro.pptx in the current directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the OIDC beta session deck
    Build {
        /// Output file path
        #[arg(short, long, default_value = deckwright::content::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Canvas size
        #[arg(long, default_value = "widescreen")]
        size: SizeMode,

        /// Bullet font size in points (1-4000)
        #[arg(long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..=4000))]
        body_size: u32,
    },

    /// Print a slide-by-slide outline of a deck
    Outline {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List slide titles only
        #[arg(long)]
        titles_only: bool,

        /// Truncate titles to this many columns
        #[arg(long)]
        width: Option<usize>,
    },

    /// Show deck information
    Info {
        /// Input file path
        input: PathBuf,

        /// Print the full deck model as JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON (no indentation)
        #[arg(long, requires = "json")]
        compact: bool,
    },

    /// Show version information
    Version,
}

/// Title column width of `info`.
const TITLE_WIDTH: usize = 60;

/// Canvas size
#[derive(Clone, ValueEnum)]
enum SizeMode {
    /// 13.33 x 7.5 in (16:9)
    Widescreen,
    /// 10 x 7.5 in (4:3)
    Standard,
}

impl From<SizeMode> for SlideSize {
    fn from(mode: SizeMode) -> Self {
        match mode {
            SizeMode::Widescreen => SlideSize::WIDESCREEN,
            SizeMode::Standard => SlideSize::STANDARD,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        None => build(&DeckOptions::default(), &mut io::stdout().lock())?,

        Some(Commands::Build {
            output,
            size,
            body_size,
        }) => {
            let options = DeckOptions::new()
                .with_output(output)
                .with_slide_size(size.into())
                .with_body_size(body_size);
            build(&options, &mut io::stdout().lock())?;
        }

        Some(Commands::Outline {
            input,
            output,
            titles_only,
            width,
        }) => {
            let pb = create_spinner("Reading deck...");

            let prs = deckwright::open_presentation(&input)?;

            let mut options = if titles_only {
                RenderOptions::titles_only()
            } else {
                RenderOptions::new()
            };
            if let Some(width) = width {
                options = options.with_max_title_width(width);
            }
            let outline = deckwright::render::to_outline(&prs, &options)?;

            pb.finish_and_clear();
            write_output(output.as_deref(), &outline)?;

            if let Some(path) = output {
                println!("{} Wrote outline: {}", "✓".green().bold(), path.display());
            }
        }

        Some(Commands::Info {
            input,
            json,
            compact,
        }) => {
            let pb = create_spinner("Analyzing deck...");
            let prs = deckwright::open_presentation(&input)?;
            pb.finish_and_clear();

            if json {
                let format = if compact {
                    JsonFormat::Compact
                } else {
                    JsonFormat::Pretty
                };
                write_output(None, &deckwright::render::to_json(&prs, format)?)?;
                return Ok(());
            }

            let size = prs.slide_size();
            println!("{}", "Deck Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            if let Some(ref title) = prs.metadata.title {
                println!("{}: {}", "Title".bold(), title);
            }
            if let Some(ref author) = prs.metadata.author {
                println!("{}: {}", "Author".bold(), author);
            }
            println!(
                "{}: {:.2} x {:.2} in",
                "Canvas".bold(),
                size.width.inches(),
                size.height.inches()
            );
            println!("{}: {}", "Slides".bold(), prs.slide_count());

            println!("\n{}", "Slides".cyan().bold());
            println!("{}", "─".repeat(40));
            for (i, slide) in prs.slides.iter().enumerate() {
                let title = deckwright::render::truncate_to_width(
                    &slide.title_text().replace('\n', " / "),
                    TITLE_WIDTH,
                );
                let paragraphs = slide
                    .shapes
                    .iter()
                    .filter(|s| !s.is_title())
                    .filter_map(|s| s.text_frame.as_ref())
                    .map(|f| f.paragraphs.len())
                    .sum::<usize>();
                let notes = if slide.notes_text().is_empty() {
                    "no notes".dimmed()
                } else {
                    "notes".normal()
                };
                println!(
                    "{:>3}. {} {}",
                    i + 1,
                    title,
                    format!("({} paragraphs, {})", paragraphs, notes).dimmed()
                );
            }
        }

        Some(Commands::Version) => {
            print_version();
        }
    }

    Ok(())
}

/// Build and save a deck, then write the confirmation line to `out`.
fn build<W: Write>(options: &DeckOptions, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_spinner("Building deck...");
    let path = deckwright::save_deck(options)?;
    pb.finish_and_clear();

    writeln!(out, "Saved as {}", path.display())?;
    Ok(())
}

fn print_version() {
    println!("{} {}", "deckwright".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("PowerPoint deck generation");
    println!();
    println!("Output format: PPTX (Office Open XML)");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
