mod app;
mod clipboard;
mod color;
mod config;
mod error;
mod export;
mod generator;
mod input;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use color::Color;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "nuancier", version, about = "Color palette generator for the terminal")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui {
        /// Start from this base color instead of the configured one.
        #[arg(long)]
        color: Option<Color>,
    },
    /// Print every palette derived from a color (headless).
    Generate {
        /// Base color as `#RRGGBB`.
        color: String,
        /// Print export documents as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Write palette export files (headless).
    Export {
        /// Base color as `#RRGGBB`.
        color: Color,
        /// Only export this style (e.g. "Triade").
        #[arg(long)]
        style: Option<String>,
        /// Target directory; defaults to `export.dir` from the config.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the colors of a previously exported palette file (headless).
    Show {
        /// Path to a `*-palette.json` file.
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let command = cli.command.unwrap_or(Command::Tui { color: None });

    let interactive = matches!(command, Command::Tui { .. });
    init_logging(&cfg, interactive)?;

    match command {
        Command::Tui { color } => {
            let mouse = cfg.input.mouse;
            let mut app = app::App::new(cfg, color)?;
            let mut terminal = tui::TerminalGuard::enter(mouse).context("init terminal")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate { color, json } => {
            let palettes = generator::generate_hex(&color)?;
            if json {
                let color = Color::parse_hex(&color)?;
                let docs: Vec<_> = palettes
                    .iter()
                    .map(|p| export::PaletteExport::new(p, color))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&docs)?);
            } else {
                print_palettes(&palettes);
            }
        }
        Command::Export { color, style, out } => {
            let dir = out.unwrap_or_else(|| cfg.export.dir.clone());
            let palettes = match style.as_deref() {
                Some(name) => {
                    let style = generator::find_style(name)
                        .with_context(|| format!("unknown palette style: {name}"))?;
                    vec![style.apply(color)]
                }
                None => generator::generate(color),
            };
            for palette in &palettes {
                let path = export::save(palette, color, &dir)
                    .with_context(|| format!("export {}", palette.name()))?;
                println!("{}", path.display());
            }
        }
        Command::Show { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("read {}", file.display()))?;
            let doc = export::parse(&raw).with_context(|| format!("parse {}", file.display()))?;
            println!("{} (base {})", doc.name, doc.base_color);
            let hexes: Vec<String> = doc.colors().iter().map(|c| c.hex()).collect();
            println!("    {}", hexes.join("  "));
        }
    }

    Ok(())
}

/// The TUI owns stdout, so interactive sessions log to a file instead.
fn init_logging(cfg: &config::Config, interactive: bool) -> anyhow::Result<()> {
    let level = cfg.log_level()?;
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level);

    if interactive {
        let path = cfg.log_file();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open log file {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn print_palettes(palettes: &[generator::GeneratedPalette]) {
    for palette in palettes {
        println!("{} ({})", palette.name(), palette.description());
        let hexes: Vec<String> = palette.colors().iter().map(|c| c.hex()).collect();
        println!("    {}", hexes.join("  "));
    }
}
