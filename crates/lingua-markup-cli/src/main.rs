//! `lingua-markup`: parse, assemble and view lesson markup from the shell.

mod palette;
mod settings;
mod viewer;

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use lingua_markup_config::Config;
use lingua_markup_engine::{
    LessonData, LessonParser, TemplateAssembler, extract_vocabulary, render_plain,
};

use settings::Settings;

#[derive(Parser)]
#[command(name = "lingua-markup", version, about = "Lesson markup tools")]
struct Cli {
    /// Config file to use instead of ~/.config/lingua-markup/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse markup into a segment stream
    Parse {
        /// Markup file. Reads stdin if omitted.
        file: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Turn a TOML or JSON lesson file into markup
    Assemble {
        /// Lesson file; `.json` is read as JSON, anything else as TOML
        lesson: PathBuf,
    },

    /// List `**term** → translation` pairs found in tutor text
    Vocab {
        /// Text file. Reads stdin if omitted.
        file: Option<PathBuf>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Segments as JSON
    Json,
    /// Plain text without styling
    Text,
    /// Interactive terminal viewer
    View,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Parse { file, format } => {
            let settings = Settings::load(cli.config.as_deref())?;
            run_parse(&settings, file.as_deref(), format)
        }
        Command::Assemble { lesson } => {
            let settings = Settings::load(cli.config.as_deref())?;
            run_assemble(&settings, &lesson)
        }
        Command::Vocab { file } => run_vocab(file.as_deref()),
        Command::Config { action } => run_config(cli.config.as_deref(), action),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn run_parse(settings: &Settings, file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let text = read_input(file)?;
    let segments = LessonParser::new(&settings.keywords).parse(&text);
    log::debug!("parsed {} segments", segments.len());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&segments)?),
        OutputFormat::Text => print!("{}", render_plain(&segments)),
        OutputFormat::View => {
            let title = file.map_or_else(
                || "stdin".to_owned(),
                |path| path.display().to_string(),
            );
            viewer::run(&segments, settings.palette, title)?;
        }
    }
    Ok(())
}

fn load_lesson(path: &Path) -> Result<LessonData> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse lesson {}", path.display()))
    } else {
        toml::from_str(&content)
            .with_context(|| format!("failed to parse lesson {}", path.display()))
    }
}

fn run_assemble(settings: &Settings, path: &Path) -> Result<()> {
    let lesson = load_lesson(path)?;
    print!(
        "{}",
        TemplateAssembler::new(&settings.keywords).assemble(&lesson)
    );
    Ok(())
}

fn run_vocab(file: Option<&Path>) -> Result<()> {
    let text = read_input(file)?;
    for term in extract_vocabulary(&text) {
        match term.pronunciation {
            Some(guide) => println!("{} → {} ({guide})", term.term, term.translation),
            None => println!("{} → {}", term.term, term.translation),
        }
    }
    Ok(())
}

fn run_config(explicit: Option<&Path>, action: ConfigAction) -> Result<()> {
    let path = explicit.map_or_else(Config::config_path, Config::resolve_path);

    match action {
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "config file already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save_to_path(&path)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
