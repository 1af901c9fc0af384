use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use vanshavali_data::{bundled_dataset, parse_dataset, transliterate, Dataset};
use vanshavali_layout::{resolve_lineage, LayoutConfig, LayoutMode};
use vanshavali_view::{Controller, ControllerOptions, Frame};

use crate::error::{CliError, Result};
use crate::output::{Format, Printer};
use crate::session::run_session;

/// Explore a family tree one lineage at a time.
#[derive(Debug, Parser)]
#[command(name = "vanshavali", version, about)]
pub struct Cli {
    /// Family tree JSON. Defaults to the bundled tree.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Layout tunables as a (partial) JSON object.
    #[arg(long, global = true)]
    pub style: Option<PathBuf>,

    /// Use the compact single-column layout.
    #[arg(long, global = true, conflicts_with = "viewport_width")]
    pub mobile: bool,

    /// Pick the layout from a viewport width in pixels.
    #[arg(long, global = true)]
    pub viewport_width: Option<f32>,

    #[arg(long, global = true, value_enum, default_value_t = Format::Ascii)]
    pub format: Format,

    /// Label nodes with names instead of ids.
    #[arg(long, global = true)]
    pub names: bool,

    /// Maximum drawing width in columns.
    #[arg(long, global = true, default_value_t = 120)]
    pub width: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw the whole tree.
    Overview,
    /// Focus a person by id.
    Focus { id: String },
    /// Focus the first person whose name contains the text.
    Search {
        text: String,
        /// Transliterate Latin input to Devanagari first.
        #[arg(long)]
        latin: bool,
    },
    /// Print ancestors and children without laying anything out.
    Lineage { id: String },
    /// Read interaction commands from stdin.
    Session {
        #[arg(long)]
        latin: bool,
    },
}

impl Cli {
    pub fn mode(&self) -> LayoutMode {
        match (self.mobile, self.viewport_width) {
            (true, _) => LayoutMode::Mobile,
            (false, Some(width)) => LayoutMode::for_viewport_width(width),
            (false, None) => LayoutMode::Desktop,
        }
    }

    fn printer(&self) -> Printer {
        Printer {
            format: self.format,
            names: self.names,
            width: self.width,
        }
    }

    fn dataset(&self) -> Result<Dataset> {
        match &self.data {
            Some(path) => Ok(parse_dataset(&fs::read_to_string(path)?)?),
            None => Ok(bundled_dataset()?),
        }
    }

    fn config(&self) -> Result<LayoutConfig> {
        match &self.style {
            Some(path) => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
            None => Ok(LayoutConfig::default()),
        }
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    let dataset = cli.dataset()?;
    let options = ControllerOptions {
        mode: cli.mode(),
        config: cli.config()?,
    };
    debug!(mode = ?options.mode, people = dataset.people.len(), "starting");
    let printer = cli.printer();

    let mut controller = Controller::new(dataset, options)?;
    match &cli.command {
        Command::Overview => print_frame(&printer, controller.frame()),
        Command::Focus { id } => {
            if !controller.index().contains(id) {
                return Err(CliError::NotAPerson(id.clone()));
            }
            let frame = controller.select_node(id)?;
            print_frame(&printer, frame)
        }
        Command::Search { text, latin } => {
            let query = if *latin { transliterate(text) } else { text.clone() };
            let frame = controller.submit_search(&query)?;
            print_frame(&printer, frame)
        }
        Command::Session { latin } => {
            run_session(&mut controller, &printer, *latin, io::stdin().lock(), io::stdout().lock())
        }
        Command::Lineage { id } => {
            let lineage = resolve_lineage(controller.index(), id)?;
            println!("{}", printer.lineage(&lineage)?);
            Ok(())
        }
    }
}

fn print_frame(printer: &Printer, frame: &Frame) -> Result<()> {
    println!("{}", printer.frame(frame)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_width_picks_mode() {
        let cli = Cli::try_parse_from(["vanshavali", "--viewport-width", "400", "overview"]).unwrap();
        assert_eq!(cli.mode(), LayoutMode::Mobile);

        let cli = Cli::try_parse_from(["vanshavali", "overview", "--viewport-width", "1024"]).unwrap();
        assert_eq!(cli.mode(), LayoutMode::Desktop);

        let cli = Cli::try_parse_from(["vanshavali", "--mobile", "focus", "3"]).unwrap();
        assert_eq!(cli.mode(), LayoutMode::Mobile);
        assert!(matches!(cli.command, Command::Focus { ref id } if id == "3"));
    }

    #[test]
    fn mobile_conflicts_with_viewport_width() {
        assert!(
            Cli::try_parse_from(["vanshavali", "--mobile", "--viewport-width", "900", "overview"])
                .is_err()
        );
    }

    #[test]
    fn search_accepts_latin_flag() {
        let cli = Cli::try_parse_from(["vanshavali", "search", "samar", "--latin", "--format", "json"])
            .unwrap();
        assert_eq!(cli.format, Format::Json);
        assert!(matches!(cli.command, Command::Search { latin: true, .. }));
    }

    #[test]
    fn focusing_the_decoration_is_reported() {
        let cli = Cli::try_parse_from(["vanshavali", "focus", "veda"]).unwrap();
        assert!(matches!(run(&cli), Err(CliError::NotAPerson(id)) if id == "veda"));
    }

    #[test]
    fn unreachable_lineage_is_an_error() {
        let cli = Cli::try_parse_from(["vanshavali", "lineage", "nobody"]).unwrap();
        assert!(matches!(run(&cli), Err(CliError::Lineage(_))));
    }
}
