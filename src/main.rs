use std::path::PathBuf;

use clap::{Parser, Subcommand};
use parts_juggler::catalog::Catalogs;
use parts_juggler::config::CatalogPaths;
use parts_juggler::convert::{self, ConversionReport, ConvertOptions};
use parts_juggler::io::studio_xml::StudioOptions;
use parts_juggler::logging::{LogConfig, init_logging};
use parts_juggler::{Result, ToolError};
use tracing::info;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(&LogConfig::from_verbosity(cli.verbose)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = CatalogPaths::resolve(cli.config.as_deref(), cli.catalog_dir.as_deref())?;
    let report = match cli.command {
        Command::FromOwl(args) => {
            let input = existing_input(args.input)?;
            let output = args.output.unwrap_or_else(|| convert::standard_path(&input));
            let catalogs = Catalogs::load(&paths)?;
            let options = ConvertOptions {
                strict: cli.strict,
                ..Default::default()
            };
            convert::owl_to_standard(&input, &output, &catalogs, options)?
        }
        Command::ToBl(args) => {
            let input = existing_input(args.input)?;
            let output = args.output.unwrap_or_else(|| convert::studio_path(&input));
            let catalogs = Catalogs::load_colors(&paths)?;
            let options = ConvertOptions {
                strict: cli.strict,
                studio: args.studio.into(),
            };
            convert::standard_to_studio(&input, &output, &catalogs, options)?
        }
        Command::OwlToBl(args) => {
            let input = existing_input(args.input)?;
            let output = args.output.unwrap_or_else(|| convert::studio_path(&input));
            let catalogs = Catalogs::load(&paths)?;
            let options = ConvertOptions {
                strict: cli.strict,
                studio: args.studio.into(),
            };
            convert::owl_to_studio(&input, &output, &catalogs, options)?
        }
    };
    log_report(&report);
    Ok(())
}

fn existing_input(path: PathBuf) -> Result<PathBuf> {
    if !path.exists() {
        return Err(ToolError::MissingInput(path));
    }
    Ok(path)
}

fn log_report(report: &ConversionReport) {
    info!(
        rows = report.rows_read,
        parts = report.parts_written,
        quantity = report.total_quantity,
        unresolved = report.unresolved.len(),
        "conversion finished"
    );
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Parts Juggler: convert parts lists between BrickOwl, standard CSV and BrickLink XML."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the color mapping, parts catalog and override tables.
    #[arg(long, global = true)]
    catalog_dir: Option<PathBuf>,

    /// JSON file naming the reference tables.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fail instead of guessing when a part number is not in any catalog.
    #[arg(long, global = true)]
    strict: bool,

    /// Increase diagnostic output (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// BrickOwl CSV to standard CSV.
    #[command(alias = "from_owl")]
    FromOwl(OwlArgs),

    /// Standard CSV to BrickLink XML.
    #[command(alias = "to_bl")]
    ToBl(StudioArgs),

    /// BrickOwl CSV straight to BrickLink XML.
    #[command(alias = "owl2link")]
    OwlToBl(StudioArgs),
}

#[derive(clap::Args)]
struct OwlArgs {
    /// BrickOwl order export.
    input: PathBuf,

    /// Output path; defaults to the input with a `.bricks` extension.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(clap::Args)]
struct StudioArgs {
    /// Input parts list.
    input: PathBuf,

    /// Output path; defaults to the input with a `.xml` extension.
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[command(flatten)]
    studio: StudioFlags,
}

#[derive(clap::Args)]
struct StudioFlags {
    /// Write as BrickLink wishlist XML (rather than a Stud.io parts list).
    #[arg(long, alias = "wishlist")]
    as_wishlist: bool,

    /// Leave colors out of the XML.
    #[arg(long)]
    ignore_color: bool,
}

impl From<StudioFlags> for StudioOptions {
    fn from(flags: StudioFlags) -> Self {
        StudioOptions {
            as_wishlist: flags.as_wishlist,
            ignore_color: flags.ignore_color,
        }
    }
}
