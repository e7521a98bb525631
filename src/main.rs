use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use cellscope::config::Config;
use cellscope::report::{self, Overview};
use cellscope::{export, Collection, Record, RenderMode, Source};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cellscope", about = "Load, dedup, and query a mobile device CSV")]
struct Cli {
    /// Device CSV to read; `-` reads stdin. Defaults to `[input] path` in config.
    #[arg(long, short, global = true)]
    input: Option<PathBuf>,

    /// Rendering for device lines. Defaults to `[output] mode` in config.
    #[arg(long, short, global = true, value_enum)]
    mode: Option<ModeArg>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level to stderr (overrides RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Every attribute.
    Full,
    /// Manufacturer, model, status, platform.
    Summary,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Full => RenderMode::Full,
            ModeArg::Summary => RenderMode::Summary,
        }
    }
}

/// The `--mode` flag wins over the configured mode in either direction.
fn render_mode(flag: Option<ModeArg>, configured: RenderMode) -> RenderMode {
    flag.map_or(configured, RenderMode::from)
}

#[derive(Subcommand)]
enum Command {
    /// Record count, duplicates skipped, manufacturers, average weight.
    Overview,
    /// Every device.
    List,
    /// Devices whose platform OS contains QUERY (case-insensitive).
    Platform { query: String },
    /// Devices whose launch status contains QUERY (case-insensitive).
    Status { query: String },
    /// Devices whose manufacturer contains QUERY (case-insensitive).
    Oem { query: String },
    /// Devices released in YEAR.
    Year { year: i32 },
    /// Devices listing exactly COUNT sensors.
    Features { count: usize },
    /// Devices announced in one year and released in another.
    Disparity,
    /// Distinct manufacturers.
    Manufacturers,
    /// Average body weight, overall or per manufacturer.
    AvgWeight {
        #[arg(long)]
        by_oem: bool,
    },
    /// Devices matching both an OEM and a platform query.
    Overlap {
        #[arg(long)]
        oem: String,
        #[arg(long)]
        platform: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("ignoring unreadable config: {err:#}");
        Config::defaults()
    });
    let source = Source::from_path(cli.input.unwrap_or(config.input.path));
    let label = source.to_string();

    let collection = tokio::task::spawn_blocking(move || source.load())
        .await?
        .with_context(|| format!("loading devices from {label}"))?;

    let out = Output {
        mode: render_mode(cli.mode, config.output.mode),
        json: cli.json,
    };
    run(cli.command, &collection, &out, &mut io::stdout().lock())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

struct Output {
    mode: RenderMode,
    json: bool,
}

impl Output {
    fn records(&self, w: &mut impl Write, records: &[&Record]) -> anyhow::Result<()> {
        if self.json {
            writeln!(w, "{}", export::to_json(records.iter().copied())?)?;
        } else {
            export::write_lines(&mut *w, records.iter().copied(), self.mode)?;
        }
        Ok(())
    }

    fn lines(&self, w: &mut impl Write, lines: &[String]) -> anyhow::Result<()> {
        for line in lines {
            writeln!(w, "{line}")?;
        }
        Ok(())
    }
}

fn run(
    command: Command,
    collection: &Collection,
    out: &Output,
    w: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Overview => {
            let overview = Overview::of(collection);
            if out.json {
                writeln!(w, "{}", serde_json::to_string_pretty(&overview)?)?;
            } else {
                out.lines(w, &overview.lines())?;
            }
        }
        Command::List => out.records(w, collection.all_records().records())?,
        Command::Platform { query } => {
            out.records(w, collection.filter_by_platform(&query).records())?
        }
        Command::Status { query } => {
            out.records(w, collection.filter_by_launch_status(&query).records())?
        }
        Command::Oem { query } => out.records(w, collection.filter_by_oem(&query).records())?,
        Command::Year { year } => {
            out.records(w, collection.filter_by_release_year(year).records())?
        }
        Command::Features { count } => {
            out.records(w, collection.filter_by_feature_count(count).records())?
        }
        Command::Disparity => out.records(w, collection.find_release_disparity().records())?,
        Command::Manufacturers => {
            let names = collection.unique_manufacturers();
            if out.json {
                writeln!(w, "{}", serde_json::to_string_pretty(&names)?)?;
            } else {
                for name in names {
                    writeln!(w, "{name}")?;
                }
            }
        }
        Command::AvgWeight { by_oem: false } => {
            let average = collection.average_weight();
            if out.json {
                writeln!(w, "{}", serde_json::json!({ "average_weight_grams": average }))?;
            } else {
                writeln!(w, "{}", report::average_weight_line(average))?;
            }
        }
        Command::AvgWeight { by_oem: true } => {
            let rows = collection.average_weight_by_manufacturer();
            if out.json {
                writeln!(w, "{}", serde_json::to_string_pretty(&rows)?)?;
            } else {
                out.lines(w, &report::manufacturer_weight_lines(&rows))?;
            }
        }
        Command::Overlap { oem, platform } => {
            let by_oem = collection.filter_by_oem(&oem);
            let by_platform = collection.filter_by_platform(&platform);
            match by_oem.intersect(&by_platform) {
                Some(both) => out.records(w, both.records())?,
                None => tracing::warn!(
                    oem = %oem,
                    platform = %platform,
                    "no overlap: one of the queries matched nothing"
                ),
            }
        }
    }
    Ok(())
}
