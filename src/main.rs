use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use bench_compare::{
  align,
  backend::{Backend, BackendRegistry},
  format, load,
  result::ResultSet,
  variation::{AxisLabel, AxisNames},
};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Compare benchmark results across execution backends")]
struct Args {
  /// Log debug diagnostics.
  #[arg(short, long, global = true, conflicts_with = "quiet")]
  verbose: bool,
  /// Only log warnings and errors.
  #[arg(short, long, global = true)]
  quiet: bool,
  #[command(subcommand)]
  command: Command,
}

#[derive(clap::Args, Debug)]
struct Inputs {
  /// Base name of the program. Results are read from `<dir>/<progname>-<backend>.json`.
  progname: String,
  /// Directory holding the result files.
  #[arg(long, default_value = ".")]
  dir: PathBuf,
  /// Backend to look for, as `SUFFIX` or `SUFFIX=NAME`. Defaults to
  /// opencl, c, multicore, cuda and ispc.
  #[arg(short, long = "backend", value_name = "SUFFIX[=NAME]")]
  backends: Vec<Backend>,
  /// Backend the speedups are computed against.
  #[arg(long, default_value = bench_compare::backend::DEFAULT_BASELINE)]
  baseline: String,
  /// Name of a configuration position, as `INDEX=NAME`.
  #[arg(long = "axis", value_name = "INDEX=NAME")]
  axes: Vec<AxisLabel>,
}

impl Inputs {
  fn registry(&self) -> Result<BackendRegistry> {
    let backends = if self.backends.is_empty() {
      BackendRegistry::default_backends()
    } else {
      self.backends.clone()
    };

    BackendRegistry::new(backends, &self.baseline)
  }

  fn axis_names(&self) -> AxisNames {
    let mut names = AxisNames::default();
    for label in &self.axes {
      names.insert(label.clone());
    }

    names
  }

  fn aggregate(&self) -> Result<ResultSet> {
    let registry = self.registry().context("backends")?;
    let documents = load::load_backends(&self.dir, &self.progname, &registry).context("load")?;

    let results = align::aggregate(&documents, registry.baseline(), &self.axis_names());
    if results.is_empty() {
      info!("no complete benchmark data found");
    }

    Ok(results)
  }
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print runtimes and speedups as one table per benchmark.
  Table {
    #[command(flatten)]
    inputs: Inputs,
  },
  /// Print the aligned results as JSON.
  Export {
    #[command(flatten)]
    inputs: Inputs,
    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
  },
}

fn init_tracing(verbose: bool, quiet: bool) {
  let level = match (verbose, quiet) {
    (true, _) => "debug",
    (_, true) => "warn",
    _ => "info",
  };

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
    .with_writer(io::stderr)
    .with_target(false)
    .init();
}

fn main() -> Result<()> {
  let args = Args::parse();
  init_tracing(args.verbose, args.quiet);

  match args.command {
    Command::Table { inputs } => {
      let results = inputs.aggregate()?;
      if !results.is_empty() {
        print!("{}", format::format(&results).context("format")?);
      }
    }
    Command::Export { inputs, pretty } => {
      let results = inputs.aggregate()?;
      let json = if pretty {
        serde_json::to_string_pretty(&results)
      } else {
        serde_json::to_string(&results)
      }
      .context("serialize")?;

      println!("{json}");
    }
  }

  Ok(())
}
