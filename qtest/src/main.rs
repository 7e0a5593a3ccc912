use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::command::{CommandError, MAX_BUFFER_SIZE};
use crate::config::Config;
use crate::config_option::ConfigOption;
use crate::console::Console;

mod command;
mod config;
mod config_option;
mod console;

#[derive(Parser, Debug)]
#[command(name = "qtest", about = "Drive a linked string queue from a command script")]
struct Args {
  /// Read commands from this file instead of stdin
  #[arg(short = 'f', long)]
  file: Option<PathBuf>,
  /// Verbosity: 0 errors only, 1 info, 2 debug, 3 trace
  #[arg(short = 'v', long, default_value_t = 1)]
  verbose: u8,
  /// Size of the buffer removed strings are copied into
  #[arg(long, default_value_t = 1024, value_parser = parse_buffer_size)]
  buffer_size: usize,
  /// Maximum number of live elements per queue
  #[arg(long)]
  limit: Option<usize>,
  /// Echo each command before its output
  #[arg(long)]
  echo: bool,
}

fn parse_buffer_size(argument: &str) -> Result<usize, CommandError> {
  let size = argument.parse::<usize>().map_err(|source| CommandError::InvalidNumber {
    argument: argument.to_string(),
    source,
  })?;
  command::check_range("buffer", size, MAX_BUFFER_SIZE)
}

impl Args {
  fn config_options(&self) -> Vec<ConfigOption> {
    let mut options = vec![
      ConfigOption::with_echo(self.echo || self.file.is_some()),
      ConfigOption::with_buffer_size(self.buffer_size),
      ConfigOption::with_verbosity(self.verbose),
    ];
    if let Some(limit) = self.limit {
      options.push(ConfigOption::with_allocation_limit(limit));
    }
    options
  }
}

fn main() -> ExitCode {
  let args = Args::parse();
  let config = Config::from(args.config_options());

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .try_init();

  let input: Box<dyn BufRead> = match &args.file {
    Some(path) => match File::open(path) {
      Ok(file) => Box::new(BufReader::new(file)),
      Err(err) => {
        tracing::error!("cannot open {}: {}", path.display(), err);
        return ExitCode::FAILURE;
      }
    },
    None => Box::new(io::stdin().lock()),
  };

  let mut console = Console::new(config);
  tracing::debug!("qtest: {:?}", console.config());
  let mut out = io::stdout().lock();
  let result = console.run(input, &mut out);
  tracing::debug!("qtest: final queue = {:?}", console.queue());
  match result {
    Ok(summary) if summary.errors == 0 => {
      tracing::info!("{} commands, no errors", summary.commands);
      ExitCode::SUCCESS
    }
    Ok(summary) => {
      tracing::info!("{} commands, {} errors", summary.commands, summary.errors);
      ExitCode::FAILURE
    }
    Err(err) => {
      tracing::error!("console aborted: {}", err);
      ExitCode::FAILURE
    }
  }
}
