use lqueue_rs::ConfigOption as QueueConfigOption;

use crate::config_option::ConfigOption;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub echo: bool,
  pub buffer_size: usize,
  pub allocation_limit: Option<usize>,
  pub verbosity: u8,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      echo: false,
      buffer_size: 1024,
      allocation_limit: None,
      verbosity: 1,
    }
  }
}

impl Config {
  pub fn from(options: impl IntoIterator<Item = ConfigOption>) -> Config {
    let mut config = Config::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  /// Settings handed to every queue the console creates.
  pub fn queue_config(&self) -> lqueue_rs::Config {
    lqueue_rs::Config::from(self.allocation_limit.map(QueueConfigOption::with_allocation_limit))
  }

  pub fn log_level(&self) -> &'static str {
    match self.verbosity {
      0 => "error",
      1 => "info",
      2 => "debug",
      _ => "trace",
    }
  }
}
