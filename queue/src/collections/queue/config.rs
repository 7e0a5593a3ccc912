use crate::collections::queue::ConfigOption;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Number of element slots reserved up front.
  pub initial_capacity: usize,
  /// Maximum number of live elements. Insertions past it fail as allocation failures.
  pub allocation_limit: Option<usize>,
  /// Maximum payload length in bytes.
  pub max_value_len: Option<usize>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      initial_capacity: 0,
      allocation_limit: None,
      max_value_len: None,
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
}
