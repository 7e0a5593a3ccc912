use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOption {
  SetEcho(bool),
  SetBufferSize(usize),
  SetAllocationLimit(usize),
  SetVerbosity(u8),
}

impl ConfigOption {
  pub fn apply(&self, config: &mut Config) {
    match self {
      ConfigOption::SetEcho(echo) => {
        config.echo = *echo;
      }
      ConfigOption::SetBufferSize(size) => {
        config.buffer_size = *size;
      }
      ConfigOption::SetAllocationLimit(limit) => {
        config.allocation_limit = Some(*limit);
      }
      ConfigOption::SetVerbosity(verbosity) => {
        config.verbosity = *verbosity;
      }
    }
  }

  pub fn with_echo(echo: bool) -> ConfigOption {
    ConfigOption::SetEcho(echo)
  }

  pub fn with_buffer_size(size: usize) -> ConfigOption {
    ConfigOption::SetBufferSize(size)
  }

  pub fn with_allocation_limit(limit: usize) -> ConfigOption {
    ConfigOption::SetAllocationLimit(limit)
  }

  pub fn with_verbosity(verbosity: u8) -> ConfigOption {
    ConfigOption::SetVerbosity(verbosity)
  }
}
