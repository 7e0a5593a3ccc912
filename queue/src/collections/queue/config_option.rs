use crate::collections::queue::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOption {
  SetInitialCapacity(usize),
  SetAllocationLimit(usize),
  SetMaxValueLen(usize),
}

impl ConfigOption {
  pub fn apply(&self, config: &mut Config) {
    match self {
      ConfigOption::SetInitialCapacity(capacity) => {
        config.initial_capacity = *capacity;
      }
      ConfigOption::SetAllocationLimit(limit) => {
        config.allocation_limit = Some(*limit);
      }
      ConfigOption::SetMaxValueLen(len) => {
        config.max_value_len = Some(*len);
      }
    }
  }

  pub fn with_initial_capacity(capacity: usize) -> ConfigOption {
    ConfigOption::SetInitialCapacity(capacity)
  }

  pub fn with_allocation_limit(limit: usize) -> ConfigOption {
    ConfigOption::SetAllocationLimit(limit)
  }

  pub fn with_max_value_len(len: usize) -> ConfigOption {
    ConfigOption::SetMaxValueLen(len)
  }
}
