use std::io::{BufRead, Write};

use lqueue_rs::{ops, QueueError, StringQueue};

use crate::command::{Command, CommandError, HELP};
use crate::config::Config;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
  Continue,
  Quit,
}

/// Totals for one console session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
  pub commands: usize,
  pub errors: usize,
}

/// Line-oriented interpreter that drives a single queue through its public operations.
#[derive(Debug)]
pub struct Console {
  config: Config,
  queue: Option<StringQueue>,
  errors: usize,
}

impl Console {
  pub fn new(config: Config) -> Self {
    Self {
      config,
      queue: None,
      errors: 0,
    }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn queue(&self) -> Option<&StringQueue> {
    self.queue.as_ref()
  }

  /// Executes every command in `input`, writing results to `out`.
  /// Failed commands are reported and counted; only a failing output sink aborts the session.
  pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> std::io::Result<Summary> {
    let mut summary = Summary::default();
    for line in input.lines() {
      let line = line?;
      let line = line.trim();
      if line.is_empty() || line.starts_with('#') {
        continue;
      }
      if self.config.echo {
        writeln!(out, "cmd> {}", line)?;
      }
      summary.commands += 1;
      match self.execute_line(line, out) {
        Ok(Control::Continue) => {}
        Ok(Control::Quit) => break,
        Err(CommandError::Io(err)) => return Err(err),
        Err(err) => {
          tracing::debug!("Console::run: '{}' failed: {}", line, err);
          self.errors += 1;
          writeln!(out, "ERROR: {}", err)?;
        }
      }
    }
    summary.errors = self.errors;
    Ok(summary)
  }

  pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Control, CommandError> {
    let command = line.parse::<Command>()?;
    let control = self.execute(&command, out)?;
    if command.is_mutating() {
      if let Some(queue) = &self.queue {
        queue.check_integrity()?;
      }
    }
    Ok(control)
  }

  pub fn execute<W: Write>(&mut self, command: &Command, out: &mut W) -> Result<Control, CommandError> {
    match command {
      Command::New => {
        ops::destroy(self.queue.take());
        self.queue = Some(StringQueue::from_config(self.config.queue_config())?);
        self.show(out)?;
      }
      Command::Free => {
        ops::destroy(self.queue.take());
        self.show(out)?;
      }
      Command::InsertHead { value, count } => {
        for _ in 0..*count {
          ops::insert_head(self.queue.as_mut(), Some(value.as_str()))?;
        }
        self.show(out)?;
      }
      Command::InsertTail { value, count } => {
        for _ in 0..*count {
          ops::insert_tail(self.queue.as_mut(), Some(value.as_str()))?;
        }
        self.show(out)?;
      }
      Command::RemoveHead { expected } => {
        let mut buffer = Vec::new();
        buffer
          .try_reserve_exact(self.config.buffer_size)
          .map_err(|_| QueueError::AllocationError {
            requested: self.config.buffer_size,
          })?;
        buffer.resize(self.config.buffer_size, 0u8);
        let copied = ops::remove_head(self.queue.as_mut(), Some(&mut buffer[..]))?;
        let removed = String::from_utf8_lossy(&buffer[..copied]).into_owned();
        writeln!(out, "Removed {} from queue", removed)?;
        if let Some(expected) = expected {
          if *expected != removed {
            return Err(CommandError::Mismatch {
              expected: expected.clone(),
              actual: removed,
            });
          }
        }
        self.show(out)?;
      }
      Command::Size { expected } => {
        let size = ops::size(self.queue.as_ref());
        writeln!(out, "Queue size = {}", size)?;
        if let Some(expected) = expected {
          if *expected != size {
            return Err(CommandError::Mismatch {
              expected: expected.to_string(),
              actual: size.to_string(),
            });
          }
        }
      }
      Command::Reverse => {
        ops::reverse(self.queue.as_mut());
        self.show(out)?;
      }
      Command::Sort => {
        ops::sort(self.queue.as_mut());
        self.verify_sorted()?;
        self.show(out)?;
      }
      Command::Show => self.show(out)?,
      Command::SetOption(option) => {
        option.apply(&mut self.config);
        if let Some(queue) = self.queue.as_mut() {
          queue.set_allocation_limit(self.config.allocation_limit);
        }
        writeln!(out, "{:?}", option)?;
      }
      Command::Help => {
        for (usage, description) in HELP {
          writeln!(out, "  {:<18} | {}", usage, description)?;
        }
      }
      Command::Quit => {
        ops::destroy(self.queue.take());
        return Ok(Control::Quit);
      }
    }
    Ok(Control::Continue)
  }

  fn show<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
    match &self.queue {
      Some(queue) => {
        let values = queue.iter().collect::<Vec<_>>();
        writeln!(out, "q = [{}]", values.join(" "))
      }
      None => writeln!(out, "q = NULL"),
    }
  }

  fn verify_sorted(&self) -> Result<(), CommandError> {
    let Some(queue) = &self.queue else {
      return Ok(());
    };
    let mut previous: Option<&str> = None;
    for (position, value) in queue.iter().enumerate() {
      if let Some(previous) = previous {
        if previous > value {
          return Err(CommandError::Unsorted(position));
        }
      }
      previous = Some(value);
    }
    Ok(())
  }
}
