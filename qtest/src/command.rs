use std::num::ParseIntError;
use std::str::FromStr;

use lqueue_rs::QueueError;
use thiserror::Error;

use crate::config_option::ConfigOption;


/// Largest removal buffer the harness will allocate.
pub const MAX_BUFFER_SIZE: usize = 1 << 20;
/// Largest repeat count accepted by `ih` and `it`.
pub const MAX_REPEAT: usize = 1 << 20;

#[derive(Error, Debug)]
pub enum CommandError {
  #[error("Unknown command '{0}'")]
  UnknownCommand(String),
  #[error("{command} needs {argument}")]
  MissingArgument {
    command: &'static str,
    argument: &'static str,
  },
  #[error("Invalid number '{argument}': {source}")]
  InvalidNumber { argument: String, source: ParseIntError },
  #[error("{name} {value} is out of range (max {max})")]
  OutOfRange { name: &'static str, value: usize, max: usize },
  #[error("Unknown option '{0}'")]
  UnknownOption(String),
  #[error(transparent)]
  Queue(#[from] QueueError),
  #[error("Expected '{expected}', found '{actual}'")]
  Mismatch { expected: String, actual: String },
  #[error("Queue is not sorted at position {0}")]
  Unsorted(usize),
  #[error("Failed to write output: {0}")]
  Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  New,
  Free,
  InsertHead { value: String, count: usize },
  InsertTail { value: String, count: usize },
  RemoveHead { expected: Option<String> },
  Size { expected: Option<usize> },
  Reverse,
  Sort,
  Show,
  SetOption(ConfigOption),
  Help,
  Quit,
}

pub const HELP: &[(&str, &str)] = &[
  ("new", "Create a new, empty queue"),
  ("free", "Delete the queue"),
  ("ih STR [N]", "Insert STR at head N times (default 1)"),
  ("it STR [N]", "Insert STR at tail N times (default 1)"),
  ("rh [STR]", "Remove from head, optionally comparing against STR"),
  ("size [N]", "Print queue size, optionally comparing against N"),
  ("reverse", "Reverse the queue"),
  ("sort", "Sort the queue in ascending order"),
  ("show", "Print the queue contents"),
  ("option NAME VALUE", "Set echo, buffer or limit"),
  ("help", "Show this list"),
  ("quit", "Exit"),
];

impl Command {
  /// Whether the command can change the queue structure.
  pub fn is_mutating(&self) -> bool {
    matches!(
      self,
      Command::New
        | Command::InsertHead { .. }
        | Command::InsertTail { .. }
        | Command::RemoveHead { .. }
        | Command::Reverse
        | Command::Sort
    )
  }
}

impl FromStr for Command {
  type Err = CommandError;

  fn from_str(line: &str) -> Result<Self, Self::Err> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
      return Err(CommandError::UnknownCommand(String::new()));
    };
    let command = match name {
      "new" => Command::New,
      "free" => Command::Free,
      "ih" => {
        let (value, count) = parse_insert("ih", &mut words)?;
        Command::InsertHead { value, count }
      }
      "it" => {
        let (value, count) = parse_insert("it", &mut words)?;
        Command::InsertTail { value, count }
      }
      "rh" => Command::RemoveHead {
        expected: words.next().map(str::to_string),
      },
      "size" => Command::Size {
        expected: words.next().map(parse_number::<usize>).transpose()?,
      },
      "reverse" => Command::Reverse,
      "sort" => Command::Sort,
      "show" => Command::Show,
      "option" => {
        let option = words.next().ok_or(CommandError::MissingArgument {
          command: "option",
          argument: "a name",
        })?;
        let value = words.next().ok_or(CommandError::MissingArgument {
          command: "option",
          argument: "a value",
        })?;
        Command::SetOption(parse_option(option, value)?)
      }
      "help" => Command::Help,
      "quit" => Command::Quit,
      other => return Err(CommandError::UnknownCommand(other.to_string())),
    };
    Ok(command)
  }
}

fn parse_insert<'a>(
  command: &'static str,
  words: &mut impl Iterator<Item = &'a str>,
) -> Result<(String, usize), CommandError> {
  let value = words.next().ok_or(CommandError::MissingArgument {
    command,
    argument: "a string",
  })?;
  let count = words.next().map(parse_number::<usize>).transpose()?.unwrap_or(1);
  Ok((value.to_string(), check_range("count", count, MAX_REPEAT)?))
}

fn parse_number<T: FromStr<Err = ParseIntError>>(argument: &str) -> Result<T, CommandError> {
  argument.parse::<T>().map_err(|source| CommandError::InvalidNumber {
    argument: argument.to_string(),
    source,
  })
}

fn parse_option(name: &str, value: &str) -> Result<ConfigOption, CommandError> {
  match name {
    "echo" => Ok(ConfigOption::with_echo(parse_number::<u8>(value)? != 0)),
    "buffer" => Ok(ConfigOption::with_buffer_size(check_range(
      "buffer",
      parse_number(value)?,
      MAX_BUFFER_SIZE,
    )?)),
    "limit" => Ok(ConfigOption::with_allocation_limit(parse_number(value)?)),
    other => Err(CommandError::UnknownOption(other.to_string())),
  }
}

pub fn check_range(name: &'static str, value: usize, max: usize) -> Result<usize, CommandError> {
  if value > max {
    return Err(CommandError::OutOfRange { name, value, max });
  }
  Ok(value)
}
