//! A singly linked queue of owned strings.
//!
//! The chain is stored in an index arena: every element lives in a slot and
//! links to its successor by slot index, so reversal and sorting re-link or
//! swap payloads without any unsafe pointer work.

pub mod collections;

pub use collections::*;
