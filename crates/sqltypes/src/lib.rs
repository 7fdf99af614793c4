//! Logical SQL types and their mapping to the MySQL wire protocol.
//!
//! All tables in this crate are static. Every operation is a pure lookup and
//! safe to call from any number of threads.

pub mod classify;
pub mod equivalence;
pub mod error;
pub mod types;
pub mod wire;

pub use classify::classify;
pub use equivalence::{BINLOG_EQUIVALENT_TYPES, are_types_equivalent};
pub use error::{Result, TypeError};
pub use types::{LogicalType, TypeFlags, TypeInfo, flags_of, name_of};
pub use wire::{ColumnType, WireFlags, WireType, decode, decode_wire, encode};
