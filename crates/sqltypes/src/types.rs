//! Logical types and their classification flags.
//!
//! Every logical type carries a fixed set of [`TypeFlags`] assigned here and
//! nowhere else. The numeric code of a type packs those flags above the
//! type's ordinal, so `code & 0xFF00` always reproduces the flags.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::de::Visitor;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeError};

bitflags! {
    /// Classification properties of a logical type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TypeFlags: u32 {
        const INTEGRAL = 0x0100;
        const UNSIGNED = 0x0200;
        const FLOAT    = 0x0400;
        const QUOTED   = 0x0800;
        const TEXT     = 0x1000;
        const BINARY   = 0x2000;
    }
}

impl TypeFlags {
    const SIGNED_INT: Self = Self::INTEGRAL;
    const UNSIGNED_INT: Self = Self::INTEGRAL.union(Self::UNSIGNED);
    const QUOTED_TEXT: Self = Self::QUOTED.union(Self::TEXT);
    const QUOTED_BINARY: Self = Self::QUOTED.union(Self::BINARY);
}

/// Mask selecting the ordinal part of a packed type code.
const ORDINAL_MASK: i32 = 0xFF;

/// Static description of a logical type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    pub ordinal: u8,
    pub name: &'static str,
    pub flags: TypeFlags,
}

/// The closed set of value kinds used by the execution layer.
///
/// Ordering follows the ordinal of each type.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogicalType {
    /// NULL literal type.
    Null = 0,
    /// TINYINT
    Int8 = 1,
    /// TINYINT UNSIGNED
    Uint8 = 2,
    /// SMALLINT
    Int16 = 3,
    /// SMALLINT UNSIGNED
    Uint16 = 4,
    /// MEDIUMINT
    Int24 = 5,
    /// MEDIUMINT UNSIGNED
    Uint24 = 6,
    /// INTEGER
    Int32 = 7,
    /// INTEGER UNSIGNED
    Uint32 = 8,
    /// BIGINT
    Int64 = 9,
    /// BIGINT UNSIGNED
    Uint64 = 10,
    /// FLOAT
    Float32 = 11,
    /// DOUBLE or REAL
    Float64 = 12,
    Timestamp = 13,
    Date = 14,
    Time = 15,
    Datetime = 16,
    Year = 17,
    /// DECIMAL or NUMERIC
    Decimal = 18,
    Text = 19,
    Blob = 20,
    VarChar = 21,
    VarBinary = 22,
    Char = 23,
    Binary = 24,
    Bit = 25,
    Enum = 26,
    Set = 27,
    /// A tuple of values. Never part of a result set, but may be sent as a
    /// bind variable.
    Tuple = 28,
    Geometry = 29,
    Json = 30,
    /// A SQL expression. Internal use only.
    Expression = 31,
    /// Unquoted hex number literal.
    HexNum = 32,
    /// Unquoted hex string literal.
    HexVal = 33,
}

impl LogicalType {
    /// All logical types in ordinal order.
    pub const ALL: [LogicalType; 34] = [
        LogicalType::Null,
        LogicalType::Int8,
        LogicalType::Uint8,
        LogicalType::Int16,
        LogicalType::Uint16,
        LogicalType::Int24,
        LogicalType::Uint24,
        LogicalType::Int32,
        LogicalType::Uint32,
        LogicalType::Int64,
        LogicalType::Uint64,
        LogicalType::Float32,
        LogicalType::Float64,
        LogicalType::Timestamp,
        LogicalType::Date,
        LogicalType::Time,
        LogicalType::Datetime,
        LogicalType::Year,
        LogicalType::Decimal,
        LogicalType::Text,
        LogicalType::Blob,
        LogicalType::VarChar,
        LogicalType::VarBinary,
        LogicalType::Char,
        LogicalType::Binary,
        LogicalType::Bit,
        LogicalType::Enum,
        LogicalType::Set,
        LogicalType::Tuple,
        LogicalType::Geometry,
        LogicalType::Json,
        LogicalType::Expression,
        LogicalType::HexNum,
        LogicalType::HexVal,
    ];

    pub const fn info(self) -> TypeInfo {
        let (name, flags) = match self {
            Self::Null => ("NULL_TYPE", TypeFlags::empty()),
            Self::Int8 => ("INT8", TypeFlags::SIGNED_INT),
            Self::Uint8 => ("UINT8", TypeFlags::UNSIGNED_INT),
            Self::Int16 => ("INT16", TypeFlags::SIGNED_INT),
            Self::Uint16 => ("UINT16", TypeFlags::UNSIGNED_INT),
            Self::Int24 => ("INT24", TypeFlags::SIGNED_INT),
            Self::Uint24 => ("UINT24", TypeFlags::UNSIGNED_INT),
            Self::Int32 => ("INT32", TypeFlags::SIGNED_INT),
            Self::Uint32 => ("UINT32", TypeFlags::UNSIGNED_INT),
            Self::Int64 => ("INT64", TypeFlags::SIGNED_INT),
            Self::Uint64 => ("UINT64", TypeFlags::UNSIGNED_INT),
            Self::Float32 => ("FLOAT32", TypeFlags::FLOAT),
            Self::Float64 => ("FLOAT64", TypeFlags::FLOAT),
            Self::Timestamp => ("TIMESTAMP", TypeFlags::QUOTED),
            Self::Date => ("DATE", TypeFlags::QUOTED),
            Self::Time => ("TIME", TypeFlags::QUOTED),
            Self::Datetime => ("DATETIME", TypeFlags::QUOTED),
            Self::Year => ("YEAR", TypeFlags::UNSIGNED_INT),
            Self::Decimal => ("DECIMAL", TypeFlags::empty()),
            Self::Text => ("TEXT", TypeFlags::QUOTED_TEXT),
            Self::Blob => ("BLOB", TypeFlags::QUOTED_BINARY),
            Self::VarChar => ("VARCHAR", TypeFlags::QUOTED_TEXT),
            Self::VarBinary => ("VARBINARY", TypeFlags::QUOTED_BINARY),
            Self::Char => ("CHAR", TypeFlags::QUOTED_TEXT),
            Self::Binary => ("BINARY", TypeFlags::QUOTED_BINARY),
            // Flagged quoted, but excluded by `is_quoted`.
            Self::Bit => ("BIT", TypeFlags::QUOTED),
            Self::Enum => ("ENUM", TypeFlags::QUOTED),
            Self::Set => ("SET", TypeFlags::QUOTED),
            Self::Tuple => ("TUPLE", TypeFlags::empty()),
            Self::Geometry => ("GEOMETRY", TypeFlags::QUOTED),
            Self::Json => ("JSON", TypeFlags::QUOTED),
            Self::Expression => ("EXPRESSION", TypeFlags::empty()),
            Self::HexNum => ("HEXNUM", TypeFlags::TEXT),
            Self::HexVal => ("HEXVAL", TypeFlags::TEXT),
        };

        TypeInfo {
            ordinal: self as u8,
            name,
            flags,
        }
    }

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        self.info().name
    }

    pub const fn flags(self) -> TypeFlags {
        self.info().flags
    }

    /// Packed numeric code, the flag bits or'ed with the ordinal.
    pub const fn code(self) -> i32 {
        self.flags().bits() as i32 | self.ordinal() as i32
    }

    /// Get the logical type for a packed numeric code.
    pub fn try_from_code(code: i32) -> Result<Self> {
        let ordinal = code & ORDINAL_MASK;
        match Self::ALL.get(ordinal as usize) {
            Some(typ) if typ.code() == code => Ok(*typ),
            _ => Err(TypeError::UnknownTypeCode(code)),
        }
    }
}

/// Display name for a packed type code.
pub fn name_of(code: i32) -> Result<&'static str> {
    LogicalType::try_from_code(code).map(LogicalType::name)
}

/// Classification flags packed into a type code.
///
/// Never fails, bits outside the flag range are discarded.
pub fn flags_of(code: i32) -> TypeFlags {
    TypeFlags::from_bits_truncate(code as u32)
}

impl TryFrom<i32> for LogicalType {
    type Error = TypeError;

    fn try_from(value: i32) -> Result<Self> {
        Self::try_from_code(value)
    }
}

impl From<LogicalType> for i32 {
    fn from(typ: LogicalType) -> i32 {
        typ.code()
    }
}

impl FromStr for LogicalType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|typ| typ.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TypeError::UnknownTypeName(s.to_owned()))
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for LogicalType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

struct LogicalTypeVisitor;

impl Visitor<'_> for LogicalTypeVisitor {
    type Value = LogicalType;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("logical type name")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse()
            .map_err(|_e| serde::de::Error::invalid_value(serde::de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for LogicalType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(LogicalTypeVisitor)
    }
}
