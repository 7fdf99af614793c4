//! Mapping between logical types and MySQL wire protocol column types.
//!
//! The wire column type alone under-specifies signedness and several of the
//! string types. Decoding therefore happens in two steps: the column type
//! selects a base logical type, then a small set of column flags relevant to
//! that base type refines it. Flags not relevant to the base type are
//! ignored since MySQL occasionally sets stray flags.

use bitflags::bitflags;
use tracing::{debug, trace};

use crate::error::{Result, TypeError};
use crate::types::LogicalType;

/// Protocol column types (wire protocol codes).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Decimal = 0x00,
    Tiny = 0x01,
    Short = 0x02,
    Long = 0x03,
    Float = 0x04,
    Double = 0x05,
    Null = 0x06,
    Timestamp = 0x07,
    LongLong = 0x08,
    Int24 = 0x09,
    Date = 0x0a,
    Time = 0x0b,
    Datetime = 0x0c,
    Year = 0x0d,
    Varchar = 0x0f,
    Bit = 0x10,
    Timestamp2 = 0x11,
    Datetime2 = 0x12,
    Time2 = 0x13,
    Json = 0xf5,
    NewDecimal = 0xf6,
    Enum = 0xf7,
    Set = 0xf8,
    TinyBlob = 0xf9,
    MediumBlob = 0xfa,
    LongBlob = 0xfb,
    Blob = 0xfc,
    VarString = 0xfd,
    String = 0xfe,
    Geometry = 0xff,
}

impl ColumnType {
    /// Logical type selected by the column type before any flags are
    /// considered.
    pub const fn base_type(self) -> LogicalType {
        match self {
            Self::Decimal | Self::NewDecimal => LogicalType::Decimal,
            Self::Tiny => LogicalType::Int8,
            Self::Short => LogicalType::Int16,
            Self::Long => LogicalType::Int32,
            Self::Float => LogicalType::Float32,
            Self::Double => LogicalType::Float64,
            Self::Null => LogicalType::Null,
            Self::Timestamp | Self::Timestamp2 => LogicalType::Timestamp,
            Self::LongLong => LogicalType::Int64,
            Self::Int24 => LogicalType::Int24,
            Self::Date => LogicalType::Date,
            Self::Time | Self::Time2 => LogicalType::Time,
            Self::Datetime | Self::Datetime2 => LogicalType::Datetime,
            Self::Year => LogicalType::Year,
            Self::Varchar | Self::VarString => LogicalType::VarChar,
            Self::Bit => LogicalType::Bit,
            Self::Json => LogicalType::Json,
            Self::Enum => LogicalType::Enum,
            Self::Set => LogicalType::Set,
            Self::TinyBlob | Self::MediumBlob | Self::LongBlob | Self::Blob => LogicalType::Text,
            Self::String => LogicalType::Char,
            Self::Geometry => LogicalType::Geometry,
        }
    }
}

impl TryFrom<i64> for ColumnType {
    type Error = TypeError;

    fn try_from(value: i64) -> Result<Self> {
        Ok(match value {
            0x00 => Self::Decimal,
            0x01 => Self::Tiny,
            0x02 => Self::Short,
            0x03 => Self::Long,
            0x04 => Self::Float,
            0x05 => Self::Double,
            0x06 => Self::Null,
            0x07 => Self::Timestamp,
            0x08 => Self::LongLong,
            0x09 => Self::Int24,
            0x0a => Self::Date,
            0x0b => Self::Time,
            0x0c => Self::Datetime,
            0x0d => Self::Year,
            0x0f => Self::Varchar,
            0x10 => Self::Bit,
            0x11 => Self::Timestamp2,
            0x12 => Self::Datetime2,
            0x13 => Self::Time2,
            0xf5 => Self::Json,
            0xf6 => Self::NewDecimal,
            0xf7 => Self::Enum,
            0xf8 => Self::Set,
            0xf9 => Self::TinyBlob,
            0xfa => Self::MediumBlob,
            0xfb => Self::LongBlob,
            0xfc => Self::Blob,
            0xfd => Self::VarString,
            0xfe => Self::String,
            0xff => Self::Geometry,
            other => return Err(TypeError::Unsupported(other)),
        })
    }
}

bitflags! {
    /// Column definition flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WireFlags: u32 {
        const NOT_NULL       = 0x0001;
        const PRI_KEY        = 0x0002;
        const UNIQUE_KEY     = 0x0004;
        const MULTIPLE_KEY   = 0x0008;
        const BLOB           = 0x0010;
        const UNSIGNED       = 0x0020;
        const ZEROFILL       = 0x0040;
        const BINARY         = 0x0080;
        const ENUM           = 0x0100;
        const AUTO_INCREMENT = 0x0200;
        const TIMESTAMP      = 0x0400;
        const SET            = 0x0800;
        const NUM            = 0x8000;
    }
}

/// A column type along with the flags modifying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WireType {
    pub column_type: ColumnType,
    pub flags: WireFlags,
}

impl WireType {
    pub const fn new(column_type: ColumnType, flags: WireFlags) -> Self {
        WireType { column_type, flags }
    }

    /// Raw column type code.
    pub const fn code(&self) -> u8 {
        self.column_type as u8
    }

    /// Raw flag bits.
    pub const fn flag_bits(&self) -> u32 {
        self.flags.bits()
    }
}

/// Compute the logical type for a raw column type and raw column flags.
pub fn decode(mysql_type: i64, flags: i64) -> Result<LogicalType> {
    let column_type = ColumnType::try_from(mysql_type).inspect_err(|_| {
        debug!(%mysql_type, %flags, "rejecting unsupported mysql column type");
    })?;
    // Only the low bits carry column flags.
    let flags = WireFlags::from_bits_truncate(flags as u32);
    Ok(decode_wire(WireType::new(column_type, flags)))
}

/// Compute the logical type for a typed column type and flags.
pub fn decode_wire(wire: WireType) -> LogicalType {
    let base = wire.column_type.base_type();
    let typ = refine(base, wire.flags);
    if typ != base {
        trace!(%base, %typ, flags = wire.flag_bits(), "refined mysql column type");
    }
    typ
}

/// Modify the base type using the flags relevant to it.
fn refine(base: LogicalType, flags: WireFlags) -> LogicalType {
    let unsigned = flags.contains(WireFlags::UNSIGNED);
    let binary = flags.contains(WireFlags::BINARY);

    match base {
        LogicalType::Int8 if unsigned => LogicalType::Uint8,
        LogicalType::Int16 if unsigned => LogicalType::Uint16,
        LogicalType::Int24 if unsigned => LogicalType::Uint24,
        LogicalType::Int32 if unsigned => LogicalType::Uint32,
        LogicalType::Int64 if unsigned => LogicalType::Uint64,
        LogicalType::Text if binary => LogicalType::Blob,
        LogicalType::VarChar if binary => LogicalType::VarBinary,
        LogicalType::Char if binary => LogicalType::Binary,
        LogicalType::Char if flags.contains(WireFlags::ENUM) => LogicalType::Enum,
        LogicalType::Char if flags.contains(WireFlags::SET) => LogicalType::Set,
        // Kept as MySQL reports it, binary YEAR columns come back as
        // VARBINARY.
        LogicalType::Year if binary => LogicalType::VarBinary,
        other => other,
    }
}

/// Get the column type and flags to send for a logical type.
///
/// Errors for types that are never sent as column definitions (TUPLE,
/// EXPRESSION, HEXNUM, HEXVAL).
pub fn encode(typ: LogicalType) -> Result<WireType> {
    let (column_type, flags) = match typ {
        LogicalType::Int8 => (ColumnType::Tiny, WireFlags::empty()),
        LogicalType::Uint8 => (ColumnType::Tiny, WireFlags::UNSIGNED),
        LogicalType::Int16 => (ColumnType::Short, WireFlags::empty()),
        LogicalType::Uint16 => (ColumnType::Short, WireFlags::UNSIGNED),
        LogicalType::Int32 => (ColumnType::Long, WireFlags::empty()),
        LogicalType::Uint32 => (ColumnType::Long, WireFlags::UNSIGNED),
        LogicalType::Float32 => (ColumnType::Float, WireFlags::empty()),
        LogicalType::Float64 => (ColumnType::Double, WireFlags::empty()),
        LogicalType::Null => (ColumnType::Null, WireFlags::BINARY),
        LogicalType::Timestamp => (ColumnType::Timestamp, WireFlags::empty()),
        LogicalType::Int64 => (ColumnType::LongLong, WireFlags::empty()),
        LogicalType::Uint64 => (ColumnType::LongLong, WireFlags::UNSIGNED),
        LogicalType::Int24 => (ColumnType::Int24, WireFlags::empty()),
        LogicalType::Uint24 => (ColumnType::Int24, WireFlags::UNSIGNED),
        LogicalType::Date => (ColumnType::Date, WireFlags::BINARY),
        LogicalType::Time => (ColumnType::Time, WireFlags::BINARY),
        LogicalType::Datetime => (ColumnType::Datetime, WireFlags::BINARY),
        LogicalType::Year => (ColumnType::Year, WireFlags::UNSIGNED),
        LogicalType::Bit => (ColumnType::Bit, WireFlags::UNSIGNED),
        LogicalType::Json => (ColumnType::Json, WireFlags::empty()),
        LogicalType::Decimal => (ColumnType::NewDecimal, WireFlags::empty()),
        LogicalType::Text => (ColumnType::Blob, WireFlags::empty()),
        LogicalType::Blob => (ColumnType::Blob, WireFlags::BINARY),
        LogicalType::VarChar => (ColumnType::VarString, WireFlags::empty()),
        LogicalType::VarBinary => (ColumnType::VarString, WireFlags::BINARY),
        LogicalType::Char => (ColumnType::String, WireFlags::empty()),
        LogicalType::Binary => (ColumnType::String, WireFlags::BINARY),
        LogicalType::Enum => (ColumnType::String, WireFlags::ENUM),
        LogicalType::Set => (ColumnType::String, WireFlags::SET),
        LogicalType::Geometry => (ColumnType::Geometry, WireFlags::empty()),
        LogicalType::Tuple
        | LogicalType::Expression
        | LogicalType::HexNum
        | LogicalType::HexVal => return Err(TypeError::NoWireMapping(typ)),
    };

    Ok(WireType::new(column_type, flags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_base_types() {
        let cases = [
            (0, LogicalType::Decimal),
            (1, LogicalType::Int8),
            (2, LogicalType::Int16),
            (3, LogicalType::Int32),
            (4, LogicalType::Float32),
            (5, LogicalType::Float64),
            (6, LogicalType::Null),
            (7, LogicalType::Timestamp),
            (8, LogicalType::Int64),
            (9, LogicalType::Int24),
            (10, LogicalType::Date),
            (11, LogicalType::Time),
            (12, LogicalType::Datetime),
            (13, LogicalType::Year),
            (15, LogicalType::VarChar),
            (16, LogicalType::Bit),
            (17, LogicalType::Timestamp),
            (18, LogicalType::Datetime),
            (19, LogicalType::Time),
            (245, LogicalType::Json),
            (246, LogicalType::Decimal),
            (247, LogicalType::Enum),
            (248, LogicalType::Set),
            (249, LogicalType::Text),
            (250, LogicalType::Text),
            (251, LogicalType::Text),
            (252, LogicalType::Text),
            (253, LogicalType::VarChar),
            (254, LogicalType::Char),
            (255, LogicalType::Geometry),
        ];

        for (code, expected) in cases {
            assert_eq!(expected, decode(code, 0).unwrap(), "code: {code}");
        }
    }

    #[test]
    fn decode_unsupported() {
        for code in [14, 20, 244, 256, 9999, -1] {
            assert_eq!(Err(TypeError::Unsupported(code)), decode(code, 0));
        }
        assert_eq!(
            "unsupported type: 9999",
            decode(9999, 0).unwrap_err().to_string()
        );
    }

    #[test]
    fn decode_unsigned_integers() {
        let unsigned = WireFlags::UNSIGNED.bits() as i64;
        assert_eq!(LogicalType::Uint8, decode(1, unsigned).unwrap());
        assert_eq!(LogicalType::Uint16, decode(2, unsigned).unwrap());
        assert_eq!(LogicalType::Uint32, decode(3, unsigned).unwrap());
        assert_eq!(LogicalType::Uint64, decode(8, unsigned).unwrap());
        assert_eq!(LogicalType::Uint24, decode(9, unsigned).unwrap());
    }

    #[test]
    fn decode_char_variants() {
        assert_eq!(LogicalType::Char, decode(254, 0).unwrap());
        assert_eq!(LogicalType::Binary, decode(254, 0x80).unwrap());
        assert_eq!(LogicalType::Enum, decode(254, 0x100).unwrap());
        assert_eq!(LogicalType::Set, decode(254, 0x800).unwrap());
        // Binary checked first.
        assert_eq!(LogicalType::Binary, decode(254, 0x80 | 0x100 | 0x800).unwrap());
        // Enum checked before set.
        assert_eq!(LogicalType::Enum, decode(254, 0x100 | 0x800).unwrap());
    }

    #[test]
    fn decode_binary_strings() {
        for code in 249..=252 {
            assert_eq!(LogicalType::Blob, decode(code, 0x80).unwrap());
        }
        assert_eq!(LogicalType::VarBinary, decode(15, 0x80).unwrap());
        assert_eq!(LogicalType::VarBinary, decode(253, 0x80).unwrap());
    }

    #[test]
    fn decode_binary_year() {
        assert_eq!(LogicalType::VarBinary, decode(13, 0x80).unwrap());
        assert_eq!(LogicalType::Year, decode(13, 0x20).unwrap());
    }

    #[test]
    fn decode_ignores_stray_flags() {
        let stray = (WireFlags::NOT_NULL
            | WireFlags::PRI_KEY
            | WireFlags::BLOB
            | WireFlags::NUM
            | WireFlags::AUTO_INCREMENT)
            .bits() as i64;

        assert_eq!(LogicalType::Int32, decode(3, stray).unwrap());
        assert_eq!(LogicalType::Text, decode(252, stray).unwrap());
        // Unsigned only matters for integers.
        assert_eq!(LogicalType::VarChar, decode(253, 0x20).unwrap());
        // Binary doesn't matter for integers.
        assert_eq!(LogicalType::Int8, decode(1, 0x80).unwrap());
        // Neither flag matters for other types.
        assert_eq!(LogicalType::Float64, decode(5, 0x20 | 0x80).unwrap());
        assert_eq!(LogicalType::Json, decode(245, 0x80 | 0x100 | 0x800).unwrap());
        // Enum/set markers only matter for CHAR.
        assert_eq!(LogicalType::VarChar, decode(253, 0x100).unwrap());
        // Bits above the flag range.
        assert_eq!(LogicalType::Uint8, decode(1, (1 << 40) | 0x20).unwrap());
    }

    #[test]
    fn encode_table() {
        let cases = [
            (LogicalType::Int8, 1, 0),
            (LogicalType::Uint8, 1, 32),
            (LogicalType::Int16, 2, 0),
            (LogicalType::Uint16, 2, 32),
            (LogicalType::Int32, 3, 0),
            (LogicalType::Uint32, 3, 32),
            (LogicalType::Float32, 4, 0),
            (LogicalType::Float64, 5, 0),
            (LogicalType::Null, 6, 128),
            (LogicalType::Timestamp, 7, 0),
            (LogicalType::Int64, 8, 0),
            (LogicalType::Uint64, 8, 32),
            (LogicalType::Int24, 9, 0),
            (LogicalType::Uint24, 9, 32),
            (LogicalType::Date, 10, 128),
            (LogicalType::Time, 11, 128),
            (LogicalType::Datetime, 12, 128),
            (LogicalType::Year, 13, 32),
            (LogicalType::Bit, 16, 32),
            (LogicalType::Json, 245, 0),
            (LogicalType::Decimal, 246, 0),
            (LogicalType::Text, 252, 0),
            (LogicalType::Blob, 252, 128),
            (LogicalType::VarChar, 253, 0),
            (LogicalType::VarBinary, 253, 128),
            (LogicalType::Char, 254, 0),
            (LogicalType::Binary, 254, 128),
            (LogicalType::Enum, 254, 256),
            (LogicalType::Set, 254, 2048),
            (LogicalType::Geometry, 255, 0),
        ];

        for (typ, code, flags) in cases {
            let wire = encode(typ).unwrap();
            assert_eq!(code, wire.code(), "type: {typ}");
            assert_eq!(flags, wire.flag_bits(), "type: {typ}");
        }
    }

    #[test]
    fn encode_without_wire_mapping() {
        for typ in [
            LogicalType::Tuple,
            LogicalType::Expression,
            LogicalType::HexNum,
            LogicalType::HexVal,
        ] {
            assert_eq!(Err(TypeError::NoWireMapping(typ)), encode(typ));
        }
    }

    #[test]
    fn typed_decode_matches_raw() {
        let wire = WireType::new(ColumnType::VarString, WireFlags::BINARY | WireFlags::NOT_NULL);
        assert_eq!(LogicalType::VarBinary, decode_wire(wire));
        assert_eq!(
            decode_wire(wire),
            decode(wire.code() as i64, wire.flag_bits() as i64).unwrap()
        );
    }
}
