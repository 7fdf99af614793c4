//! Predicates over a logical type's classification flags.
//!
//! Complete listing of the types matched by each predicate:
//!
//! - `is_signed`: INT8, INT16, INT24, INT32, INT64
//! - `is_unsigned`: UINT8, UINT16, UINT24, UINT32, UINT64, YEAR
//! - `is_integral`: the signed and unsigned types above
//! - `is_float`: FLOAT32, FLOAT64
//! - `is_number`: the integral and float types, DECIMAL
//! - `is_quoted`: TIMESTAMP, DATE, TIME, DATETIME, TEXT, BLOB, VARCHAR,
//!   VARBINARY, CHAR, BINARY, ENUM, SET, GEOMETRY, JSON
//! - `is_text`: TEXT, VARCHAR, CHAR, HEXNUM, HEXVAL
//! - `is_binary`: BLOB, VARBINARY, BINARY
//! - `is_date`: TIMESTAMP, DATE, TIME, DATETIME
//! - `is_null`: NULL_TYPE

use crate::types::{LogicalType, TypeFlags};

/// Classification flags for a logical type.
pub fn classify(typ: LogicalType) -> TypeFlags {
    typ.flags()
}

impl LogicalType {
    /// Signed or unsigned integral type representable in up to 64 bits.
    pub fn is_integral(self) -> bool {
        self.flags().contains(TypeFlags::INTEGRAL)
    }

    pub fn is_signed(self) -> bool {
        self.flags() & (TypeFlags::INTEGRAL | TypeFlags::UNSIGNED) == TypeFlags::INTEGRAL
    }

    /// Unsigned integral type.
    ///
    /// Not the same as `!is_signed()`.
    pub fn is_unsigned(self) -> bool {
        self.flags().contains(TypeFlags::INTEGRAL | TypeFlags::UNSIGNED)
    }

    pub fn is_float(self) -> bool {
        self.flags().contains(TypeFlags::FLOAT)
    }

    /// Quoted text or binary. BIT carries the quoted flag but is never
    /// quoted.
    pub fn is_quoted(self) -> bool {
        self.flags().contains(TypeFlags::QUOTED) && self != LogicalType::Bit
    }

    pub fn is_text(self) -> bool {
        self.flags().contains(TypeFlags::TEXT)
    }

    pub fn is_binary(self) -> bool {
        self.flags().contains(TypeFlags::BINARY)
    }

    /// Any kind of number.
    pub fn is_number(self) -> bool {
        self.is_integral() || self.is_float() || self == LogicalType::Decimal
    }

    /// Represents a date and/or time.
    pub fn is_date(self) -> bool {
        matches!(
            self,
            LogicalType::Datetime | LogicalType::Date | LogicalType::Timestamp | LogicalType::Time
        )
    }

    pub fn is_null(self) -> bool {
        self == LogicalType::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matching(pred: fn(LogicalType) -> bool) -> Vec<LogicalType> {
        LogicalType::ALL.into_iter().filter(|t| pred(*t)).collect()
    }

    #[test]
    fn signed() {
        use LogicalType::*;
        assert_eq!(vec![Int8, Int16, Int24, Int32, Int64], matching(LogicalType::is_signed));
    }

    #[test]
    fn unsigned() {
        use LogicalType::*;
        assert_eq!(
            vec![Uint8, Uint16, Uint24, Uint32, Uint64, Year],
            matching(LogicalType::is_unsigned)
        );
    }

    #[test]
    fn integral() {
        use LogicalType::*;
        assert_eq!(
            vec![
                Int8, Uint8, Int16, Uint16, Int24, Uint24, Int32, Uint32, Int64, Uint64, Year
            ],
            matching(LogicalType::is_integral)
        );
    }

    #[test]
    fn float() {
        use LogicalType::*;
        assert_eq!(vec![Float32, Float64], matching(LogicalType::is_float));
    }

    #[test]
    fn number() {
        use LogicalType::*;
        assert_eq!(
            vec![
                Int8, Uint8, Int16, Uint16, Int24, Uint24, Int32, Uint32, Int64, Uint64, Float32,
                Float64, Year, Decimal
            ],
            matching(LogicalType::is_number)
        );
    }

    #[test]
    fn quoted_excludes_bit() {
        use LogicalType::*;
        assert_eq!(
            vec![
                Timestamp, Date, Time, Datetime, Text, Blob, VarChar, VarBinary, Char, Binary,
                Enum, Set, Geometry, Json
            ],
            matching(LogicalType::is_quoted)
        );
        assert!(classify(Bit).contains(TypeFlags::QUOTED));
    }

    #[test]
    fn text_and_binary() {
        use LogicalType::*;
        assert_eq!(
            vec![Text, VarChar, Char, HexNum, HexVal],
            matching(LogicalType::is_text)
        );
        assert_eq!(vec![Blob, VarBinary, Binary], matching(LogicalType::is_binary));
    }

    #[test]
    fn date_and_null() {
        use LogicalType::*;
        assert_eq!(vec![Timestamp, Date, Time, Datetime], matching(LogicalType::is_date));
        assert_eq!(vec![Null], matching(LogicalType::is_null));
    }

    #[test]
    fn decimal_is_number_without_flags() {
        assert_eq!(TypeFlags::empty(), classify(LogicalType::Decimal));
        assert!(LogicalType::Decimal.is_number());
    }
}
