use crate::types::LogicalType;

/// Pairs of (binlog type, schema type) that are considered equivalent.
///
/// Binlog events only carry the base column type, without the per-column
/// flags needed to tell signedness or binary/enum/set string types apart. A
/// binlog reporting CHAR may therefore correspond to a BINARY, ENUM or SET
/// column in the schema.
///
/// The relation is directional. The binlog side always comes first.
pub const BINLOG_EQUIVALENT_TYPES: &[(LogicalType, LogicalType)] = &[
    (LogicalType::VarChar, LogicalType::VarBinary),
    (LogicalType::Char, LogicalType::Binary),
    (LogicalType::Char, LogicalType::Enum),
    (LogicalType::Char, LogicalType::Set),
    (LogicalType::Text, LogicalType::Blob),
    (LogicalType::Int8, LogicalType::Uint8),
    (LogicalType::Int16, LogicalType::Uint16),
    (LogicalType::Int24, LogicalType::Uint24),
    (LogicalType::Int32, LogicalType::Uint32),
    (LogicalType::Int64, LogicalType::Uint64),
];

/// Check if a type reported by the binlog is compatible with the type
/// declared by the schema.
///
/// Argument order matters, see [`BINLOG_EQUIVALENT_TYPES`].
pub fn are_types_equivalent(from_binlog: LogicalType, from_schema: LogicalType) -> bool {
    from_binlog == from_schema
        || BINLOG_EQUIVALENT_TYPES
            .iter()
            .any(|&(binlog, schema)| binlog == from_binlog && schema == from_schema)
}
