use clap::{Parser, Subcommand, ValueEnum};
use sqltypes::{LogicalType, TypeError};

#[derive(Debug, Parser)]
#[clap(name = "sqltypes")]
pub struct Arguments {
    /// Default log level, overridden by `RUST_LOG` when set.
    #[clap(long, env = "SQLTYPES_LOG_LEVEL", default_value = "warn")]
    pub log_level: tracing::Level,

    /// Log output format.
    #[clap(long, value_enum, env = "SQLTYPES_LOG_FORMAT", default_value_t = LogFormatArg::HumanReadable)]
    pub log_format: LogFormatArg,

    /// Display output mode.
    #[clap(long, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get the logical type for a MySQL column type and column flags.
    Decode {
        /// Column type code.
        #[clap(allow_negative_numbers = true, value_parser = parse_int)]
        column_type: i64,
        /// Column flag bits, decimal or 0x prefixed hex.
        #[clap(long, default_value = "0", value_parser = parse_int)]
        flags: i64,
    },
    /// Get the MySQL column type and flags for a logical type.
    Encode {
        /// Type name (e.g. VARCHAR) or numeric type code.
        #[clap(value_parser = parse_type)]
        typ: LogicalType,
    },
    /// Show the classification of a logical type.
    Classify {
        /// Type name (e.g. VARCHAR) or numeric type code.
        #[clap(value_parser = parse_type)]
        typ: LogicalType,
    },
    /// Check if a type seen in the binlog is compatible with a schema type.
    Equivalent {
        #[clap(value_parser = parse_type)]
        from_binlog: LogicalType,
        #[clap(value_parser = parse_type)]
        from_schema: LogicalType,
    },
    /// List all logical types.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    HumanReadable,
    Json,
    Compact,
}

impl From<LogFormatArg> for logutil::LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::HumanReadable => logutil::LogFormat::HumanReadable,
            LogFormatArg::Json => logutil::LogFormat::Json,
            LogFormatArg::Compact => logutil::LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    Text,
    Json,
}

/// Parse a logical type from its name or its numeric code.
pub fn parse_type(s: &str) -> Result<LogicalType, TypeError> {
    match s.parse::<i32>() {
        Ok(code) => LogicalType::try_from_code(code),
        Err(_) => s.parse(),
    }
}

pub fn parse_int(s: &str) -> Result<i64, std::num::ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => s.parse(),
    }
}
