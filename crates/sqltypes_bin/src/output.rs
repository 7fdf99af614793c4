use std::fmt;
use std::io::Write;

use serde::Serialize;
use sqltypes::{LogicalType, WireType};

use crate::args::OutputMode;
use crate::error::Result;

/// Write a report in the requested output mode.
pub fn emit<W, T>(out: &mut W, mode: OutputMode, report: &T) -> Result<()>
where
    W: Write,
    T: Serialize + fmt::Display,
{
    match mode {
        OutputMode::Text => writeln!(out, "{report}")?,
        OutputMode::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub column_type: i64,
    pub flags: i64,
    pub logical_type: LogicalType,
    pub code: i32,
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "column type {} flags {:#x} => {} ({})",
            self.column_type, self.flags, self.logical_type, self.code
        )
    }
}

#[derive(Debug, Serialize)]
pub struct EncodeReport {
    pub logical_type: LogicalType,
    pub column_type: u8,
    pub flags: u32,
    pub flag_names: Vec<&'static str>,
}

impl EncodeReport {
    pub fn new(logical_type: LogicalType, wire: WireType) -> Self {
        EncodeReport {
            logical_type,
            column_type: wire.code(),
            flags: wire.flag_bits(),
            flag_names: wire.flags.iter_names().map(|(name, _)| name).collect(),
        }
    }
}

impl fmt::Display for EncodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} => column type {} flags {:#x}",
            self.logical_type, self.column_type, self.flags
        )?;
        if !self.flag_names.is_empty() {
            write!(f, " [{}]", self.flag_names.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub logical_type: LogicalType,
    pub code: i32,
    pub flags: Vec<&'static str>,
    pub integral: bool,
    pub signed: bool,
    pub unsigned: bool,
    pub float: bool,
    pub quoted: bool,
    pub text: bool,
    pub binary: bool,
    pub number: bool,
    pub date: bool,
    pub null: bool,
}

impl ClassifyReport {
    pub fn new(typ: LogicalType) -> Self {
        ClassifyReport {
            logical_type: typ,
            code: typ.code(),
            flags: sqltypes::classify(typ)
                .iter_names()
                .map(|(name, _)| name)
                .collect(),
            integral: typ.is_integral(),
            signed: typ.is_signed(),
            unsigned: typ.is_unsigned(),
            float: typ.is_float(),
            quoted: typ.is_quoted(),
            text: typ.is_text(),
            binary: typ.is_binary(),
            number: typ.is_number(),
            date: typ.is_date(),
            null: typ.is_null(),
        }
    }

    fn matched(&self) -> Vec<&'static str> {
        [
            ("integral", self.integral),
            ("signed", self.signed),
            ("unsigned", self.unsigned),
            ("float", self.float),
            ("quoted", self.quoted),
            ("text", self.text),
            ("binary", self.binary),
            ("number", self.number),
            ("date", self.date),
            ("null", self.null),
        ]
        .into_iter()
        .filter_map(|(name, is)| is.then_some(name))
        .collect()
    }
}

impl fmt::Display for ClassifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) flags [{}] is [{}]",
            self.logical_type,
            self.code,
            self.flags.join(", "),
            self.matched().join(", ")
        )
    }
}

#[derive(Debug, Serialize)]
pub struct EquivalentReport {
    pub from_binlog: LogicalType,
    pub from_schema: LogicalType,
    pub equivalent: bool,
}

impl fmt::Display for EquivalentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.equivalent {
            "equivalent"
        } else {
            "not equivalent"
        };
        write!(
            f,
            "binlog {} / schema {}: {verdict}",
            self.from_binlog, self.from_schema
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ListEntry {
    pub name: LogicalType,
    pub ordinal: u8,
    pub code: i32,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListReport(pub Vec<ListEntry>);

impl ListReport {
    pub fn all() -> Self {
        ListReport(
            LogicalType::ALL
                .into_iter()
                .map(|typ| ListEntry {
                    name: typ,
                    ordinal: typ.ordinal(),
                    code: typ.code(),
                })
                .collect(),
        )
    }
}

impl fmt::Display for ListReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, entry) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{:>3} {:>6} {}", entry.ordinal, entry.code, entry.name)?;
        }
        Ok(())
    }
}
