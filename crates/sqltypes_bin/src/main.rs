mod args;
mod error;
mod output;

use std::io::{self, BufWriter, Write};

use args::{Arguments, Command};
use clap::Parser;
use error::Result;
use output::{ClassifyReport, DecodeReport, EncodeReport, EquivalentReport, ListReport, emit};
use tracing::debug;

/// Simple binary for inspecting logical types and their wire mapping.
fn main() {
    let args = Arguments::parse();
    logutil::configure_global_logger(args.log_level, args.log_format.into(), io::stderr);

    if let Err(err) = run(args) {
        println!("ERROR: {err} ({})", err.code());
        std::process::exit(1);
    }
}

fn run(args: Arguments) -> Result<()> {
    debug!(command = ?args.command, "running command");

    let mut stdout = BufWriter::new(io::stdout());
    let mode = args.output;

    match args.command {
        Command::Decode { column_type, flags } => {
            let typ = sqltypes::decode(column_type, flags)?;
            let report = DecodeReport {
                column_type,
                flags,
                logical_type: typ,
                code: typ.code(),
            };
            emit(&mut stdout, mode, &report)?;
        }
        Command::Encode { typ } => {
            let wire = sqltypes::encode(typ)?;
            emit(&mut stdout, mode, &EncodeReport::new(typ, wire))?;
        }
        Command::Classify { typ } => {
            emit(&mut stdout, mode, &ClassifyReport::new(typ))?;
        }
        Command::Equivalent {
            from_binlog,
            from_schema,
        } => {
            let report = EquivalentReport {
                from_binlog,
                from_schema,
                equivalent: sqltypes::are_types_equivalent(from_binlog, from_schema),
            };
            emit(&mut stdout, mode, &report)?;
        }
        Command::List => {
            emit(&mut stdout, mode, &ListReport::all())?;
        }
    }

    stdout.flush()?;
    Ok(())
}
