use coerrors::Code;

use crate::types::LogicalType;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unsupported type: {0}")]
    Unsupported(i64),

    #[error("unknown logical type code: {0}")]
    UnknownTypeCode(i32),

    #[error("unknown logical type name: {0}")]
    UnknownTypeName(String),

    #[error("type '{0}' has no wire representation")]
    NoWireMapping(LogicalType),
}

impl TypeError {
    /// Error code to report this failure under when propagating it to a
    /// remote caller.
    pub fn code(&self) -> Code {
        match self {
            Self::Unsupported(_) => Code::Unimplemented,
            Self::UnknownTypeCode(_) | Self::UnknownTypeName(_) => Code::NotFound,
            Self::NoWireMapping(_) => Code::InvalidArgument,
        }
    }
}

pub type Result<T, E = TypeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_message() {
        assert_eq!("unsupported type: 9999", TypeError::Unsupported(9999).to_string());
    }

    #[test]
    fn error_codes() {
        assert_eq!(Code::Unimplemented, TypeError::Unsupported(14).code());
        assert_eq!(Code::NotFound, TypeError::UnknownTypeCode(1).code());
        assert_eq!(Code::NotFound, TypeError::UnknownTypeName("x".to_string()).code());
        assert_eq!(
            Code::InvalidArgument,
            TypeError::NoWireMapping(LogicalType::Tuple).code()
        );
    }

    #[test]
    fn no_wire_mapping_message_uses_display_name() {
        assert_eq!(
            "type 'HEXNUM' has no wire representation",
            TypeError::NoWireMapping(LogicalType::HexNum).to_string()
        );
    }
}
