//! Canonical error codes used when reporting failures across service
//! boundaries.
//!
//! The numbering follows the familiar RPC status codes, extended with two
//! cluster specific codes.

use std::fmt;
use std::str::FromStr;

use serde::de::Visitor;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("Unknown error code: {0}")]
    UnknownCode(i32),

    #[error("Unknown error code name: {0}")]
    UnknownName(String),
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Code {
    /// Returned on success.
    Ok = 0,
    /// The operation was cancelled, typically by the caller.
    Canceled = 1,
    /// An error from an unknown error space, or an error raised by an API
    /// that does not return enough information.
    Unknown = 2,
    /// The caller specified an invalid argument, regardless of system
    /// state.
    InvalidArgument = 3,
    /// The operation expired before completion.
    DeadlineExceeded = 4,
    /// Some requested entity was not found.
    NotFound = 5,
    /// The entity the caller attempted to create already exists.
    AlreadyExists = 6,
    /// The caller does not have permission to execute the operation.
    PermissionDenied = 7,
    /// Some resource (quota, disk space) has been exhausted.
    ResourceExhausted = 8,
    /// The system is not in a state required for the operation. Callers
    /// should not retry until the state has been fixed.
    FailedPrecondition = 9,
    /// The operation was aborted, typically due to a concurrency issue.
    /// Callers may retry at a higher level.
    Aborted = 10,
    /// The operation was attempted past the valid range.
    OutOfRange = 11,
    /// The operation is not implemented or not supported.
    Unimplemented = 12,
    /// Some invariant expected by the underlying system has been broken.
    Internal = 13,
    /// The service is currently unavailable. Retrying with a backoff may
    /// succeed.
    Unavailable = 14,
    /// Unrecoverable data loss or corruption.
    DataLoss = 15,
    /// The request does not have valid authentication credentials.
    Unauthenticated = 16,
    /// A cluster operation might be in effect.
    ClusterEvent = 17,
    /// The topology server connection is read-only.
    ReadOnly = 18,
}

impl Code {
    pub const ALL: [Code; 19] = [
        Code::Ok,
        Code::Canceled,
        Code::Unknown,
        Code::InvalidArgument,
        Code::DeadlineExceeded,
        Code::NotFound,
        Code::AlreadyExists,
        Code::PermissionDenied,
        Code::ResourceExhausted,
        Code::FailedPrecondition,
        Code::Aborted,
        Code::OutOfRange,
        Code::Unimplemented,
        Code::Internal,
        Code::Unavailable,
        Code::DataLoss,
        Code::Unauthenticated,
        Code::ClusterEvent,
        Code::ReadOnly,
    ];

    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Canceled => "CANCELED",
            Self::Unknown => "UNKNOWN",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
            Self::Aborted => "ABORTED",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::Unimplemented => "UNIMPLEMENTED",
            Self::Internal => "INTERNAL",
            Self::Unavailable => "UNAVAILABLE",
            Self::DataLoss => "DATA_LOSS",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::ClusterEvent => "CLUSTER_EVENT",
            Self::ReadOnly => "READ_ONLY",
        }
    }
}

impl TryFrom<i32> for Code {
    type Error = CodeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(CodeError::UnknownCode(value))
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| CodeError::UnknownName(s.to_owned()))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

struct CodeVisitor;

impl Visitor<'_> for CodeVisitor {
    type Value = Code;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("error code name")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse()
            .map_err(|_e| serde::de::Error::invalid_value(serde::de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(CodeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_match_table_position() {
        for (idx, code) in Code::ALL.iter().enumerate() {
            assert_eq!(idx as i32, code.as_i32());
            assert_eq!(*code, Code::try_from(idx as i32).unwrap());
        }
    }

    #[test]
    fn unknown_numbers_rejected() {
        assert_eq!(Err(CodeError::UnknownCode(19)), Code::try_from(19));
        assert_eq!(Err(CodeError::UnknownCode(-1)), Code::try_from(-1));
    }

    #[test]
    fn names_round_trip() {
        for code in Code::ALL {
            assert_eq!(code, code.to_string().parse::<Code>().unwrap());
        }
        assert_eq!(Code::NotFound, "NOT_FOUND".parse::<Code>().unwrap());
        assert!("not_found".parse::<Code>().is_err());
    }

    #[test]
    fn serde_uses_names() {
        let s = serde_json::to_string(&Code::InvalidArgument).unwrap();
        assert_eq!("\"INVALID_ARGUMENT\"", s);

        let code: Code = serde_json::from_str("\"READ_ONLY\"").unwrap();
        assert_eq!(Code::ReadOnly, code);

        assert!(serde_json::from_str::<Code>("\"NOPE\"").is_err());
    }
}
