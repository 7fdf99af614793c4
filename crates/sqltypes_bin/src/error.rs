use coerrors::Code;
use sqltypes::TypeError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn code(&self) -> Code {
        match self {
            Self::Type(e) => e.code(),
            Self::SerdeJson(_) | Self::Io(_) => Code::Internal,
        }
    }
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;
