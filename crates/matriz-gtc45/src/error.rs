use thiserror::Error;

/// Error types for the GTC-45 scoring domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A raw numeric level outside the enumerated set for its factor
    #[error("invalid value {valor} for {campo}: must be one of {permitidos}")]
    NivelInvalido {
        campo: &'static str,
        valor: u8,
        permitidos: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
