use std::fmt;

use thiserror::Error;

use super::messages;

/// Boxed cause attached to a [`DomainError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Classification of a failure, independent of where it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request was malformed or violated a business rule
    InvalidInput,
    /// Login failed; never says whether the phone number or the password was wrong
    InvalidCredentials,
    /// A token failed signature, algorithm, subject or time checks
    InvalidToken,
    /// A protected operation was called without a usable access token
    Unauthorized,
    /// The requested record does not exist
    NotFound,
    /// The backing store failed or did not answer in time
    Storage,
    /// Anything else, including hashing and signing failures
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::InvalidCredentials => "invalid_credentials",
            ErrorKind::InvalidToken => "invalid_token",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Storage => "storage",
            ErrorKind::Internal => "internal",
        }
    }

    /// Whether the caller, rather than the system, is at fault
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorKind::Storage | ErrorKind::Internal)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by every fallible core operation
#[derive(Debug, Error)]
#[error("{op}: {message}")]
pub struct DomainError {
    kind: ErrorKind,
    op: &'static str,
    message: String,
    field: Option<&'static str>,
    #[source]
    source: Option<BoxError>,
}

impl DomainError {
    pub fn new(kind: ErrorKind, op: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            op,
            message: message.into(),
            field: None,
            source: None,
        }
    }

    /// Input rejected because of `field`
    pub fn invalid_input(op: &'static str, field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, op, message).with_field(field)
    }

    pub fn invalid_credentials(op: &'static str) -> Self {
        Self::new(ErrorKind::InvalidCredentials, op, messages::INVALID_CREDENTIALS)
    }

    pub fn invalid_token(op: &'static str) -> Self {
        Self::new(ErrorKind::InvalidToken, op, messages::INVALID_TOKEN)
    }

    pub fn unauthorized(op: &'static str) -> Self {
        Self::new(ErrorKind::Unauthorized, op, messages::UNAUTHORIZED)
    }

    pub fn not_found(op: &'static str) -> Self {
        Self::new(ErrorKind::NotFound, op, messages::RECORD_NOT_FOUND)
    }

    pub fn storage(op: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, op, message)
    }

    pub fn internal(op: &'static str) -> Self {
        Self::new(ErrorKind::Internal, op, messages::SOMETHING_WENT_WRONG)
    }

    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Re-attribute the error to an outer operation.
    ///
    /// Kind, message and field are carried over; the original error becomes
    /// the source so the full operation chain stays visible in logs.
    pub fn wrap(self, op: &'static str) -> Self {
        Self {
            kind: self.kind,
            op,
            message: self.message.clone(),
            field: self.field,
            source: Some(Box::new(self)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn op(&self) -> &'static str {
        self.op
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self) -> Option<&'static str> {
        self.field
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Operations from the outermost to the one that raised the error
    pub fn op_chain(&self) -> Vec<&'static str> {
        let mut chain = vec![self.op];
        let mut current: Option<&(dyn std::error::Error + 'static)> = self
            .source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static));
        while let Some(err) = current {
            match err.downcast_ref::<DomainError>() {
                Some(inner) => {
                    chain.push(inner.op);
                    current = inner
                        .source
                        .as_deref()
                        .map(|e| e as &(dyn std::error::Error + 'static));
                }
                None => break,
            }
        }
        chain
    }
}
