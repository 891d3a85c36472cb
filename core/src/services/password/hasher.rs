use crate::errors::{DomainError, ErrorKind};

/// Longest password bcrypt can hash without truncation
pub const MAX_PASSWORD_BYTES: usize = 72;

/// One-way password hashing
///
/// Both operations are CPU bound; async callers should run them on a
/// blocking thread.
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` with a fresh salt
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Whether `password` matches `hash`; a malformed hash never matches
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// bcrypt-backed [`PasswordHasher`]
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        const OP: &str = "bcrypt::hash";

        if password.len() > MAX_PASSWORD_BYTES {
            return Err(DomainError::new(
                ErrorKind::Internal,
                OP,
                format!("password must not exceed {} bytes", MAX_PASSWORD_BYTES),
            ));
        }

        bcrypt::hash(password, self.cost).map_err(|e| DomainError::internal(OP).with_source(e))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        // bcrypt ignores everything past 72 bytes, so longer input could
        // match a hash of its prefix.
        if password.len() > MAX_PASSWORD_BYTES {
            return false;
        }
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}
