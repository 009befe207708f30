use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::account::errors::{AccountError, HashError};
use crate::domain::account::ports::PasswordHasher;
use crate::domain::account::value_objects::{Password, PasswordHash};

/// Argon2id password hasher implementation
///
/// Parameters follow the OWASP baseline:
/// - Memory cost: 19 MiB (19456 KiB)
/// - Time cost: 2 iterations
/// - Parallelism: 1 thread
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  const MEMORY_COST_KIB: u32 = 19456;
  const TIME_COST: u32 = 2;
  const PARALLELISM: u32 = 1;
  const OUTPUT_LEN: usize = 32;

  pub fn new() -> Result<Self, AccountError> {
    let params = Params::new(
      Self::MEMORY_COST_KIB,
      Self::TIME_COST,
      Self::PARALLELISM,
      Some(Self::OUTPUT_LEN),
    )
    .map_err(|e| {
      AccountError::Hash(HashError::HashingFailed(format!(
        "Failed to create Argon2 params: {}",
        e
      )))
    })?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }

  /// Minimum-cost parameters so test suites stay fast
  #[cfg(test)]
  pub(crate) fn weak() -> Self {
    let params = Params::new(Params::MIN_M_COST, Params::MIN_T_COST, 1, Some(Self::OUTPUT_LEN))
      .expect("minimum argon2 params are valid");

    Self {
      argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
    }
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AccountError> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = self
      .argon2
      .hash_password(password.as_str().as_bytes(), &salt)
      .map_err(|e| AccountError::Hash(HashError::HashingFailed(e.to_string())))?;

    PasswordHash::from_hash(hash.to_string()).map_err(|e| {
      AccountError::Hash(HashError::HashingFailed(format!(
        "Invalid hash format: {}",
        e
      )))
    })
  }

  /// Verification is constant-time inside `verify_password`
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AccountError> {
    let parsed_hash = Argon2PasswordHash::new(hashed_password.as_str()).map_err(|e| {
      AccountError::Hash(HashError::VerificationFailed(format!(
        "Invalid hash format: {}",
        e
      )))
    })?;

    match self
      .argon2
      .verify_password(password.as_str().as_bytes(), &parsed_hash)
    {
      Ok(_) => Ok(true),
      Err(argon2::password_hash::Error::Password) => Ok(false),
      Err(e) => Err(AccountError::Hash(HashError::VerificationFailed(
        e.to_string(),
      ))),
    }
  }
}
