use super::errors::ValidationError;

/// Free-form application status such as "Submitted" or "Interview"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationStatus(String);

impl ApplicationStatus {
  const MAX_LENGTH: usize = 50;

  pub fn new(status: impl Into<String>) -> Result<Self, ValidationError> {
    let status: String = status.into();
    let status = status.trim().to_string();

    if status.is_empty() || status.chars().count() > Self::MAX_LENGTH {
      return Err(ValidationError::InvalidStatus {
        max: Self::MAX_LENGTH,
      });
    }

    Ok(Self(status))
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

/// Display name of a school, major or degree type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogName(String);

impl CatalogName {
  const MAX_LENGTH: usize = 255;

  pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
    let name: String = name.into();
    let name = name.trim().to_string();

    if name.is_empty() || name.chars().count() > Self::MAX_LENGTH {
      return Err(ValidationError::InvalidCatalogName {
        max: Self::MAX_LENGTH,
      });
    }

    Ok(Self(name))
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}
