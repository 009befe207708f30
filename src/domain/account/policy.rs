//! Authorization policy
//!
//! Pure functions over the requester identity. Services evaluate a decision
//! before touching a record and turn a denial into `Forbidden` themselves.

use uuid::Uuid;

use super::entities::Requester;
use super::errors::AccountError;

/// Outcome of an authorization check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
  Permit,
  Deny,
}

impl Decision {
  fn from_bool(allowed: bool) -> Self {
    if allowed { Self::Permit } else { Self::Deny }
  }

  pub fn is_permitted(self) -> bool {
    self == Self::Permit
  }

  /// Converts a denial into `AccountError::Forbidden`
  pub fn enforce(self) -> Result<(), AccountError> {
    match self {
      Self::Permit => Ok(()),
      Self::Deny => Err(AccountError::Forbidden),
    }
  }
}

/// Whether the requester is the user owning the resource
pub fn is_owner(requester_id: Uuid, resource_owner_id: Uuid) -> bool {
  requester_id == resource_owner_id
}

pub fn is_admin(requester: &Requester) -> bool {
  requester.is_admin
}

/// Only the owner may act; admins get no override
pub fn authorize_owner(requester: &Requester, resource_owner_id: Uuid) -> Decision {
  Decision::from_bool(is_owner(requester.user_id, resource_owner_id))
}

/// Owner or admin may act (reads)
pub fn authorize_owner_or_admin(requester: &Requester, resource_owner_id: Uuid) -> Decision {
  Decision::from_bool(is_owner(requester.user_id, resource_owner_id) || is_admin(requester))
}

/// Admin-only operations
pub fn authorize_admin(requester: &Requester) -> Decision {
  Decision::from_bool(is_admin(requester))
}
