// src/domain/audit.rs
use chrono::{DateTime, Utc};

use crate::domain::user::UserId;

/// Who created and last touched a row, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
    pub created_by: UserId,
    pub updated_by: UserId,
}

impl AuditStamp {
    pub fn new(actor: UserId, now: DateTime<Utc>) -> Self {
        Self {
            created_on: now,
            updated_on: now,
            created_by: actor,
            updated_by: actor,
        }
    }
}
