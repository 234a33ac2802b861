//! Local audit history
//!
//! Append-only, capped record of access decisions for local display. The
//! authoritative audit trail lives server-side; this buffer only keeps the
//! most recent entries so an admin screen can show "recent activity" without
//! a round trip.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::models::RbacUser;

/// One recorded decision or action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Entry id
    pub id: Uuid,
    /// Acting user
    pub user_id: Uuid,
    /// Action verb, as the caller supplied it
    pub action: String,
    /// Resource name, as the caller supplied it
    pub resource: String,
    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
    /// Free-form detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Capped FIFO of audit entries, shareable across UI components
#[derive(Debug)]
pub struct AuditLog {
    entries: Mutex<VecDeque<AuditLogEntry>>,
    capacity: usize,
}

impl AuditLog {
    /// Create a log retaining at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest once over capacity.
    ///
    /// Resource and action are taken as raw strings so attempts with invalid
    /// names can still be recorded.
    pub fn record(
        &self,
        user_id: Uuid,
        resource: impl Into<String>,
        action: impl Into<String>,
        details: Option<String>,
    ) {
        let entry = AuditLogEntry {
            id: Uuid::new_v4(),
            user_id,
            action: action.into(),
            resource: resource.into(),
            timestamp: Utc::now(),
            details,
        };

        let mut entries = self.entries.lock();
        entries.push_back(entry);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
    }

    /// Record the outcome of a permission check
    pub fn record_check(&self, user: &RbacUser, resource: &str, action: &str, granted: bool) {
        let details = if granted { "granted" } else { "denied" };
        self.record(user.id, resource, action, Some(details.to_string()));
    }

    /// Retained entries, oldest first
    pub fn recent(&self) -> Vec<AuditLogEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether anything has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Role;

    #[test]
    fn record_appends_in_order() {
        let log = AuditLog::new(10);
        let user = Uuid::new_v4();
        log.record(user, "clients", "read", None);
        log.record(user, "sales", "create", Some("invoice #42".to_string()));

        let entries = log.recent();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].resource, "clients");
        assert_eq!(entries[1].resource, "sales");
        assert_eq!(entries[1].details.as_deref(), Some("invoice #42"));
    }

    #[test]
    fn capacity_evicts_oldest() {
        let log = AuditLog::new(3);
        let user = Uuid::new_v4();
        for i in 0..5 {
            log.record(user, "sales", "read", Some(i.to_string()));
        }

        let entries = log.recent();
        assert_eq!(entries.len(), 3);
        // Entries 0 and 1 were evicted.
        assert_eq!(entries[0].details.as_deref(), Some("2"));
        assert_eq!(entries[2].details.as_deref(), Some("4"));
    }

    #[test]
    fn record_check_captures_outcome() {
        let log = AuditLog::new(5);
        let user = RbacUser::new(Uuid::new_v4(), Role::Viewer);
        log.record_check(&user, "users", "delete", false);

        let entries = log.recent();
        assert_eq!(entries[0].details.as_deref(), Some("denied"));
        assert_eq!(entries[0].user_id, user.id);
    }

    #[test]
    fn entry_serializes_without_empty_details() {
        let log = AuditLog::new(1);
        log.record(Uuid::new_v4(), "finance", "export", None);
        let json = serde_json::to_string(&log.recent()[0]).unwrap();
        assert!(!json.contains("details"));
    }
}
