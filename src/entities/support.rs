//! Driver support: tickets (`/supportTickets`), the summary tiles
//! (`/supportSummary`) and the issue breakdown (`/issueTypes`)

use crate::core::{EntityId, Priority, Status};
use crate::entities::text_or_number;
use crate::impl_record;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SupportTicket {
    /// Ticket code, e.g. `TICKET-1001`
    pub id: EntityId,
    pub driver: String,
    pub issue: String,
    /// Issue category, e.g. `Technical`
    #[serde(rename = "type")]
    pub kind: String,
    pub status: Status,
    pub priority: Priority,
    #[serde(default)]
    pub created: String,
}

impl SupportTicket {
    /// Resolved tickets no longer offer the resolve action
    pub fn can_resolve(&self) -> bool {
        self.status != Status::Resolved
    }
}

impl_record!(
    SupportTicket, "supportTickets", "ticket",
    draft: SupportTicket,
    search: ["id", "driver", "issue", "type", "status", "priority", "created"],
    filters: ["status", "priority", "type"],
    fields: {
        "id" => id,
        "driver" => driver,
        "issue" => issue,
        "type" => kind,
        "status" => status,
        "priority" => priority,
        "created" => created,
    }
);

/// A summary tile such as `Open Tickets: 3`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportSummary {
    pub label: String,
    #[serde(deserialize_with = "text_or_number")]
    pub value: String,
    #[serde(default)]
    pub color: String,
}

/// Share of tickets per issue category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueType {
    pub name: String,
    pub percentage: f64,
    #[serde(default)]
    pub color: String,
}
