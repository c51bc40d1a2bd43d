//! REST resources exposed by the backend

use std::fmt;

/// The fifteen REST resources the dashboard reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Users,
    Vendors,
    DeliveryPartners,
    Orders,
    Stats,
    PlatformPerformance,
    Alerts,
    QuickActions,
    DeliveryZones,
    DeliveryShifts,
    WeeklySchedule,
    DeliveryPayouts,
    SupportTickets,
    SupportSummary,
    IssueTypes,
}

impl Endpoint {
    pub const ALL: [Endpoint; 15] = [
        Endpoint::Users,
        Endpoint::Vendors,
        Endpoint::DeliveryPartners,
        Endpoint::Orders,
        Endpoint::Stats,
        Endpoint::PlatformPerformance,
        Endpoint::Alerts,
        Endpoint::QuickActions,
        Endpoint::DeliveryZones,
        Endpoint::DeliveryShifts,
        Endpoint::WeeklySchedule,
        Endpoint::DeliveryPayouts,
        Endpoint::SupportTickets,
        Endpoint::SupportSummary,
        Endpoint::IssueTypes,
    ];

    /// Path relative to the base URL
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Users => "/users",
            Endpoint::Vendors => "/vendors",
            Endpoint::DeliveryPartners => "/deliveryPartners",
            Endpoint::Orders => "/orders",
            Endpoint::Stats => "/stats",
            Endpoint::PlatformPerformance => "/platformPerformance",
            Endpoint::Alerts => "/alerts",
            Endpoint::QuickActions => "/quickActions",
            Endpoint::DeliveryZones => "/deliveryZones",
            Endpoint::DeliveryShifts => "/deliveryShifts",
            Endpoint::WeeklySchedule => "/weeklySchedule",
            Endpoint::DeliveryPayouts => "/deliveryPayouts",
            Endpoint::SupportTickets => "/supportTickets",
            Endpoint::SupportSummary => "/supportSummary",
            Endpoint::IssueTypes => "/issueTypes",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entity;
    use crate::entities::{DeliveryPartner, Payout, Shift, SupportTicket, User};
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        assert_eq!(paths.len(), Endpoint::ALL.len());
    }

    #[test]
    fn test_collections_match_record_paths() {
        assert_eq!(User::collection_path(), Endpoint::Users.path());
        assert_eq!(DeliveryPartner::collection_path(), Endpoint::DeliveryPartners.path());
        assert_eq!(Payout::collection_path(), Endpoint::DeliveryPayouts.path());
        assert_eq!(Shift::collection_path(), Endpoint::DeliveryShifts.path());
        assert_eq!(SupportTicket::collection_path(), Endpoint::SupportTickets.path());
    }
}
