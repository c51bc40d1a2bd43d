//! Dashboard context owning every store module
//!
//! There is no global store: a `Dashboard` is built explicitly from an
//! [`ApiClient`] and handed to whatever renders the pages. Tests build
//! isolated instances against mock servers.

use crate::client::{ApiClient, Endpoint, RestDataService, RestResource};
use crate::config::DeskConfig;
use crate::core::entity::{Data, Entity};
use crate::core::error::{DeskError, DeskResult};
use crate::core::query::QueryParams;
use crate::entities::{
    Alert, ChartData, DeliveryPartner, DeliveryZone, IssueType, Order, Payout, QuickAction,
    ScheduleDay, Shift, StatCard, SupportSummary, SupportTicket, User, Vendor,
};
use crate::store::{EntityStore, ResourceStore};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Support page modules
#[derive(Clone)]
pub struct SupportStores {
    pub tickets: EntityStore<SupportTicket>,
    pub summary: ResourceStore<Vec<SupportSummary>>,
    pub issue_types: ResourceStore<Vec<IssueType>>,
}

/// Every store module of the admin dashboard
#[derive(Clone)]
pub struct Dashboard {
    pub users: EntityStore<User>,
    pub vendors: EntityStore<Vendor>,
    pub delivery_partners: EntityStore<DeliveryPartner>,
    pub orders: EntityStore<Order>,
    pub payouts: EntityStore<Payout>,
    pub shifts: EntityStore<Shift>,
    pub weekly_schedule: ResourceStore<Vec<ScheduleDay>>,
    pub zones: EntityStore<DeliveryZone>,
    pub alerts: EntityStore<Alert>,
    pub stats: EntityStore<StatCard>,
    pub chart: ResourceStore<ChartData>,
    pub quick_actions: EntityStore<QuickAction>,
    pub support: SupportStores,
}

fn collection<T: Data>(client: &ApiClient) -> EntityStore<T> {
    EntityStore::new(Arc::new(RestDataService::<T>::new(client.clone())))
}

fn document<R>(client: &ApiClient, name: &'static str, endpoint: Endpoint) -> ResourceStore<R>
where
    R: DeserializeOwned + Clone + Default + Send + Sync + 'static,
{
    ResourceStore::new(name, Arc::new(RestResource::<R>::new(client.clone(), endpoint)))
}

impl Dashboard {
    /// Build every module over the REST backend behind `client`
    pub fn new(client: ApiClient) -> Self {
        Self {
            users: collection(&client),
            vendors: collection(&client),
            delivery_partners: collection(&client),
            orders: collection(&client),
            payouts: collection(&client),
            shifts: collection(&client),
            weekly_schedule: document(&client, "weeklySchedule", Endpoint::WeeklySchedule),
            zones: collection(&client),
            alerts: collection(&client),
            stats: collection(&client),
            chart: document(&client, "platformPerformance", Endpoint::PlatformPerformance),
            quick_actions: collection(&client),
            support: SupportStores {
                tickets: collection(&client),
                summary: document(&client, "supportSummary", Endpoint::SupportSummary),
                issue_types: document(&client, "issueTypes", Endpoint::IssueTypes),
            },
        }
    }

    /// Validate `config` and build the client and every module from it
    pub fn from_config(config: &DeskConfig) -> DeskResult<Self> {
        config.validate()?;
        let client = ApiClient::new(&config.api)?;
        tracing::info!(base_url = client.base_url(), "dashboard created");
        Ok(Self::new(client))
    }

    /// Load the modules of the overview page
    pub async fn load_overview(&self) -> RefreshReport {
        let params = QueryParams::new();
        let (stats, chart, alerts, actions) = futures::join!(
            self.stats.fetch_all(&params),
            self.chart.fetch(),
            self.alerts.fetch_all(&params),
            self.quick_actions.fetch_all(&params),
        );

        let mut report = RefreshReport::default();
        report.record(StatCard::resource_name(), stats);
        report.record(self.chart.name(), chart);
        report.record(Alert::resource_name(), alerts);
        report.record(QuickAction::resource_name(), actions);
        report.log("overview");
        report
    }

    /// Fetch every module concurrently
    ///
    /// A failing module records its own error; the others load regardless.
    pub async fn refresh_all(&self) -> RefreshReport {
        let params = QueryParams::new();
        let (
            users,
            vendors,
            partners,
            orders,
            payouts,
            shifts,
            schedule,
            zones,
            alerts,
            stats,
            chart,
            actions,
            tickets,
            summary,
            issue_types,
        ) = futures::join!(
            self.users.fetch_all(&params),
            self.vendors.fetch_all(&params),
            self.delivery_partners.fetch_all(&params),
            self.orders.fetch_all(&params),
            self.payouts.fetch_all(&params),
            self.shifts.fetch_all(&params),
            self.weekly_schedule.fetch(),
            self.zones.fetch_all(&params),
            self.alerts.fetch_all(&params),
            self.stats.fetch_all(&params),
            self.chart.fetch(),
            self.quick_actions.fetch_all(&params),
            self.support.tickets.fetch_all(&params),
            self.support.summary.fetch(),
            self.support.issue_types.fetch(),
        );

        let mut report = RefreshReport::default();
        report.record(User::resource_name(), users);
        report.record(Vendor::resource_name(), vendors);
        report.record(DeliveryPartner::resource_name(), partners);
        report.record(Order::resource_name(), orders);
        report.record(Payout::resource_name(), payouts);
        report.record(Shift::resource_name(), shifts);
        report.record(self.weekly_schedule.name(), schedule);
        report.record(DeliveryZone::resource_name(), zones);
        report.record(Alert::resource_name(), alerts);
        report.record(StatCard::resource_name(), stats);
        report.record(self.chart.name(), chart);
        report.record(QuickAction::resource_name(), actions);
        report.record(SupportTicket::resource_name(), tickets);
        report.record(self.support.summary.name(), summary);
        report.record(self.support.issue_types.name(), issue_types);
        report.log("all");
        report
    }
}

/// Outcome of loading several modules at once
#[derive(Debug, Default)]
pub struct RefreshReport {
    pub loaded: Vec<&'static str>,
    pub failed: Vec<(&'static str, DeskError)>,
}

impl RefreshReport {
    fn record<T>(&mut self, module: &'static str, result: DeskResult<T>) {
        match result {
            Ok(_) => self.loaded.push(module),
            Err(err) => self.failed.push((module, err)),
        }
    }

    fn log(&self, scope: &str) {
        if self.failed.is_empty() {
            tracing::info!(scope, loaded = self.loaded.len(), "modules loaded");
        } else {
            for (module, err) in &self.failed {
                tracing::warn!(scope, module, error = %err, "module failed to load");
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
