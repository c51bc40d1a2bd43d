//! Text rendering of the dashboard overview
//!
//! Expects the mock backend on http://localhost:3001 (or whatever
//! `COURIER_API_BASE_URL` / the YAML file passed as first argument says).
//!
//! ```sh
//! cargo run --example overview -- courier.yaml
//! ```

use anyhow::{Context, Result};
use courier::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => DeskConfig::from_yaml_file(&path)
            .with_context(|| format!("loading configuration from {path}"))?,
        None => DeskConfig::default_config(),
    }
    .with_env_overrides()?;

    init_tracing(&config.logging.filter);
    let dashboard = Dashboard::from_config(&config)?;

    let overview = dashboard.load_overview().await;
    print_stats(&dashboard);
    print_alerts(&dashboard);

    let report = dashboard.refresh_all().await;
    print_users(&dashboard);
    print_orders(&dashboard);

    for (module, err) in overview.failed.iter().chain(report.failed.iter()) {
        eprintln!("[{module}] {err}");
    }
    Ok(())
}

fn print_stats(dashboard: &Dashboard) {
    println!("== Overview ==");
    for stat in dashboard.stats.items() {
        println!(
            "{:<20} {:>12} {:>8}  ({:?})",
            stat.title,
            stat.value,
            stat.change,
            stat.icon.tone()
        );
    }
    if let DocumentView::Ready(chart) = DocumentView::resolve(&dashboard.chart.snapshot()) {
        for series in &chart.series {
            let total: f64 = series.data.iter().sum();
            println!("{:<20} {:>12.0} over {} days", series.name, total, chart.categories.len());
        }
    }
}

fn print_alerts(dashboard: &Dashboard) {
    println!("\n== Alerts ==");
    match dashboard.alerts.view() {
        ListView::Populated(alerts) => {
            for alert in alerts {
                let badge = Badge::alert(alert.level);
                println!("[{:<7}] {} ({})", badge.label, alert.message, alert.time);
            }
        }
        ListView::Empty { narrowed } => println!("{}", ListView::<Alert>::empty_message(narrowed)),
        ListView::Error { message } => println!("! {message}"),
        ListView::Loading => println!("loading..."),
    }
}

fn print_users(dashboard: &Dashboard) {
    println!("\n== Active customers ==");
    dashboard
        .users
        .set_filters(Filters::from_pairs([("status", "active")]));

    match dashboard.users.view() {
        ListView::Populated(users) => {
            for user in users {
                let badge = Badge::status(user.status);
                println!(
                    "{:<4} {:<22} {:<28} {:<10} {}",
                    user.id.to_string(), user.name, user.email, user.region, badge.label
                );
            }
        }
        ListView::Empty { narrowed } => println!("{}", ListView::<User>::empty_message(narrowed)),
        ListView::Error { message } => println!("! {message}"),
        ListView::Loading => println!("loading..."),
    }
}

fn print_orders(dashboard: &Dashboard) {
    println!("\n== Orders ==");
    let snapshot = dashboard.orders.snapshot();
    let visible = snapshot.filtered_items();
    for order in &visible {
        println!(
            "{:<10} {:<20} {:<18} {:>9} {}",
            order.id.to_string(),
            order.customer,
            order.vendor,
            order.total,
            Badge::status(order.status).label
        );
    }
    println!(
        "Showing {} of {} orders (page {} of {})",
        visible.len(),
        snapshot.items.len(),
        snapshot.pagination.page,
        snapshot.pagination.total_pages().max(1)
    );
}
