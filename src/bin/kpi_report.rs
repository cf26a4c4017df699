use std::env;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};

use tipboard::fake_feed::{self, DEMO_TX_COUNT};
use tipboard::feed;
use tipboard::metrics::{compute_dashboard_stats, DashboardStats, Trend};
use tipboard::records::{parse_day, MatchRecord, Transaction};
use tipboard::settlement::{DemoResolver, Recorded};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let reference = env::var("REPORT_DATE")
        .ok()
        .and_then(|val| parse_day(&val))
        .unwrap_or_else(|| Utc::now().date_naive());

    let mut args = env::args().skip(1);
    let tx_path = args.next().map(PathBuf::from);
    let match_path = args.next().map(PathBuf::from);

    let transactions: Vec<Transaction> = match &tx_path {
        Some(path) => feed::load_transactions(path)?,
        None => {
            let count = env::var("FEED_TX_COUNT")
                .ok()
                .and_then(|val| val.parse::<usize>().ok())
                .unwrap_or(DEMO_TX_COUNT)
                .clamp(1, 10_000);
            fake_feed::generate_transactions(count, reference, &mut rand::thread_rng())
        }
    };

    let matches: Vec<MatchRecord> = match &match_path {
        Some(path) => feed::load_matches(path)?,
        None => fake_feed::demo_matches(reference),
    };

    // Snapshots carry recorded settlement results; only the synthetic fixture
    // leans on the demo resolver so its pending tips produce a number.
    let stats = if match_path.is_some() {
        compute_dashboard_stats(&transactions, &matches, reference, &mut Recorded)
    } else {
        let mut resolver = DemoResolver::new(rand::thread_rng());
        compute_dashboard_stats(&transactions, &matches, reference, &mut resolver)
    };

    if env::var("REPORT_JSON").map(|val| val == "1").unwrap_or(false) {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    print_report(&stats, reference);
    Ok(())
}

fn print_report(stats: &DashboardStats, reference: NaiveDate) {
    println!("KPI report for {}", reference.format("%B %Y"));
    println!(
        "  Revenue       {:>10}   {}",
        stats.revenue,
        delta_label(stats.revenue_change, stats.revenue_trend)
    );
    println!(
        "  Active users  {:>10}   {}",
        stats.active_users,
        delta_label(stats.users_change, stats.users_trend)
    );
    println!(
        "  Accuracy      {:>9.1}%   {}",
        stats.accuracy,
        delta_label(stats.accuracy_change, stats.accuracy_trend)
    );
}

fn delta_label(change: f64, trend: Trend) -> String {
    let tag = match trend {
        Trend::Up => "up",
        Trend::Down => "down",
        Trend::Flat => "flat",
    };
    format!("{change:+.1}% vs last month ({tag})")
}
