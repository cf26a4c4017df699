use chrono::{Duration as ChronoDuration, NaiveDate, Utc};
use once_cell::sync::Lazy;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::period::{current_month, previous_month};
use crate::records::{
    MatchRecord, RiskLevel, Tip, TipOutcome, TipTier, Transaction, TxStatus, DAY_FORMAT,
};

pub const DEMO_TX_COUNT: usize = 300;
/// Final prices vary by up to this fraction either side of the package base.
pub const PRICE_JITTER: f64 = 0.20;
/// Transaction dates are drawn from this many calendar days ending today.
pub const DATE_POOL_DAYS: i64 = 60;
pub const REFERENCE_LEN: usize = 10;

// Walked cumulatively against a Uniform(0,1) draw; order matters.
const STATUS_WEIGHTS: [(TxStatus, f64); 3] = [
    (TxStatus::Successful, 0.70),
    (TxStatus::Failed, 0.25),
    (TxStatus::Pending, 0.05),
];

pub const PAYER_NAMES: [&str; 18] = [
    "James Okafor",
    "Amara Eze",
    "Daniel Mensah",
    "Grace Adeyemi",
    "Samuel Osei",
    "Chioma Nwosu",
    "Victor Banda",
    "Fatima Diallo",
    "Peter Kamau",
    "Blessing Udo",
    "Michael Asante",
    "Ngozi Obi",
    "David Mwangi",
    "Aisha Bello",
    "Joseph Tetteh",
    "Esther Okon",
    "Emmanuel Dube",
    "Zainab Sow",
];

pub const PACKAGES: [(&str, u32); 6] = [
    ("Daily Single", 1500),
    ("Weekend Combo", 3500),
    ("Banker Bundle", 5000),
    ("VIP Weekly", 7500),
    ("VIP Monthly", 20000),
    ("Season Pass", 55000),
];

static DEMO_FEED: Lazy<Vec<Transaction>> = Lazy::new(|| {
    let mut rng = rand::thread_rng();
    generate_transactions(DEMO_TX_COUNT, Utc::now().date_naive(), &mut rng)
});

/// Shared demo dataset: generated once per process, read-only afterwards.
/// Stands in for the backend transaction feed until that is wired up.
pub fn demo_transactions() -> &'static [Transaction] {
    &DEMO_FEED
}

pub fn generate_transactions(
    count: usize,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Vec<Transaction> {
    let dates = date_pool(today);
    let mut out = Vec::with_capacity(count);

    for i in 0..count {
        let name = PAYER_NAMES[rng.gen_range(0..PAYER_NAMES.len())];
        let (package, base) = PACKAGES[rng.gen_range(0..PACKAGES.len())];
        let jitter = rng.gen_range(-PRICE_JITTER..PRICE_JITTER);
        let amount = ((base as f64) * (1.0 + jitter)).round().max(1.0) as u32;

        out.push(Transaction {
            // Newest first: the first record gets the highest id.
            id: (count - i) as u64,
            name: name.to_string(),
            email: derive_email(name),
            package: package.to_string(),
            amount,
            date: dates[rng.gen_range(0..dates.len())].clone(),
            time: format!("{:02}:{:02}", rng.gen_range(0..24), rng.gen_range(0..60)),
            status: sample_status(rng),
            reference: reference_code(rng),
        });
    }

    out.sort_by(|a, b| b.id.cmp(&a.id));
    out
}

/// Match/tip fixture spanning the current and previous month so the accuracy
/// card has settled and pending tips to work with in demo mode.
pub fn demo_matches(today: NaiveDate) -> Vec<MatchRecord> {
    let this_month = current_month(today).start;
    let last_month = previous_month(today).start;

    vec![
        fixture_match(
            "dm-1",
            "Premier League",
            "Arsenal",
            "Chelsea",
            offset_day(this_month, 1),
            "17:30",
            "finished",
            vec![
                tip("1X2", "Home win", RiskLevel::Low, TipOutcome::Won, TipTier::Free),
                tip("Over/Under", "Over 2.5", RiskLevel::Medium, TipOutcome::Won, TipTier::Premium),
                tip("BTTS", "Yes", RiskLevel::Medium, TipOutcome::Lost, TipTier::Free),
            ],
        ),
        fixture_match(
            "dm-2",
            "La Liga",
            "Sevilla",
            "Valencia",
            offset_day(this_month, 6),
            "20:00",
            "finished",
            vec![
                tip("1X2", "Away win", RiskLevel::High, TipOutcome::Won, TipTier::Premium),
                tip("Over/Under", "Under 3.5", RiskLevel::Low, TipOutcome::Pending, TipTier::Free),
            ],
        ),
        fixture_match(
            "dm-3",
            "Serie A",
            "Torino",
            "Bologna",
            offset_day(this_month, 12),
            "19:45",
            "upcoming",
            vec![
                tip("Double Chance", "1X", RiskLevel::Low, TipOutcome::Pending, TipTier::Free),
                tip("1X2", "Home win", RiskLevel::Medium, TipOutcome::Pending, TipTier::Premium),
            ],
        ),
        fixture_match(
            "dm-4",
            "Premier League",
            "Everton",
            "Fulham",
            offset_day(last_month, 3),
            "15:00",
            "finished",
            vec![
                tip("1X2", "Draw", RiskLevel::High, TipOutcome::Lost, TipTier::Free),
                tip("Over/Under", "Over 1.5", RiskLevel::Low, TipOutcome::Won, TipTier::Free),
            ],
        ),
        fixture_match(
            "dm-5",
            "Bundesliga",
            "Mainz",
            "Augsburg",
            offset_day(last_month, 10),
            "18:30",
            "finished",
            vec![
                tip("BTTS", "No", RiskLevel::Medium, TipOutcome::Won, TipTier::Premium),
                tip("1X2", "Away win", RiskLevel::High, TipOutcome::Pending, TipTier::Premium),
            ],
        ),
    ]
}

fn date_pool(today: NaiveDate) -> Vec<String> {
    // Most recent day first, today included.
    (0..DATE_POOL_DAYS)
        .filter_map(|offset| today.checked_sub_signed(ChronoDuration::days(offset)))
        .map(|day| day.format(DAY_FORMAT).to_string())
        .collect()
}

fn derive_email(name: &str) -> String {
    let user = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".");
    format!("{user}@example.com")
}

fn sample_status(rng: &mut impl Rng) -> TxStatus {
    let u = rng.gen_range(0.0..1.0);
    let mut cumulative = 0.0;
    for (status, weight) in STATUS_WEIGHTS {
        cumulative += weight;
        if u <= cumulative {
            return status;
        }
    }
    // Float drift can leave the draw above the final cumulative weight.
    STATUS_WEIGHTS[STATUS_WEIGHTS.len() - 1].0
}

fn reference_code(rng: &mut impl Rng) -> String {
    rng.sample_iter(Alphanumeric)
        .take(REFERENCE_LEN)
        .map(char::from)
        .collect()
}

fn offset_day(month_start: NaiveDate, offset: i64) -> String {
    month_start
        .checked_add_signed(ChronoDuration::days(offset))
        .unwrap_or(month_start)
        .format(DAY_FORMAT)
        .to_string()
}

fn tip(
    market: &str,
    prediction: &str,
    risk: RiskLevel,
    outcome: TipOutcome,
    tier: TipTier,
) -> Tip {
    Tip {
        market: market.to_string(),
        prediction: prediction.to_string(),
        risk,
        outcome,
        tier,
    }
}

#[allow(clippy::too_many_arguments)]
fn fixture_match(
    id: &str,
    league: &str,
    home: &str,
    away: &str,
    date: String,
    time: &str,
    status: &str,
    tips: Vec<Tip>,
) -> MatchRecord {
    MatchRecord {
        id: id.to_string(),
        league: league.to_string(),
        home: home.to_string(),
        away: away.to_string(),
        date,
        time: time.to_string(),
        status: status.to_string(),
        tips,
    }
}
