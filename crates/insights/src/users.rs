//! User-side insight aggregations.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use storelens_core::{Envelope, TransactionData, UserData};

use crate::rank::accumulate_in_order;

/// Count of users per fixed age band.
///
/// Band membership is `as_of_year - birth_year`; an unparseable birth year
/// counts as age zero, landing in the lowest band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeDistribution {
    #[serde(rename = "0-18")]
    pub from_0_to_18: u64,
    #[serde(rename = "19-30")]
    pub from_19_to_30: u64,
    #[serde(rename = "31-45")]
    pub from_31_to_45: u64,
    #[serde(rename = "46-60")]
    pub from_46_to_60: u64,
    #[serde(rename = "61+")]
    pub over_60: u64,
}

impl AgeDistribution {
    fn record(&mut self, age: i32) {
        if age <= 18 {
            self.from_0_to_18 += 1;
        } else if age <= 30 {
            self.from_19_to_30 += 1;
        } else if age <= 45 {
            self.from_31_to_45 += 1;
        } else if age <= 60 {
            self.from_46_to_60 += 1;
        } else {
            self.over_60 += 1;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatistics {
    pub total_users: usize,
    pub gender_distribution: BTreeMap<String, u64>,
    pub age_distribution: AgeDistribution,
}

/// Bundle served by the user-insight surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInsights {
    /// Transaction count per `user_name` (the legacy "spending" metric).
    pub spending: BTreeMap<String, u64>,
    pub statistics: UserStatistics,
    pub most_active_user: Option<String>,
    pub inactive_users: Vec<String>,
}

/// Transaction count grouped by `user_name`.
pub fn transactions_per_user(transactions: &[Envelope<TransactionData>]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for transaction in transactions {
        *counts
            .entry(transaction.data().user_name.clone())
            .or_insert(0) += 1;
    }
    counts
}

/// The `user_name` with the most transactions.
///
/// Ties resolve to the name seen first in the transaction stream; an empty
/// input yields `None`.
pub fn most_active_user(transactions: &[Envelope<TransactionData>]) -> Option<String> {
    let counts = accumulate_in_order(
        transactions
            .iter()
            .map(|transaction| (transaction.data().user_name.clone(), 1u64)),
    );

    let mut best: Option<(String, u64)> = None;
    for (name, count) in counts {
        match &best {
            Some((_, best_count)) if *best_count >= count => {}
            _ => best = Some((name, count)),
        }
    }
    best.map(|(name, _)| name)
}

/// User names with zero transactions, in user encounter order.
pub fn inactive_users(
    users: &[Envelope<UserData>],
    transactions: &[Envelope<TransactionData>],
) -> Vec<String> {
    let active: HashSet<&str> = transactions
        .iter()
        .map(|transaction| transaction.data().user_name.as_str())
        .collect();

    let mut seen = HashSet::new();
    users
        .iter()
        .map(|user| user.data().name.as_str())
        .filter(|name| !active.contains(name) && seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Total count, gender distribution, and age distribution.
///
/// `as_of` pins the year the ages are computed against, so results are
/// reproducible.
pub fn user_statistics(users: &[Envelope<UserData>], as_of: DateTime<Utc>) -> UserStatistics {
    let current_year = as_of.year();
    let mut gender_distribution = BTreeMap::new();
    let mut age_distribution = AgeDistribution::default();

    for user in users {
        let data = user.data();
        *gender_distribution.entry(data.gender.clone()).or_insert(0) += 1;

        let birth_year = parse_birth_year(&data.dob).unwrap_or(current_year);
        age_distribution.record(current_year - birth_year);
    }

    UserStatistics {
        total_users: users.len(),
        gender_distribution,
        age_distribution,
    }
}

/// Compute the full user-insight bundle.
pub fn user_insights(
    users: &[Envelope<UserData>],
    transactions: &[Envelope<TransactionData>],
    as_of: DateTime<Utc>,
) -> UserInsights {
    UserInsights {
        spending: transactions_per_user(transactions),
        statistics: user_statistics(users, as_of),
        most_active_user: most_active_user(transactions),
        inactive_users: inactive_users(users, transactions),
    }
}

/// First four characters of the ISO date string, as a year.
fn parse_birth_year(dob: &str) -> Option<i32> {
    dob.get(..4)?.parse().ok()
}
