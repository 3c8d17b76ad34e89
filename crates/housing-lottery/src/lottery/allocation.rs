use super::domain::{Category, LotteryRecord};
use serde::Serialize;

/// How one special category fared before leftovers reach the general pool.
///
/// For [`Category::CombatVeteran`] the `unclaimed` units are forwarded to the
/// reserve-duty category rather than the general pool, and the reserve-duty
/// `available` figure includes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryOutcome {
    pub category: Category,
    pub available: u64,
    pub used: u64,
    pub unclaimed: u64,
    pub overflow: u64,
}

impl CategoryOutcome {
    fn settle(category: Category, available: u64, applicants: u64) -> Self {
        let used = available.min(applicants);
        Self {
            category,
            available,
            used,
            unclaimed: available - used,
            overflow: applicants.saturating_sub(available),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationResult {
    pub regular_houses: u64,
    pub general_pool_houses: u64,
    pub regular_applicants: u64,
    pub total_competitors: u64,
    pub win_probability: f64,
    pub categories: [CategoryOutcome; 4],
}

impl AllocationResult {
    pub fn category(&self, category: Category) -> &CategoryOutcome {
        &self.categories[category.slot()]
    }
}

/// Splits a lottery into its general pool and the applicants competing for it.
///
/// Reserved units left unclaimed by accessibility and local-resident applicants
/// fall straight into the general pool. Combat-veteran leftovers are first
/// offered to reserve-duty applicants and only what reserve duty leaves behind
/// reaches the general pool. Category applicants beyond their category's supply
/// compete for the general pool alongside regular applicants.
///
/// The win probability is the pool's fill ratio capped at 1, i.e. the chance a
/// single general applicant draws one of the pool's units.
pub fn allocate(record: &LotteryRecord) -> AllocationResult {
    let quotas = &record.quotas;
    let regular_houses = record
        .total_houses
        .saturating_sub(quotas.designated_houses());

    let accessibility = settle(record, Category::Accessibility, 0);
    let combat = settle(record, Category::CombatVeteran, 0);
    let reserve = settle(record, Category::ReserveDuty, combat.unclaimed);
    let local = settle(record, Category::LocalResident, 0);

    let general_pool_houses = accessibility
        .unclaimed
        .saturating_add(reserve.unclaimed)
        .saturating_add(local.unclaimed)
        .saturating_add(regular_houses);

    let regular_applicants = record
        .applicants
        .saturating_sub(quotas.category_applicants());

    let total_competitors = [accessibility, combat, reserve, local]
        .iter()
        .fold(regular_applicants, |acc, outcome| {
            acc.saturating_add(outcome.overflow)
        });

    AllocationResult {
        regular_houses,
        general_pool_houses,
        regular_applicants,
        total_competitors,
        win_probability: fill_ratio(general_pool_houses, total_competitors),
        categories: [accessibility, combat, reserve, local],
    }
}

fn settle(record: &LotteryRecord, category: Category, carried_over: u64) -> CategoryOutcome {
    let quota = record.quota(category);
    CategoryOutcome::settle(
        category,
        quota.houses.saturating_add(carried_over),
        quota.applicants,
    )
}

fn fill_ratio(houses: u64, competitors: u64) -> f64 {
    if competitors == 0 {
        return 0.0;
    }
    (houses as f64 / competitors as f64).min(1.0)
}
