use crate::lottery::{Category, LotteryRecord};

/// Four lotteries across three cities, useful for demos and smoke tests.
pub fn sample_records() -> Vec<LotteryRecord> {
    vec![
        LotteryRecord::new("Example A (2654)", "Tel Aviv", 250, 2508)
            .with_quota(Category::Accessibility, 8, 1)
            .with_quota(Category::CombatVeteran, 37, 0)
            .with_quota(Category::ReserveDuty, 50, 0)
            .with_quota(Category::LocalResident, 50, 265),
        LotteryRecord::new("Example B (2655)", "Tel Aviv", 120, 1300)
            .with_quota(Category::Accessibility, 5, 7)
            .with_quota(Category::CombatVeteran, 10, 12)
            .with_quota(Category::ReserveDuty, 12, 40),
        LotteryRecord::new("Example C (2656)", "Haifa", 90, 600)
            .with_quota(Category::CombatVeteran, 5, 2)
            .with_quota(Category::ReserveDuty, 8, 3)
            .with_quota(Category::LocalResident, 10, 70),
        LotteryRecord::new("Example D (2657)", "Jerusalem", 300, 3000)
            .with_quota(Category::Accessibility, 3, 6)
            .with_quota(Category::CombatVeteran, 15, 20)
            .with_quota(Category::ReserveDuty, 20, 10)
            .with_quota(Category::LocalResident, 40, 50),
    ]
}
