use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Special eligibility categories that reserve units ahead of the general draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Accessibility,
    CombatVeteran,
    ReserveDuty,
    LocalResident,
}

impl Category {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Accessibility,
            Self::CombatVeteran,
            Self::ReserveDuty,
            Self::LocalResident,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Accessibility => "Accessibility",
            Self::CombatVeteran => "Combat Veteran",
            Self::ReserveDuty => "Reserve Duty",
            Self::LocalResident => "Local Resident",
        }
    }

    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Accessibility => 0,
            Self::CombatVeteran => 1,
            Self::ReserveDuty => 2,
            Self::LocalResident => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryQuota {
    pub houses: u64,
    pub applicants: u64,
}

impl CategoryQuota {
    pub const fn new(houses: u64, applicants: u64) -> Self {
        Self { houses, applicants }
    }
}

/// Reserved units and registered applicants for every special category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryQuotas {
    quotas: [CategoryQuota; 4],
}

impl CategoryQuotas {
    pub fn get(&self, category: Category) -> CategoryQuota {
        self.quotas[category.slot()]
    }

    pub fn set(&mut self, category: Category, quota: CategoryQuota) {
        self.quotas[category.slot()] = quota;
    }

    pub fn designated_houses(&self) -> u64 {
        self.quotas
            .iter()
            .fold(0u64, |acc, quota| acc.saturating_add(quota.houses))
    }

    pub fn category_applicants(&self) -> u64 {
        self.quotas
            .iter()
            .fold(0u64, |acc, quota| acc.saturating_add(quota.applicants))
    }
}

/// Informational fields carried over from the ministry listing. Never used in
/// the allocation math.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotteryMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lottery_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotteryRecord {
    pub name: String,
    pub city: String,
    pub total_houses: u64,
    pub applicants: u64,
    pub quotas: CategoryQuotas,
    #[serde(default)]
    pub metadata: LotteryMetadata,
}

impl LotteryRecord {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        total_houses: u64,
        applicants: u64,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            total_houses,
            applicants,
            quotas: CategoryQuotas::default(),
            metadata: LotteryMetadata::default(),
        }
    }

    pub fn with_quota(mut self, category: Category, houses: u64, applicants: u64) -> Self {
        self.quotas
            .set(category, CategoryQuota::new(houses, applicants));
        self
    }

    pub fn with_metadata(mut self, metadata: LotteryMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn quota(&self, category: Category) -> CategoryQuota {
        self.quotas.get(category)
    }
}
