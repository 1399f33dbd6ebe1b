use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Seed hours offered when the owner adds a peak tier. Hours already claimed
/// by another tier are filtered out, never stolen.
pub const PEAK_PRESET_HOURS: [u8; 7] = [11, 12, 13, 17, 18, 19, 20];

/// Seed hours for an off-peak tier, filtered the same way.
pub const OFF_PEAK_PRESET_HOURS: [u8; 10] = [6, 7, 8, 9, 10, 14, 15, 16, 21, 22];

const PEAK_MULTIPLIER: f64 = 1.5;
const OFF_PEAK_MULTIPLIER: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierKind {
    Peak,
    OffPeak,
    Custom,
}

impl TierKind {
    fn default_label(&self) -> &'static str {
        match self {
            TierKind::Peak => "Peak hours",
            TierKind::OffPeak => "Off-peak hours",
            TierKind::Custom => "Custom tier",
        }
    }
}

/// A named, priced subset of the 24 hours of a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPriceTier {
    pub id: Uuid,
    pub label: String,
    /// Claimed hours 0-23, kept sorted ascending.
    pub hours: Vec<u8>,
    pub price: f64,
    pub kind: TierKind,
}

/// Hour-of-day pricing for one asset.
///
/// Invariant: across all tiers, every hour 0-23 belongs to at most one tier.
/// A claimed hour bills at its tier's price, an unclaimed hour at
/// `default_price`, and when `enabled` is false the whole config is treated
/// as absent and every hour bills at `default_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPricingConfig {
    pub enabled: bool,
    pub tiers: Vec<HourlyPriceTier>,
    pub default_price: f64,
}

impl HourlyPricingConfig {
    pub fn new(default_price: f64) -> HourlyPricingConfig {
        HourlyPricingConfig {
            enabled: false,
            tiers: Vec::new(),
            default_price,
        }
    }

    /// Toggles `hour` on the tier identified by `tier_id`.
    ///
    /// If another tier currently claims the hour it is removed there first,
    /// keeping the one-tier-per-hour invariant. The target tier then gains
    /// the hour if it was absent or loses it if it was present, and its hour
    /// list is re-sorted. Returns `None` for an unknown tier id or an hour
    /// outside 0-23.
    pub fn assign_hour_to_tier(&self, tier_id: Uuid, hour: u8) -> Option<HourlyPricingConfig> {
        if hour > 23 || !self.tiers.iter().any(|t| t.id == tier_id) {
            return None;
        }

        let mut next = self.clone();
        for tier in next.tiers.iter_mut() {
            if tier.id != tier_id {
                tier.hours.retain(|h| *h != hour);
            }
        }

        let tier = next
            .tiers
            .iter_mut()
            .find(|t| t.id == tier_id)
            .expect("tier id checked above");
        if let Some(pos) = tier.hours.iter().position(|h| *h == hour) {
            tier.hours.remove(pos);
        } else {
            tier.hours.push(hour);
            tier.hours.sort_unstable();
        }
        Some(next)
    }

    /// Appends a new tier seeded for `kind`.
    ///
    /// Peak and off-peak tiers start with their preset hours minus anything
    /// already claimed, priced at `default_price` times 1.5 or 0.75
    /// (rounded). Custom tiers start empty at `default_price`.
    pub fn add_tier(&self, kind: TierKind) -> HourlyPricingConfig {
        let claimed: Vec<u8> = self
            .tiers
            .iter()
            .flat_map(|t| t.hours.iter().copied())
            .collect();

        let (hours, price) = match kind {
            TierKind::Peak => (
                PEAK_PRESET_HOURS
                    .into_iter()
                    .filter(|h| !claimed.contains(h))
                    .collect(),
                (self.default_price * PEAK_MULTIPLIER).round(),
            ),
            TierKind::OffPeak => (
                OFF_PEAK_PRESET_HOURS
                    .into_iter()
                    .filter(|h| !claimed.contains(h))
                    .collect(),
                (self.default_price * OFF_PEAK_MULTIPLIER).round(),
            ),
            TierKind::Custom => (Vec::new(), self.default_price),
        };

        let mut next = self.clone();
        next.tiers.push(HourlyPriceTier {
            id: Uuid::new_v4(),
            label: kind.default_label().to_string(),
            hours,
            price,
            kind,
        });
        next
    }

    /// Deletes a tier. Its hours become unclaimed; nothing is redistributed
    /// to the remaining tiers. Unknown ids are a no-op.
    pub fn remove_tier(&self, tier_id: Uuid) -> HourlyPricingConfig {
        let mut next = self.clone();
        next.tiers.retain(|t| t.id != tier_id);
        next
    }

    /// The tier currently claiming `hour`, if any.
    pub fn tier_claiming(&self, hour: u8) -> Option<&HourlyPriceTier> {
        self.tiers.iter().find(|t| t.hours.contains(&hour))
    }

    /// Billing price for one hour of the day.
    pub fn price_for_hour(&self, hour: u8) -> f64 {
        if !self.enabled {
            return self.default_price;
        }
        self.tier_claiming(hour)
            .map(|t| t.price)
            .unwrap_or(self.default_price)
    }
}

/// Compact label for a tier's hour set: maximal consecutive runs, at most
/// two rendered ("9:00" for a single hour, "9:00-12:00" for a run), with
/// "+N more" when further runs exist.
pub fn format_hour_range(hours: &[u8]) -> String {
    if hours.is_empty() {
        return String::from("No hours");
    }

    let mut sorted = hours.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut runs: Vec<(u8, u8)> = Vec::new();
    for hour in sorted {
        match runs.last_mut() {
            Some((_, end)) if *end + 1 == hour => *end = hour,
            _ => runs.push((hour, hour)),
        }
    }

    let labels: Vec<String> = runs
        .iter()
        .take(2)
        .map(|(start, end)| {
            if start == end {
                format!("{}:00", start)
            } else {
                format!("{}:00-{}:00", start, end + 1)
            }
        })
        .collect();

    if runs.len() > 2 {
        format!("{} +{} more", labels.join(", "), runs.len() - 2)
    } else {
        labels.join(", ")
    }
}
