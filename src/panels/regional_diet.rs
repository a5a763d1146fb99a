//! Regional diet panel
//!
//! Traditional cuisines from six Indian states. Selecting a region shows its
//! specialties and benefits; a resolved device location can preselect the
//! matching region.

use crate::location::LocationData;

/// A state cuisine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub name: &'static str,
    pub cuisine: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub specialties: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

impl Region {
    /// The first two specialties plus how many more there are
    pub fn specialty_preview(&self) -> (&'static [&'static str], usize) {
        let shown = self.specialties.len().min(2);
        (&self.specialties[..shown], self.specialties.len() - shown)
    }
}

/// Card rating shown on every region
pub const REGION_RATING: &str = "4.8";
/// Card usage badge shown on every region
pub const REGION_USERS: &str = "2.5k+ users";

pub const REGIONS: &[Region] = &[
    Region {
        name: "Maharashtra",
        cuisine: "Maharashtrian",
        description: "Rich in nutrients and traditional spices",
        emoji: "🌾",
        specialties: &["Jowar Bhakri", "Varan Bhat", "Sabudana Khichdi", "Misal Pav"],
        benefits: &["High fiber", "Probiotic-rich", "Energy boosting"],
    },
    Region {
        name: "Kerala",
        cuisine: "South Indian",
        description: "Coconut-based dishes with anti-inflammatory spices",
        emoji: "🥥",
        specialties: &["Fish Curry", "Appam", "Sambar", "Avial"],
        benefits: &["Heart healthy", "Anti-inflammatory", "Rich in omega-3"],
    },
    Region {
        name: "Rajasthan",
        cuisine: "Rajasthani",
        description: "Desert cuisine with preservation techniques",
        emoji: "🏜️",
        specialties: &["Dal Baati Churma", "Gatte ki Sabzi", "Ker Sangri", "Bajra Roti"],
        benefits: &["High protein", "Long-lasting energy", "Digestive health"],
    },
    Region {
        name: "Gujarat",
        cuisine: "Gujarati",
        description: "Balanced vegetarian meals with fermented foods",
        emoji: "🌿",
        specialties: &["Dhokla", "Thepla", "Kadhi", "Undhiyu"],
        benefits: &["Probiotic-rich", "Low glycemic", "Complete nutrition"],
    },
    Region {
        name: "Punjab",
        cuisine: "Punjabi",
        description: "Nutrient-dense with seasonal ingredients",
        emoji: "🌽",
        specialties: &["Sarson da Saag", "Makki di Roti", "Lassi", "Rajma"],
        benefits: &["Iron-rich", "Calcium boost", "Immunity building"],
    },
    Region {
        name: "Tamil Nadu",
        cuisine: "Tamil",
        description: "Rice-based with fermented preparations",
        emoji: "🍚",
        specialties: &["Idli", "Dosa", "Rasam", "Curd Rice"],
        benefits: &["Easy digestion", "Probiotic", "Cooling effect"],
    },
];

/// Region whose name matches `name`, ignoring case and surrounding space
pub fn find_region(name: &str) -> Option<&'static Region> {
    let name = name.trim();
    REGIONS.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}

/// Region matching a resolved location's state (or region label)
pub fn region_for_location(location: &LocationData) -> Option<&'static Region> {
    [&location.state, &location.region]
        .into_iter()
        .filter_map(|name| name.as_deref())
        .find_map(find_region)
}

#[derive(Debug, Clone, Default)]
pub struct RegionalDietPanel {
    selected: Option<&'static Region>,
}

impl RegionalDietPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regions(&self) -> &'static [Region] {
        REGIONS
    }

    pub fn selected(&self) -> Option<&'static Region> {
        self.selected
    }

    pub fn is_selected(&self, region: &Region) -> bool {
        self.selected.is_some_and(|r| r.name == region.name)
    }

    /// Select by name. Unknown names leave the selection unchanged.
    pub fn select(&mut self, name: &str) -> Option<&'static Region> {
        let region = find_region(name)?;
        self.selected = Some(region);
        Some(region)
    }

    /// Preselect the cuisine of the user's state, if it is one we cover
    pub fn apply_location(&mut self, location: &LocationData) -> Option<&'static Region> {
        let region = region_for_location(location)?;
        tracing::debug!(region = region.name, "Preselected region from location");
        self.selected = Some(region);
        Some(region)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
