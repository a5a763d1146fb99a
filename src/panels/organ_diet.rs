//! Organ-specific diet panel

/// Nutrition guidance for one organ or body system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Organ {
    pub name: &'static str,
    /// Icon name in the front end's icon set
    pub icon: &'static str,
    pub description: &'static str,
    pub good_foods: &'static [&'static str],
    pub avoid_foods: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub nutrients: &'static [&'static str],
}

/// One day of the sample weekly plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub day: u8,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

impl Organ {
    /// First two words of the description, as shown on the selector
    pub fn short_description(&self) -> String {
        let words: Vec<&str> = self.description.split(' ').take(2).collect();
        format!("{}...", words.join(" "))
    }

    /// Seven-day sample plan built from the top three recommended foods
    pub fn weekly_plan(&self) -> Vec<DayPlan> {
        let food = |i: usize| self.good_foods.get(i).copied().unwrap_or_default();
        (1..=7)
            .map(|day| DayPlan {
                day,
                breakfast: format!("{} smoothie bowl", food(0)),
                lunch: format!("{} salad", food(1)),
                dinner: format!("{} with quinoa", food(2)),
            })
            .collect()
    }
}

pub const ORGANS: &[Organ] = &[
    Organ {
        name: "Heart",
        icon: "heart",
        description: "Cardiovascular health and circulation",
        good_foods: &["Salmon", "Oats", "Berries", "Avocado", "Nuts", "Dark Chocolate"],
        avoid_foods: &["Processed Meat", "Trans Fats", "Excess Salt", "Sugary Drinks"],
        benefits: &["Lower cholesterol", "Reduce blood pressure", "Improve circulation"],
        nutrients: &["Omega-3", "Fiber", "Potassium", "Antioxidants"],
    },
    Organ {
        name: "Brain",
        icon: "brain",
        description: "Cognitive function and mental clarity",
        good_foods: &["Blueberries", "Fatty Fish", "Turmeric", "Broccoli", "Walnuts", "Green Tea"],
        avoid_foods: &["Refined Sugar", "Alcohol", "Processed Foods", "Artificial Sweeteners"],
        benefits: &["Improve memory", "Enhance focus", "Protect neurons"],
        nutrients: &["DHA", "Antioxidants", "Vitamin E", "Folate"],
    },
    Organ {
        name: "Liver",
        icon: "zap",
        description: "Detoxification and metabolism",
        good_foods: &["Leafy Greens", "Citrus Fruits", "Garlic", "Beets", "Carrots", "Green Tea"],
        avoid_foods: &["Alcohol", "Fried Foods", "Processed Foods", "Excess Medication"],
        benefits: &["Support detox", "Improve metabolism", "Reduce inflammation"],
        nutrients: &["Vitamin C", "Sulfur", "Beta-carotene", "Antioxidants"],
    },
    Organ {
        name: "Kidneys",
        icon: "shield",
        description: "Filtration and fluid balance",
        good_foods: &["Cranberries", "Red Bell Peppers", "Cabbage", "Cauliflower", "Fish", "Egg Whites"],
        avoid_foods: &["Excess Salt", "Dark Sodas", "Processed Meat", "High Potassium Foods"],
        benefits: &["Support filtration", "Reduce stone risk", "Maintain fluid balance"],
        nutrients: &["Low sodium", "Moderate protein", "Antioxidants", "Low phosphorus"],
    },
    Organ {
        name: "Eyes",
        icon: "eye",
        description: "Vision and eye health",
        good_foods: &["Carrots", "Spinach", "Sweet Potato", "Fish", "Eggs", "Citrus Fruits"],
        avoid_foods: &["Sugary Foods", "Processed Snacks", "Excessive Screen Time", "Smoking"],
        benefits: &["Protect vision", "Reduce eye strain", "Prevent degeneration"],
        nutrients: &["Vitamin A", "Lutein", "Zeaxanthin", "Omega-3"],
    },
    Organ {
        name: "Bones",
        icon: "bone",
        description: "Bone density and joint health",
        good_foods: &["Dairy Products", "Leafy Greens", "Sardines", "Almonds", "Sesame Seeds", "Fortified Foods"],
        avoid_foods: &["Excess Caffeine", "Alcohol", "High Sodium", "Carbonated Drinks"],
        benefits: &["Strengthen bones", "Improve density", "Support joints"],
        nutrients: &["Calcium", "Vitamin D", "Magnesium", "Vitamin K"],
    },
];

/// Always has an organ selected, starting with the first
#[derive(Debug, Clone, Default)]
pub struct OrganDietPanel {
    selected: usize,
}

impl OrganDietPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn organs(&self) -> &'static [Organ] {
        ORGANS
    }

    pub fn selected(&self) -> &'static Organ {
        &ORGANS[self.selected]
    }

    /// Select by name, ignoring case. Unknown names change nothing.
    pub fn select(&mut self, name: &str) -> Option<&'static Organ> {
        let index = ORGANS
            .iter()
            .position(|o| o.name.eq_ignore_ascii_case(name.trim()))?;
        self.selected = index;
        Some(&ORGANS[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heart_selected_by_default() {
        let panel = OrganDietPanel::new();
        assert_eq!(panel.selected().name, "Heart");
    }

    #[test]
    fn test_select_and_unknown() {
        let mut panel = OrganDietPanel::new();
        assert_eq!(panel.select("LIVER").map(|o| o.icon), Some("zap"));
        assert!(panel.select("spleen").is_none());
        assert_eq!(panel.selected().name, "Liver");
    }

    #[test]
    fn test_short_description() {
        assert_eq!(ORGANS[0].short_description(), "Cardiovascular health...");
    }

    #[test]
    fn test_weekly_plan_uses_top_foods() {
        let plan = ORGANS[1].weekly_plan();
        assert_eq!(plan.len(), 7);
        assert_eq!(plan[0].day, 1);
        assert_eq!(plan[6].day, 7);
        assert_eq!(plan[3].breakfast, "Blueberries smoothie bowl");
        assert_eq!(plan[3].lunch, "Fatty Fish salad");
        assert_eq!(plan[3].dinner, "Turmeric with quinoa");
    }
}
