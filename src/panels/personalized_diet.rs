//! Personalized diet plan panel
//!
//! A health profile form and a simulated plan generator.

use super::work::{Analysis, AnalysisSlot, PanelScope, PendingAnalysis};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Time the simulated plan generation takes
pub const PLAN_DELAY: Duration = Duration::from_millis(2_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn value(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.value().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown gender: {}", s))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Very,
    Extra,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Very,
        ActivityLevel::Extra,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Very => "very",
            ActivityLevel::Extra => "extra",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (desk job)",
            ActivityLevel::Light => "Lightly active",
            ActivityLevel::Moderate => "Moderately active",
            ActivityLevel::Very => "Very active",
            ActivityLevel::Extra => "Extremely active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityLevel::ALL
            .into_iter()
            .find(|a| a.value().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown activity level: {}", s))
    }
}

/// Free-form health profile. Numeric fields stay text, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthProfileForm {
    pub age: String,
    pub gender: Option<Gender>,
    pub weight: String,
    pub height: String,
    pub activity_level: Option<ActivityLevel>,
    pub health_conditions: String,
    pub dietary_restrictions: String,
    pub goals: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meal {
    pub time: &'static str,
    pub food: &'static str,
    pub calories: u32,
    pub benefits: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DietPlan {
    pub title: &'static str,
    pub duration: &'static str,
    pub calories: &'static str,
    pub meals: &'static [Meal],
}

impl DietPlan {
    pub fn total_calories(&self) -> u32 {
        self.meals.iter().map(|m| m.calories).sum()
    }
}

pub const SAMPLE_PLAN: DietPlan = DietPlan {
    title: "Heart-Healthy Mediterranean Plan",
    duration: "4 weeks",
    calories: "1,800-2,000 per day",
    meals: &[
        Meal {
            time: "Breakfast",
            food: "Oatmeal with berries and almonds",
            calories: 350,
            benefits: &["High fiber", "Antioxidants", "Heart healthy"],
        },
        Meal {
            time: "Lunch",
            food: "Grilled salmon with quinoa and vegetables",
            calories: 450,
            benefits: &["Omega-3", "Complete protein", "Anti-inflammatory"],
        },
        Meal {
            time: "Snack",
            food: "Greek yogurt with walnuts",
            calories: 200,
            benefits: &["Probiotics", "Healthy fats", "Protein"],
        },
        Meal {
            time: "Dinner",
            food: "Lentil curry with brown rice",
            calories: 400,
            benefits: &["Plant protein", "Fiber", "Iron"],
        },
    ],
};

#[derive(Debug)]
pub struct PersonalizedDietPanel {
    scope: PanelScope,
    form: HealthProfileForm,
    plan: AnalysisSlot<DietPlan>,
}

impl PersonalizedDietPanel {
    pub fn new(scope: PanelScope) -> Self {
        Self {
            scope,
            form: HealthProfileForm::default(),
            plan: AnalysisSlot::new(),
        }
    }

    pub fn form(&self) -> &HealthProfileForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut HealthProfileForm {
        &mut self.form
    }

    /// Start generating a plan. `None` while a generation is already running.
    pub fn generate(&self) -> Option<PendingAnalysis<DietPlan>> {
        if self.plan.is_loading() {
            return None;
        }
        Some(self.plan.begin(self.scope.clone(), PLAN_DELAY, SAMPLE_PLAN))
    }

    pub fn is_generating(&self) -> bool {
        self.plan.is_loading()
    }

    pub fn analysis(&self) -> Analysis<DietPlan> {
        self.plan.get()
    }

    pub fn plan(&self) -> Option<DietPlan> {
        self.plan.result()
    }
}
