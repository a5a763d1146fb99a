//! Food photo nutrition panel

use super::work::{Analysis, AnalysisSlot, PanelScope, PendingAnalysis};
use std::time::Duration;

/// Time the simulated analysis takes
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(2_500);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Macronutrient {
    pub amount: f64,
    pub unit: &'static str,
    /// Share of total calories
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Micronutrient {
    pub name: &'static str,
    pub amount: f64,
    pub unit: &'static str,
    /// Percent of the daily value
    pub daily_value: u8,
}

/// Colour band of the health score badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthRating {
    Good,
    Fair,
    Poor,
}

impl HealthRating {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            HealthRating::Good
        } else if score >= 60 {
            HealthRating::Fair
        } else {
            HealthRating::Poor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionReport {
    pub food_name: &'static str,
    /// Recognition confidence, percent
    pub confidence: u8,
    pub portion_size: &'static str,
    pub total_calories: u32,
    pub protein: Macronutrient,
    pub carbs: Macronutrient,
    pub fat: Macronutrient,
    pub micronutrients: &'static [Micronutrient],
    pub health_score: u8,
    pub benefits: &'static [&'static str],
    pub concerns: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

impl NutritionReport {
    pub fn rating(&self) -> HealthRating {
        HealthRating::from_score(self.health_score)
    }
}

pub const SAMPLE_MEAL: NutritionReport = NutritionReport {
    food_name: "Grilled Chicken Salad",
    confidence: 92,
    portion_size: "1 large bowl (300g)",
    total_calories: 285,
    protein: Macronutrient {
        amount: 28.0,
        unit: "g",
        percentage: 39,
    },
    carbs: Macronutrient {
        amount: 12.0,
        unit: "g",
        percentage: 17,
    },
    fat: Macronutrient {
        amount: 14.0,
        unit: "g",
        percentage: 44,
    },
    micronutrients: &[
        Micronutrient { name: "Vitamin A", amount: 1250.0, unit: "IU", daily_value: 25 },
        Micronutrient { name: "Vitamin C", amount: 35.0, unit: "mg", daily_value: 39 },
        Micronutrient { name: "Iron", amount: 2.1, unit: "mg", daily_value: 12 },
        Micronutrient { name: "Calcium", amount: 85.0, unit: "mg", daily_value: 9 },
        Micronutrient { name: "Fiber", amount: 4.2, unit: "g", daily_value: 17 },
    ],
    health_score: 85,
    benefits: &["High protein", "Low carb", "Rich in vitamins", "Heart healthy"],
    concerns: &["Moderate sodium", "Check dressing calories"],
    recommendations: &[
        "Great choice for muscle building and weight management",
        "Add more colorful vegetables for extra antioxidants",
        "Use olive oil-based dressing for healthy fats",
    ],
};

#[derive(Debug)]
pub struct NutritionTrackerPanel {
    scope: PanelScope,
    /// Data URL or file name of the uploaded photo
    image: Option<String>,
    report: AnalysisSlot<NutritionReport>,
}

impl NutritionTrackerPanel {
    pub fn new(scope: PanelScope) -> Self {
        Self {
            scope,
            image: None,
            report: AnalysisSlot::new(),
        }
    }

    /// Show the photo and start analysing it
    pub fn upload_image(&mut self, image: impl Into<String>) -> PendingAnalysis<NutritionReport> {
        self.image = Some(image.into());
        self.report
            .begin(self.scope.clone(), ANALYSIS_DELAY, SAMPLE_MEAL)
    }

    /// Forget the photo and its result
    pub fn clear(&mut self) {
        self.image = None;
        self.report.reset();
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn analysis(&self) -> Analysis<NutritionReport> {
        self.report.get()
    }

    pub fn is_loading(&self) -> bool {
        self.report.is_loading()
    }

    pub fn report(&self) -> Option<NutritionReport> {
        self.report.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::work::{Immediate, ScopeGuard};

    #[tokio::test]
    async fn test_photo_resolves_to_sample_meal() {
        let guard = ScopeGuard::new();
        let mut panel = NutritionTrackerPanel::new(guard.scope());

        let pending = panel.upload_image("lunch.jpg");
        assert_eq!(pending.delay(), Duration::from_millis(2500));
        assert!(panel.is_loading());
        assert_eq!(panel.image(), Some("lunch.jpg"));

        pending.run(&Immediate).await;
        let report = panel.report().unwrap();
        assert_eq!(report.food_name, "Grilled Chicken Salad");
        assert_eq!(report.rating(), HealthRating::Good);
        assert_eq!(
            report.protein.percentage + report.carbs.percentage + report.fat.percentage,
            100
        );
    }

    #[tokio::test]
    async fn test_clear_resets_panel() {
        let guard = ScopeGuard::new();
        let mut panel = NutritionTrackerPanel::new(guard.scope());
        panel.upload_image("a.png").run(&Immediate).await;

        panel.clear();
        assert_eq!(panel.image(), None);
        assert_eq!(panel.analysis(), Analysis::Idle);
    }

    #[tokio::test]
    async fn test_clear_discards_pending_analysis() {
        let guard = ScopeGuard::new();
        let mut panel = NutritionTrackerPanel::new(guard.scope());

        let pending = panel.upload_image("lunch.jpg");
        panel.clear();

        assert!(!pending.run(&Immediate).await);
        assert_eq!(panel.image(), None);
        assert!(panel.report().is_none());
        assert_eq!(panel.analysis(), Analysis::Idle);
    }

    #[tokio::test]
    async fn test_reupload_waits_for_latest_photo() {
        let guard = ScopeGuard::new();
        let mut panel = NutritionTrackerPanel::new(guard.scope());

        let first = panel.upload_image("breakfast.jpg");
        let second = panel.upload_image("dinner.jpg");

        first.run(&Immediate).await;
        assert!(panel.is_loading());
        assert_eq!(panel.image(), Some("dinner.jpg"));

        second.run(&Immediate).await;
        assert!(panel.report().is_some());
    }

    #[test]
    fn test_rating_bands() {
        assert_eq!(HealthRating::from_score(100), HealthRating::Good);
        assert_eq!(HealthRating::from_score(80), HealthRating::Good);
        assert_eq!(HealthRating::from_score(79), HealthRating::Fair);
        assert_eq!(HealthRating::from_score(60), HealthRating::Fair);
        assert_eq!(HealthRating::from_score(59), HealthRating::Poor);
    }
}
