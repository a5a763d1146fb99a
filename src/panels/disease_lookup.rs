//! Disease and disorder lookup panel
//!
//! Two tabs of reference conditions, filtered by a case-insensitive substring
//! match on name or category.

use std::fmt;
use std::str::FromStr;

/// How a condition typically progresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Acute,
    Chronic,
    Variable,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Acute => "Acute",
            Severity::Chronic => "Chronic",
            Severity::Variable => "Variable",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "acute" => Ok(Severity::Acute),
            "chronic" => Ok(Severity::Chronic),
            "variable" => Ok(Severity::Variable),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

/// Which list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConditionKind {
    #[default]
    Disease,
    Disorder,
}

impl ConditionKind {
    pub fn label(self) -> &'static str {
        match self {
            ConditionKind::Disease => "Diseases",
            ConditionKind::Disorder => "Disorders",
        }
    }

    pub fn conditions(self) -> &'static [Condition] {
        match self {
            ConditionKind::Disease => DISEASES,
            ConditionKind::Disorder => DISORDERS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub name: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub symptoms: &'static [&'static str],
    pub causes: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub treatment: &'static [&'static str],
    pub dietary: &'static [&'static str],
}

impl Condition {
    /// Icon for the detail header: brain for mental health, heart for
    /// cardiovascular, a pulse line for everything else
    pub fn icon(&self) -> &'static str {
        match self.category {
            "Mental Health" | "Mood Disorder" => "brain",
            "Cardiovascular" => "heart",
            _ => "activity",
        }
    }

    /// Whether the name or category contains `needle` (already lowercased)
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}

pub const DISEASES: &[Condition] = &[
    Condition {
        name: "Diabetes Type 2",
        category: "Metabolic",
        severity: Severity::Chronic,
        description: "A condition where blood sugar levels are consistently high due to insulin resistance.",
        symptoms: &["Frequent urination", "Excessive thirst", "Fatigue", "Blurred vision", "Slow healing wounds"],
        causes: &["Genetics", "Obesity", "Sedentary lifestyle", "Poor diet", "Age"],
        prevention: &["Maintain healthy weight", "Regular exercise", "Balanced diet", "Limit processed foods"],
        treatment: &["Medication", "Diet modification", "Exercise", "Blood sugar monitoring"],
        dietary: &["Low glycemic foods", "High fiber", "Portion control", "Regular meal timing"],
    },
    Condition {
        name: "Hypertension",
        category: "Cardiovascular",
        severity: Severity::Chronic,
        description: "High blood pressure that puts extra strain on heart and blood vessels.",
        symptoms: &["Often no symptoms", "Headaches", "Shortness of breath", "Chest pain", "Dizziness"],
        causes: &["Genetics", "High sodium diet", "Stress", "Obesity", "Lack of exercise"],
        prevention: &["Low sodium diet", "Regular exercise", "Stress management", "Healthy weight"],
        treatment: &["Medication", "Lifestyle changes", "Regular monitoring", "Stress reduction"],
        dietary: &["DASH diet", "Low sodium", "High potassium", "Limit alcohol"],
    },
    Condition {
        name: "Dengue Fever",
        category: "Infectious",
        severity: Severity::Acute,
        description: "Viral infection transmitted by mosquitoes, common in tropical areas.",
        symptoms: &["High fever", "Severe headache", "Joint pain", "Nausea", "Skin rash"],
        causes: &["Aedes mosquito bite", "Viral infection", "Poor sanitation", "Standing water"],
        prevention: &["Mosquito control", "Clean environment", "Use repellents", "Remove standing water"],
        treatment: &["Rest", "Hydration", "Fever management", "Medical monitoring"],
        dietary: &["Increase fluids", "Papaya leaf juice", "Coconut water", "Light foods"],
    },
];

pub const DISORDERS: &[Condition] = &[
    Condition {
        name: "Anxiety Disorder",
        category: "Mental Health",
        severity: Severity::Variable,
        description: "Persistent worry and fear that interferes with daily activities.",
        symptoms: &["Excessive worry", "Restlessness", "Fatigue", "Difficulty concentrating", "Sleep problems"],
        causes: &["Genetics", "Brain chemistry", "Stress", "Trauma", "Medical conditions"],
        prevention: &["Stress management", "Regular exercise", "Healthy lifestyle", "Social support"],
        treatment: &["Therapy", "Medication", "Relaxation techniques", "Lifestyle changes"],
        dietary: &["Omega-3 rich foods", "Limit caffeine", "Magnesium foods", "Avoid alcohol"],
    },
    Condition {
        name: "Depression",
        category: "Mood Disorder",
        severity: Severity::Variable,
        description: "Persistent feelings of sadness and loss of interest in activities.",
        symptoms: &["Persistent sadness", "Loss of interest", "Fatigue", "Sleep changes", "Appetite changes"],
        causes: &["Brain chemistry", "Genetics", "Life events", "Medical conditions", "Medications"],
        prevention: &["Regular exercise", "Social connections", "Stress management", "Healthy diet"],
        treatment: &["Therapy", "Medication", "Lifestyle changes", "Support groups"],
        dietary: &["Omega-3 foods", "Complex carbs", "Protein rich", "Limit processed foods"],
    },
];

/// Conditions whose name or category contains `query`, ignoring case.
/// An empty query matches everything.
pub fn filter_conditions(conditions: &'static [Condition], query: &str) -> Vec<&'static Condition> {
    let needle = query.to_lowercase();
    conditions.iter().filter(|c| c.matches(&needle)).collect()
}

/// Look a condition up by exact name across both lists
pub fn find_condition(name: &str) -> Option<&'static Condition> {
    DISEASES
        .iter()
        .chain(DISORDERS)
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}

#[derive(Debug, Clone, Default)]
pub struct DiseaseLookupPanel {
    query: String,
    tab: ConditionKind,
    selected: Option<&'static Condition>,
}

impl DiseaseLookupPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn tab(&self) -> ConditionKind {
        self.tab
    }

    /// Switch lists. The current selection stays until something else is picked.
    pub fn set_tab(&mut self, tab: ConditionKind) {
        self.tab = tab;
    }

    /// Visible entries of the current tab
    pub fn results(&self) -> Vec<&'static Condition> {
        filter_conditions(self.tab.conditions(), &self.query)
    }

    /// Select one of the visible entries by name
    pub fn select(&mut self, name: &str) -> Option<&'static Condition> {
        let found = self
            .results()
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))?;
        self.selected = Some(found);
        Some(found)
    }

    pub fn selected(&self) -> Option<&'static Condition> {
        self.selected
    }

    pub fn is_selected(&self, condition: &Condition) -> bool {
        self.selected.is_some_and(|c| c.name == condition.name)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_lists_whole_tab() {
        let panel = DiseaseLookupPanel::new();
        assert_eq!(panel.tab(), ConditionKind::Disease);
        assert_eq!(panel.results().len(), 3);
    }

    #[test]
    fn test_filter_matches_name_or_category() {
        let names = |q: &str| -> Vec<&str> {
            filter_conditions(DISEASES, q).iter().map(|c| c.name).collect()
        };
        assert_eq!(names("DIAB"), vec!["Diabetes Type 2"]);
        assert_eq!(names("cardio"), vec!["Hypertension"]);
        assert_eq!(names("e"), vec!["Diabetes Type 2", "Hypertension", "Dengue Fever"]);
        assert!(names("zzz").is_empty());
    }

    #[test]
    fn test_tab_switch_filters_other_list() {
        let mut panel = DiseaseLookupPanel::new();
        panel.set_query("mood");
        assert!(panel.results().is_empty());

        panel.set_tab(ConditionKind::Disorder);
        let results = panel.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Depression");
    }

    #[test]
    fn test_select_only_visible_entries() {
        let mut panel = DiseaseLookupPanel::new();
        panel.set_query("fever");
        assert!(panel.select("Hypertension").is_none());

        let dengue = panel.select("dengue fever").unwrap();
        assert_eq!(dengue.severity, Severity::Acute);
        assert!(panel.is_selected(dengue));

        // selection survives a tab change
        panel.set_tab(ConditionKind::Disorder);
        assert_eq!(panel.selected().map(|c| c.name), Some("Dengue Fever"));
    }

    #[test]
    fn test_severity_and_icons() {
        assert_eq!("CHRONIC".parse::<Severity>(), Ok(Severity::Chronic));
        assert!("mild".parse::<Severity>().is_err());

        assert_eq!(find_condition("Anxiety Disorder").unwrap().icon(), "brain");
        assert_eq!(find_condition("Hypertension").unwrap().icon(), "heart");
        assert_eq!(find_condition("Dengue Fever").unwrap().icon(), "activity");
    }
}
