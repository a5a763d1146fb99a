//! Medical report scanner panel
//!
//! Uploading a report starts a simulated analysis that resolves to a fixed
//! blood test interpretation after three seconds.

use super::work::{Analysis, AnalysisSlot, PanelScope, PendingAnalysis};
use std::time::Duration;
use thiserror::Error;

/// Time the simulated analysis takes
pub const SCAN_DELAY: Duration = Duration::from_millis(3_000);

/// Largest accepted upload
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted file extensions, lowercase
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png"];

/// A file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub size_bytes: u64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Size in megabytes with one decimal, e.g. "2.4 MB"
    pub fn size_label(&self) -> String {
        format!("{:.1} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }

    fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Unsupported file type: {0}. Use PDF, JPG or PNG")]
    UnsupportedType(String),

    #[error("File is {size} bytes, the limit is 10MB")]
    TooLarge { size: u64 },
}

/// Result of one test parameter against its reference range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingStatus {
    Normal,
    High,
    Low,
}

impl FindingStatus {
    /// Out-of-range results are flagged for attention
    pub fn needs_attention(self) -> bool {
        !matches!(self, FindingStatus::Normal)
    }

    pub fn label(self) -> &'static str {
        match self {
            FindingStatus::Normal => "normal",
            FindingStatus::High => "high",
            FindingStatus::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub parameter: &'static str,
    pub value: &'static str,
    pub normal_range: &'static str,
    pub status: FindingStatus,
    pub interpretation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    pub report_type: &'static str,
    pub date: &'static str,
    pub overall_status: &'static str,
    pub findings: &'static [Finding],
    pub recommendations: &'static [&'static str],
}

impl ScanReport {
    pub fn attention_findings(&self) -> impl Iterator<Item = &'static Finding> {
        self.findings.iter().filter(|f| f.status.needs_attention())
    }
}

pub const SAMPLE_REPORT: ScanReport = ScanReport {
    report_type: "Blood Test Report",
    date: "2024-01-15",
    overall_status: "Normal",
    findings: &[
        Finding {
            parameter: "Hemoglobin",
            value: "14.2 g/dL",
            normal_range: "12.0-15.5 g/dL",
            status: FindingStatus::Normal,
            interpretation: "Your hemoglobin level is within the normal range, indicating good oxygen-carrying capacity.",
        },
        Finding {
            parameter: "Total Cholesterol",
            value: "220 mg/dL",
            normal_range: "< 200 mg/dL",
            status: FindingStatus::High,
            interpretation: "Your cholesterol is slightly elevated. Consider reducing saturated fats and increasing fiber intake.",
        },
        Finding {
            parameter: "Blood Sugar (Fasting)",
            value: "95 mg/dL",
            normal_range: "70-100 mg/dL",
            status: FindingStatus::Normal,
            interpretation: "Your fasting glucose is normal. Maintain balanced meals to keep it stable.",
        },
        Finding {
            parameter: "Vitamin D",
            value: "18 ng/mL",
            normal_range: "30-100 ng/mL",
            status: FindingStatus::Low,
            interpretation: "Your vitamin D is low. Increase sun exposure and consider vitamin D-rich foods.",
        },
    ],
    recommendations: &[
        "Include more leafy greens and nuts in your diet for better cholesterol management",
        "Add fatty fish twice a week for vitamin D and omega-3 fatty acids",
        "Maintain current balanced diet for blood sugar control",
        "Consider 15-20 minutes of morning sunlight exposure daily",
    ],
};

#[derive(Debug)]
pub struct DocumentScannerPanel {
    scope: PanelScope,
    file: Option<UploadedFile>,
    report: AnalysisSlot<ScanReport>,
}

impl DocumentScannerPanel {
    pub fn new(scope: PanelScope) -> Self {
        Self {
            scope,
            file: None,
            report: AnalysisSlot::new(),
        }
    }

    /// Accept a file and start analysing it
    pub fn upload(&mut self, file: UploadedFile) -> Result<PendingAnalysis<ScanReport>, UploadError> {
        match file.extension() {
            Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => {}
            other => return Err(UploadError::UnsupportedType(other.unwrap_or_default())),
        }
        if file.size_bytes > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                size: file.size_bytes,
            });
        }

        tracing::debug!(file = %file.name, size = file.size_bytes, "Scanning report");
        self.file = Some(file);
        Ok(self
            .report
            .begin(self.scope.clone(), SCAN_DELAY, SAMPLE_REPORT))
    }

    pub fn uploaded(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    pub fn analysis(&self) -> Analysis<ScanReport> {
        self.report.get()
    }

    pub fn is_loading(&self) -> bool {
        self.report.is_loading()
    }

    pub fn report(&self) -> Option<ScanReport> {
        self.report.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::work::{Immediate, ScopeGuard};

    #[tokio::test]
    async fn test_upload_resolves_to_sample_report() {
        let guard = ScopeGuard::new();
        let mut panel = DocumentScannerPanel::new(guard.scope());

        let pending = panel
            .upload(UploadedFile::new("bloodwork.PDF", 2_500_000))
            .unwrap();
        assert_eq!(pending.delay(), SCAN_DELAY);
        assert!(panel.is_loading());
        assert_eq!(panel.uploaded().unwrap().size_label(), "2.4 MB");

        assert!(pending.run(&Immediate).await);
        let report = panel.report().unwrap();
        assert_eq!(report.report_type, "Blood Test Report");
        assert_eq!(report.findings.len(), 4);
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn test_attention_classification() {
        let flagged: Vec<&str> = SAMPLE_REPORT
            .attention_findings()
            .map(|f| f.parameter)
            .collect();
        assert_eq!(flagged, vec!["Total Cholesterol", "Vitamin D"]);
        assert!(!FindingStatus::Normal.needs_attention());
    }

    #[test]
    fn test_rejects_bad_uploads() {
        let guard = ScopeGuard::new();
        let mut panel = DocumentScannerPanel::new(guard.scope());

        let err = panel.upload(UploadedFile::new("notes.docx", 10)).unwrap_err();
        assert_eq!(err, UploadError::UnsupportedType("docx".into()));

        let err = panel.upload(UploadedFile::new("README", 10)).unwrap_err();
        assert_eq!(err, UploadError::UnsupportedType(String::new()));

        let err = panel
            .upload(UploadedFile::new("scan.png", MAX_UPLOAD_BYTES + 1))
            .unwrap_err();
        assert!(matches!(err, UploadError::TooLarge { .. }));

        assert!(panel.uploaded().is_none());
        assert_eq!(panel.analysis(), Analysis::Idle);
    }

    #[tokio::test]
    async fn test_unmounted_panel_never_shows_result() {
        let guard = ScopeGuard::new();
        let mut panel = DocumentScannerPanel::new(guard.scope());
        let pending = panel.upload(UploadedFile::new("a.jpg", 1)).unwrap();

        drop(guard);
        assert!(!pending.run(&Immediate).await);
        assert_eq!(panel.report(), None);
    }

    #[tokio::test]
    async fn test_second_upload_supersedes_first_scan() {
        let guard = ScopeGuard::new();
        let mut panel = DocumentScannerPanel::new(guard.scope());

        let first = panel.upload(UploadedFile::new("old.pdf", 1)).unwrap();
        let second = panel.upload(UploadedFile::new("new.pdf", 1)).unwrap();

        assert!(!first.run(&Immediate).await);
        assert!(panel.is_loading());
        assert_eq!(panel.uploaded().unwrap().name, "new.pdf");

        assert!(second.run(&Immediate).await);
        assert!(panel.report().is_some());
    }
}
