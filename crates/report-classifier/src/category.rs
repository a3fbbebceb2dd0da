//! Report categories

use city_core::Priority;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category assigned to a civic report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportCategory {
    Pothole,
    Garbage,
    #[serde(rename = "Tree Fall")]
    TreeFall,
    Streetlight,
    #[serde(rename = "Water Leak")]
    WaterLeak,
}

impl ReportCategory {
    /// Every category, in reference distribution order
    pub const ALL: [ReportCategory; 5] = [
        ReportCategory::Pothole,
        ReportCategory::Garbage,
        ReportCategory::TreeFall,
        ReportCategory::Streetlight,
        ReportCategory::WaterLeak,
    ];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportCategory::Pothole => "Pothole",
            ReportCategory::Garbage => "Garbage",
            ReportCategory::TreeFall => "Tree Fall",
            ReportCategory::Streetlight => "Streetlight",
            ReportCategory::WaterLeak => "Water Leak",
        }
    }

    /// Dispatch priority for the category
    pub fn priority(&self) -> Priority {
        match self {
            ReportCategory::Pothole | ReportCategory::TreeFall | ReportCategory::WaterLeak => {
                Priority::High
            }
            ReportCategory::Streetlight => Priority::Medium,
            ReportCategory::Garbage => Priority::Low,
        }
    }

    /// Reference recommended action
    pub fn default_action(&self) -> &'static str {
        match self {
            ReportCategory::Pothole => {
                "Dispatch road maintenance crew. Estimated fix time: 2-4 hours."
            }
            ReportCategory::Garbage => {
                "Schedule waste collection pickup. Estimated response: 4-6 hours."
            }
            ReportCategory::TreeFall => {
                "Emergency tree removal required. Crew dispatched immediately."
            }
            ReportCategory::Streetlight => "Electrical team notified. Repair within 24 hours.",
            ReportCategory::WaterLeak => "Plumbing emergency team dispatched. ETA: 1-2 hours.",
        }
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
