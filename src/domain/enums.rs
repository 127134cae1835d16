use serde::{Deserialize, Serialize};

/// Outcome recorded for a day, week or month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Success,
    Failure,
}

impl Status {
    /// Stored tag for this status
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    /// Label shown on the editor buttons
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Success => "Achieved",
            Self::Failure => "Missed",
        }
    }

    /// Next status in editor order: success -> failure -> pending -> success
    pub fn next(&self) -> Self {
        match self {
            Self::Success => Self::Failure,
            Self::Failure => Self::Pending,
            Self::Pending => Self::Success,
        }
    }

    pub fn all() -> &'static [Status] {
        &[Status::Success, Status::Failure, Status::Pending]
    }
}

/// Qualitative severity of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Success,
    Warning,
    Danger,
    /// Nothing observed yet
    Neutral,
}

impl Band {
    /// Classify `numerator / denominator`: >= 0.7 success, >= 0.4 warning,
    /// otherwise danger. A zero denominator is neutral.
    pub fn from_ratio(numerator: usize, denominator: usize) -> Self {
        if denominator == 0 {
            return Band::Neutral;
        }
        let ratio = numerator as f64 / denominator as f64;
        if ratio >= 0.7 {
            Band::Success
        } else if ratio >= 0.4 {
            Band::Warning
        } else {
            Band::Danger
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    EditingEntry,
    EditingGoal,
    EditingNotes,
    ImportPrompt,
    Notice, // Blocking notice, any key dismisses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tags_and_labels() {
        assert_eq!(Status::Success.to_tag(), "success");
        assert_eq!(Status::Failure.label(), "Missed");
        assert_eq!(Status::default(), Status::Pending);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&Status::Success).unwrap();
        assert_eq!(json, "\"success\"");
        let parsed: Status = serde_json::from_str("\"failure\"").unwrap();
        assert_eq!(parsed, Status::Failure);
    }

    #[test]
    fn test_status_cycle() {
        assert_eq!(Status::Success.next(), Status::Failure);
        assert_eq!(Status::Failure.next(), Status::Pending);
        assert_eq!(Status::Pending.next(), Status::Success);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(Band::from_ratio(7, 10), Band::Success);
        assert_eq!(Band::from_ratio(69, 100), Band::Warning);
        assert_eq!(Band::from_ratio(4, 10), Band::Warning);
        assert_eq!(Band::from_ratio(39, 100), Band::Danger);
        assert_eq!(Band::from_ratio(0, 5), Band::Danger);
        assert_eq!(Band::from_ratio(0, 0), Band::Neutral);
    }
}
