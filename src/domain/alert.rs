use serde::{Deserialize, Serialize};

/// One row from the backend's fraud log. The relay never repairs backend
/// data, so every field is optional and display coercions happen here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub transaction_id: Option<String>,
    pub risk_score: Option<f64>,
    pub ai_reason: Option<String>,
    pub suggested_action: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestedAction {
    Block,
    Review,
    Allow,
}

impl SuggestedAction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "BLOCK" => Some(SuggestedAction::Block),
            "REVIEW" => Some(SuggestedAction::Review),
            "ALLOW" => Some(SuggestedAction::Allow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestedAction::Block => "BLOCK",
            SuggestedAction::Review => "REVIEW",
            SuggestedAction::Allow => "ALLOW",
        }
    }
}

/// Visual treatment for a triage row. Anything the backend sends outside
/// the three known actions classifies as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    Danger,
    Warning,
    Safe,
    Neutral,
}

pub const MISSING_FIELD: &str = "—";

impl Alert {
    pub fn action(&self) -> Option<SuggestedAction> {
        self.suggested_action.as_deref().and_then(SuggestedAction::parse)
    }

    pub fn classification(&self) -> RowClass {
        match self.action() {
            Some(SuggestedAction::Block) => RowClass::Danger,
            Some(SuggestedAction::Review) => RowClass::Warning,
            Some(SuggestedAction::Allow) => RowClass::Safe,
            None => RowClass::Neutral,
        }
    }

    pub fn display_transaction_id(&self) -> &str {
        self.transaction_id.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn display_risk_score(&self) -> String {
        format!("{:.2}", self.risk_score.unwrap_or(0.0))
    }

    pub fn display_reason(&self) -> &str {
        self.ai_reason.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn display_action(&self) -> &str {
        self.suggested_action.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn display_created_at(&self) -> String {
        let Some(raw) = self.created_at.as_deref() else {
            return MISSING_FIELD.to_string();
        };
        if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
            return parsed.format("%Y-%m-%d %H:%M:%S").to_string();
        }
        if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return parsed.format("%Y-%m-%d %H:%M:%S").to_string();
        }
        raw.to_string()
    }
}
