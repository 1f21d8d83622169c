use crate::domain::alert::{Alert, SuggestedAction};

/// Fetch lifecycle for the alerts view. Exactly one variant at a time, so
/// the console never shows an error and stale rows together.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Error(String),
    Ready(Vec<Alert>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriageFilter {
    All,
    Action(SuggestedAction),
}

impl TriageFilter {
    pub fn admits(&self, alert: &Alert) -> bool {
        match self {
            TriageFilter::All => true,
            TriageFilter::Action(action) => alert.action() == Some(*action),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriageCounts {
    pub block: usize,
    pub review: usize,
    pub allow: usize,
}

impl TriageCounts {
    pub fn tally(alerts: &[Alert]) -> Self {
        let mut counts = TriageCounts::default();
        for alert in alerts {
            match alert.action() {
                Some(SuggestedAction::Block) => counts.block += 1,
                Some(SuggestedAction::Review) => counts.review += 1,
                Some(SuggestedAction::Allow) => counts.allow += 1,
                None => {}
            }
        }
        counts
    }
}

#[derive(Debug, Clone)]
pub struct TriageView {
    pub state: FetchState,
    pub filter: TriageFilter,
}

impl TriageView {
    pub fn new(filter: TriageFilter) -> Self {
        Self {
            state: FetchState::Loading,
            filter,
        }
    }

    /// Replaces the whole state with the completed fetch; the most
    /// recently completed one always wins.
    pub fn apply_fetch(&mut self, outcome: Result<Vec<Alert>, String>) {
        self.state = match outcome {
            Ok(alerts) => FetchState::Ready(alerts),
            Err(reason) => FetchState::Error(reason),
        };
    }

    /// Counts are tallied over the full loaded set; the filter narrows
    /// displayed rows only.
    pub fn counts(&self) -> TriageCounts {
        match &self.state {
            FetchState::Ready(alerts) => TriageCounts::tally(alerts),
            _ => TriageCounts::default(),
        }
    }

    pub fn rows(&self) -> Vec<&Alert> {
        match &self.state {
            FetchState::Ready(alerts) => alerts.iter().filter(|a| self.filter.admits(a)).collect(),
            _ => Vec::new(),
        }
    }

    /// The currently loaded, unfiltered rows; what the CSV export covers.
    pub fn loaded(&self) -> &[Alert] {
        match &self.state {
            FetchState::Ready(alerts) => alerts,
            _ => &[],
        }
    }
}
