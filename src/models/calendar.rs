use serde::{Deserialize, Serialize};

use crate::models::stage::Stage;

/// Wire root of a data file: everything hangs off `calendario`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDocument {
    pub calendario: Calendar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    #[serde(default)]
    pub titulo: Option<String>,
    pub etapas: Vec<Stage>,
}

impl Calendar {
    /// Stages shown in the timeline list: stage 0 stays hidden, the rest
    /// sorted ascending by flow order. Display numbers are 1-based
    /// positions in this list, not the raw order values.
    pub fn listed_stages(&self) -> Vec<&Stage> {
        let mut listed: Vec<&Stage> = self.etapas.iter().filter(|s| s.order != 0).collect();
        listed.sort_by_key(|s| s.order);
        listed
    }

    /// The pre-announcement entry, if the calendar has one.
    pub fn stage_zero(&self) -> Option<&Stage> {
        self.etapas.iter().find(|s| s.order == 0)
    }
}
