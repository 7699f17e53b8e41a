//! Step indicator, hint notes and the group-name gate shared by save and print.

use crate::error::{Error, Result};
use crate::store::SlotStore;

pub const STEPS: [&str; 3] = ["Bygg framsidan", "Spara", "Skriv ut"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
}

impl StepStatus {
    pub fn class(self) -> &'static str {
        match self {
            StepStatus::Pending => "",
            StepStatus::Active => "active",
            StepStatus::Completed => "completed",
        }
    }
}

/// Status of 1-based `step` when `active` is the current step.
pub fn step_status(step: usize, active: usize) -> StepStatus {
    match step.cmp(&active) {
        std::cmp::Ordering::Less => StepStatus::Completed,
        std::cmp::Ordering::Equal => StepStatus::Active,
        std::cmp::Ordering::Greater => StepStatus::Pending,
    }
}

/// Sticky note pointing at one or more slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HintNote {
    pub text: &'static str,
    pub targets: &'static [&'static str],
}

pub const HINT_NOTES: [HintNote; 4] = [
    HintNote {
        text: "Välj tre toppnotiser",
        targets: &["puff1", "puff2", "puff3"],
    },
    HintNote {
        text: "Vilken nyhet ska stå överst?",
        targets: &["texttopp"],
    },
    HintNote {
        text: "Dagens viktigaste nyhet",
        targets: &["huvudnyhet"],
    },
    HintNote {
        text: "Fyll på med artiklar, citat och notiser",
        targets: &["mellan1", "citat", "liten1", "liten2"],
    },
];

impl HintNote {
    /// Visible until every target slot is filled.
    pub fn is_visible(&self, store: &SlotStore) -> bool {
        !self.targets.iter().all(|slot| store.is_filled(slot))
    }
}

/// Trimmed group name, or an error when there is none.
pub fn require_group_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        Err(Error::MissingGroupName)
    } else {
        Ok(name)
    }
}

pub fn footer_line(group_name: &str) -> String {
    format!("Gjord av {group_name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Article, Catalog};

    #[test]
    fn steps_before_active_are_completed() {
        assert_eq!(step_status(1, 2), StepStatus::Completed);
        assert_eq!(step_status(2, 2), StepStatus::Active);
        assert_eq!(step_status(3, 2), StepStatus::Pending);
    }

    #[test]
    fn hint_hides_once_targets_filled() {
        let catalog = Catalog::new(vec![Article::new("a", "A")], vec![]);
        let mut store = SlotStore::new();
        let note = HINT_NOTES[1];
        assert!(note.is_visible(&store));
        store.assign(&catalog, "texttopp", "a").unwrap();
        assert!(!note.is_visible(&store));
    }

    #[test]
    fn group_name_is_trimmed() {
        assert_eq!(require_group_name("  7B ").unwrap(), "7B");
        assert!(matches!(require_group_name("   "), Err(Error::MissingGroupName)));
    }
}
