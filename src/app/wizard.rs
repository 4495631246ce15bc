//! Step navigation
//!
//! Transitions are pure: they take the current [`WizardState`] and return the
//! next one together with the view updates the UI has to apply. Nothing here
//! touches the terminal or the network.

use super::state::{FormValues, Step, StepIndicator, WizardState, STEPS};
use super::validation::{validate, ValidationError};

/// A change the UI must make after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    Hide(Step),
    Show(Step),
    Progress(StepIndicator),
    /// Rebuild the summary from the current form values
    RenderSummary,
}

/// Result of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: WizardState,
    pub updates: Vec<ViewUpdate>,
}

impl Transition {
    fn unchanged(state: &WizardState) -> Self {
        Self {
            state: state.clone(),
            updates: Vec::new(),
        }
    }
}

/// Indicator for the given step index
pub fn indicator(index: usize) -> StepIndicator {
    StepIndicator {
        position: index + 1,
        total: STEPS.len(),
    }
}

/// Move forward one step if the current step validates
pub fn advance(state: &WizardState, form: &FormValues) -> Result<Transition, ValidationError> {
    validate(state.step(), state, form)?;
    Ok(force_advance(state))
}

/// Move forward one step without validating, capped at the last step
pub fn force_advance(state: &WizardState) -> Transition {
    let last = STEPS.len() - 1;
    if state.current >= last {
        return Transition::unchanged(state);
    }
    move_to(state, state.current + 1)
}

/// Move back one step without validating, floored at the first step
pub fn retreat(state: &WizardState) -> Transition {
    if state.current == 0 {
        return Transition::unchanged(state);
    }
    move_to(state, state.current - 1)
}

/// Select a disk by device identifier, replacing any previous selection
pub fn select_disk(state: &WizardState, device: &str) -> WizardState {
    WizardState {
        selected_disk: Some(device.to_string()),
        ..state.clone()
    }
}

/// Forget the selected disk (the list it came from is gone)
pub fn clear_disk(state: &WizardState) -> WizardState {
    WizardState {
        selected_disk: None,
        ..state.clone()
    }
}

fn move_to(state: &WizardState, index: usize) -> Transition {
    let from = state.step();
    let to = STEPS[index];

    let mut updates = vec![
        ViewUpdate::Hide(from),
        ViewUpdate::Show(to),
        ViewUpdate::Progress(indicator(index)),
    ];
    if to == Step::Summary {
        updates.push(ViewUpdate::RenderSummary);
    }

    Transition {
        state: WizardState {
            current: index,
            ..state.clone()
        },
        updates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(step: Step) -> WizardState {
        WizardState {
            current: STEPS.iter().position(|s| *s == step).unwrap(),
            selected_disk: None,
        }
    }

    fn filled_form() -> FormValues {
        FormValues {
            language: "en_US.UTF-8".to_string(),
            timezone: "UTC".to_string(),
            fullname: "Alice Example".to_string(),
            username: "alice".to_string(),
            password: "secret1".to_string(),
            password_confirm: "secret1".to_string(),
        }
    }

    #[test]
    fn test_advance_from_welcome() {
        let t = advance(&WizardState::new(), &FormValues::default()).unwrap();
        assert_eq!(t.state.step(), Step::Locale);
        assert_eq!(
            t.updates,
            vec![
                ViewUpdate::Hide(Step::Welcome),
                ViewUpdate::Show(Step::Locale),
                ViewUpdate::Progress(StepIndicator { position: 2, total: 7 }),
            ]
        );
    }

    #[test]
    fn test_advance_blocked_by_validation() {
        let state = at(Step::Disk);
        let err = advance(&state, &filled_form()).unwrap_err();
        assert_eq!(err, ValidationError::NoDiskSelected);

        let state = at(Step::User);
        let mut form = filled_form();
        form.password_confirm = "other".to_string();
        assert_eq!(advance(&state, &form), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_entering_summary_renders_it() {
        let t = advance(&at(Step::User), &filled_form()).unwrap();
        assert_eq!(t.state.step(), Step::Summary);
        assert_eq!(t.updates.last(), Some(&ViewUpdate::RenderSummary));
    }

    #[test]
    fn test_retreat_floored_at_first_step() {
        let t = retreat(&WizardState::new());
        assert_eq!(t.state.current, 0);
        assert!(t.updates.is_empty());

        let t = retreat(&at(Step::Disk));
        assert_eq!(t.state.step(), Step::Locale);
        assert_eq!(t.updates[0], ViewUpdate::Hide(Step::Disk));
    }

    #[test]
    fn test_retreat_skips_validation() {
        // The user step is invalid with an empty form, but going back is allowed
        let t = retreat(&at(Step::User));
        assert_eq!(t.state.step(), Step::Disk);
    }

    #[test]
    fn test_forward_capped_at_last_step() {
        let state = at(Step::Complete);
        let t = force_advance(&state);
        assert_eq!(t.state, state);
        assert!(t.updates.is_empty());
        assert_eq!(advance(&state, &filled_form()).unwrap().state, state);
    }

    #[test]
    fn test_force_advance_into_complete() {
        let t = force_advance(&at(Step::Install));
        assert_eq!(t.state.step(), Step::Complete);
        assert!(t.updates.contains(&ViewUpdate::Progress(StepIndicator { position: 7, total: 7 })));
    }

    #[test]
    fn test_select_disk_replaces_previous() {
        let state = select_disk(&at(Step::Disk), "/dev/sda");
        let state = select_disk(&state, "/dev/nvme0n1");
        assert_eq!(state.selected_disk.as_deref(), Some("/dev/nvme0n1"));
        assert_eq!(state.step(), Step::Disk);
        assert_eq!(clear_disk(&state).selected_disk, None);
    }

    #[test]
    fn test_selected_disk_survives_navigation() {
        let state = select_disk(&at(Step::Disk), "/dev/sda");
        let t = advance(&state, &filled_form()).unwrap();
        assert_eq!(t.state.step(), Step::User);
        assert_eq!(t.state.selected_disk.as_deref(), Some("/dev/sda"));
    }
}
