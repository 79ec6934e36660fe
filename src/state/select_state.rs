// ============================================================================
// SELECT STATE - open/closed machine behind the Select primitive
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectState {
    #[default]
    Closed,
    Open,
}

/// What the Select should tell its parent after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    None,
    ValueChanged(String),
}

impl SelectState {
    pub fn is_open(&self) -> bool {
        matches!(self, SelectState::Open)
    }

    /// Trigger click or explicit toggle
    pub fn toggle(self) -> Self {
        match self {
            SelectState::Closed => SelectState::Open,
            SelectState::Open => SelectState::Closed,
        }
    }

    /// Click that landed outside both trigger and panel; never emits
    pub fn outside_click(self) -> Self {
        SelectState::Closed
    }

    /// Option chosen: emit then close
    pub fn select(self, value: &str) -> (Self, SelectOutcome) {
        match self {
            SelectState::Open => (SelectState::Closed, SelectOutcome::ValueChanged(value.to_string())),
            SelectState::Closed => (SelectState::Closed, SelectOutcome::None),
        }
    }
}

/// Option list entry: value plus its visible label
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Trigger text: label of the exactly matching option, else the placeholder
pub fn display_label<'a>(options: &'a [SelectOption], value: &str, placeholder: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.as_str())
        .unwrap_or(placeholder)
}

/// Trigger's bounding box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TriggerRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelPosition {
    pub top: f64,
    pub left: f64,
    pub min_width: f64,
}

/// Gap between trigger and panel, in px
pub const PANEL_OFFSET: f64 = 4.0;

/// The panel is `position: fixed` right below the trigger, at least as wide
pub fn panel_position(trigger: TriggerRect) -> PanelPosition {
    PanelPosition {
        top: trigger.bottom + PANEL_OFFSET,
        left: trigger.left,
        min_width: trigger.width,
    }
}

impl PanelPosition {
    pub fn style(&self) -> String {
        format!(
            "position: fixed; top: {}px; left: {}px; min-width: {}px; z-index: 50;",
            self.top, self.left, self.min_width
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("all", "All Types"),
            SelectOption::new("Lecture", "Lecture"),
            SelectOption::new("Lab", "Lab"),
            SelectOption::new("Practical", "Practical"),
        ]
    }

    #[test]
    fn starts_closed_and_toggles() {
        let state = SelectState::default();
        assert!(!state.is_open());
        assert_eq!(state.toggle(), SelectState::Open);
        assert_eq!(state.toggle().toggle(), SelectState::Closed);
    }

    #[test]
    fn outside_click_closes_without_emitting() {
        let state = SelectState::Open.outside_click();
        assert_eq!(state, SelectState::Closed);
    }

    #[test]
    fn selecting_emits_then_closes() {
        let (state, outcome) = SelectState::Open.select("Lab");
        assert_eq!(state, SelectState::Closed);
        assert_eq!(outcome, SelectOutcome::ValueChanged("Lab".to_string()));

        let (_, outcome) = SelectState::Closed.select("Lab");
        assert_eq!(outcome, SelectOutcome::None);
    }

    #[test]
    fn trigger_shows_matching_label() {
        let options = type_options();
        assert_eq!(display_label(&options, "Lecture", "Select type"), "Lecture");
        assert_eq!(display_label(&options, "lecture", "Select type"), "Select type");
        assert_eq!(display_label(&options, "", "Select type"), "Select type");
    }

    #[test]
    fn panel_sits_below_trigger() {
        let rect = TriggerRect { top: 100.0, left: 40.0, bottom: 136.0, width: 180.0 };
        let pos = panel_position(rect);
        assert_eq!(pos.top, 140.0);
        assert_eq!(pos.left, 40.0);
        assert_eq!(pos.min_width, 180.0);
        assert!(pos.style().contains("top: 140px"));
    }
}
