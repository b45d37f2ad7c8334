//! Action affordances offered by the place page.
//!
//! # Examples
//! ```
//! use placepage_core::{ButtonsData, PlaceAction};
//!
//! let buttons = ButtonsData::from_actions(vec![PlaceAction::Call, PlaceAction::Route]);
//! let buttons = buttons.expect("non-empty action list");
//! assert!(buttons.supports(PlaceAction::Call));
//! assert!(!buttons.supports(PlaceAction::Edit));
//! ```

/// An action the user can take on the selected place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaceAction {
    /// Call the place's phone number.
    Call,
    /// Route to or from the place.
    Route,
    /// Edit the underlying map feature.
    Edit,
    /// Share the place.
    Share,
    /// Open the booking integration.
    Book,
    /// Download the offline map region containing the place.
    Download,
}

impl PlaceAction {
    /// Return the action as a lowercase `&str`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Route => "route",
            Self::Edit => "edit",
            Self::Share => "share",
            Self::Book => "book",
            Self::Download => "download",
        }
    }
}

impl std::fmt::Display for PlaceAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of actions the page offers; absent from the model when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonsData {
    actions: Vec<PlaceAction>,
}

impl ButtonsData {
    /// Build the affordance set, collapsing an empty list to `None`.
    pub fn from_actions(actions: Vec<PlaceAction>) -> Option<Self> {
        if actions.is_empty() {
            None
        } else {
            Some(Self { actions })
        }
    }

    /// True when the page offers `action`.
    pub fn supports(&self, action: PlaceAction) -> bool {
        self.actions.contains(&action)
    }

    /// The offered actions, in presentation order.
    pub fn actions(&self) -> &[PlaceAction] {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_action_list_collapses_to_none() {
        assert!(ButtonsData::from_actions(Vec::new()).is_none());
    }

    #[rstest]
    #[case(PlaceAction::Call, true)]
    #[case(PlaceAction::Share, true)]
    #[case(PlaceAction::Download, false)]
    fn supports_reflects_contents(#[case] action: PlaceAction, #[case] expected: bool) {
        let buttons = ButtonsData::from_actions(vec![PlaceAction::Call, PlaceAction::Share])
            .expect("non-empty action list");
        assert_eq!(buttons.supports(action), expected);
    }
}
