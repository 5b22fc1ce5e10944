//! Navigation state: which view is shown and whether a transition is in
//! flight.

/// The view the navigator is in (or heading to, while transitioning).
///
/// `Section` carries its index, so "section view iff an index is set" holds
/// by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The wide overview with no section active.
    Overview,
    /// The section at this index is active.
    Section(usize),
}

/// Snapshot of the navigator's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    /// Current (or destination) view.
    pub view: View,
    /// True from the moment a request is accepted until every animation it
    /// started has finished.
    pub transitioning: bool,
}

impl NavigationState {
    /// Settled in the overview.
    pub const OVERVIEW: Self = Self {
        view: View::Overview,
        transitioning: false,
    };

    /// Index of the active section, `None` in the overview.
    pub fn section_index(&self) -> Option<usize> {
        match self.view {
            View::Overview => None,
            View::Section(i) => Some(i),
        }
    }

    /// Whether the overview is (becoming) the current view.
    pub fn is_overview(&self) -> bool {
        self.view == View::Overview
    }
}

/// Which of the previous/next controls can currently be activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    /// The "previous" control is enabled.
    pub previous_enabled: bool,
    /// The "next" control is enabled.
    pub next_enabled: bool,
}

impl NavControls {
    /// Control enablement for `view` with `section_count` sections.
    pub fn for_view(view: View, section_count: usize) -> Self {
        match view {
            View::Overview => Self {
                previous_enabled: false,
                next_enabled: section_count > 0,
            },
            View::Section(i) => Self {
                previous_enabled: true,
                next_enabled: i + 1 < section_count,
            },
        }
    }
}
