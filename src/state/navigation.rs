//! Keyboard focus and results cursor (pure).

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// The search bar.
    #[default]
    Search,
    /// The results list.
    Results,
}

impl FocusPane {
    /// Switch between the two panes.
    pub fn toggle(self) -> Self {
        match self {
            FocusPane::Search => FocusPane::Results,
            FocusPane::Results => FocusPane::Search,
        }
    }
}

/// Highlighted row in the results list.
///
/// The cursor is only a pointer for keyboard navigation; it is not the
/// selection. Selecting happens when the user confirms the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultsCursor {
    index: usize,
}

impl ResultsCursor {
    /// Row under the cursor, if the list has one.
    pub fn index(self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.index.min(len - 1))
    }

    /// Move up one row, saturating at the top.
    pub fn up(self) -> Self {
        Self {
            index: self.index.saturating_sub(1),
        }
    }

    /// Move down one row, saturating at the last of `len` rows.
    pub fn down(self, len: usize) -> Self {
        Self {
            index: (self.index + 1).min(len.saturating_sub(1)),
        }
    }

    /// Jump to `index` (clamped on read).
    pub fn at(index: usize) -> Self {
        Self { index }
    }

    /// Back to the first row.
    pub fn reset() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_toggles() {
        assert_eq!(FocusPane::Search.toggle(), FocusPane::Results);
        assert_eq!(FocusPane::Results.toggle(), FocusPane::Search);
    }

    #[test]
    fn cursor_on_empty_list_has_no_row() {
        assert_eq!(ResultsCursor::reset().index(0), None);
    }

    #[test]
    fn cursor_moves_within_bounds() {
        let cursor = ResultsCursor::reset().down(3).down(3).down(3);
        assert_eq!(cursor.index(3), Some(2));
        assert_eq!(cursor.up().index(3), Some(1));
        assert_eq!(ResultsCursor::reset().up().index(3), Some(0));
    }

    #[test]
    fn cursor_clamps_when_list_shrinks() {
        let cursor = ResultsCursor::at(8);
        assert_eq!(cursor.index(4), Some(3));
    }
}
