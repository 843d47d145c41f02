use crate::registry::domain::AuthorityRecord;

/// Phase of a view's state machine.
///
/// `Empty -> Loaded` on a successful fetch; a failed fetch leaves the view `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPhase {
    #[default]
    Empty,
    Loaded,
}

/// The snapshot a view holds between fetches.
///
/// Records are replaced wholesale; there is no merging or partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    records: Vec<AuthorityRecord>,
    phase: ViewPhase,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[AuthorityRecord] {
        &self.records
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replaces the held records with the result of a completed fetch
    pub fn replace(&mut self, records: Vec<AuthorityRecord>) {
        self.records = records;
        self.phase = ViewPhase::Loaded;
    }

    /// Drops the held records and returns to `Empty`
    pub fn clear(&mut self) {
        self.records.clear();
        self.phase = ViewPhase::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = ViewState::new();
        assert_eq!(state.phase(), ViewPhase::Empty);
        assert!(state.is_empty());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut state = ViewState::new();
        state.replace(vec![
            AuthorityRecord::new("Delhi", "0xAA"),
            AuthorityRecord::new("Kerala", "0xBB"),
        ]);
        assert_eq!(state.len(), 2);

        state.replace(vec![AuthorityRecord::new("Assam", "0xCC")]);
        assert_eq!(state.records(), &[AuthorityRecord::new("Assam", "0xCC")]);
        assert_eq!(state.phase(), ViewPhase::Loaded);
    }

    #[test]
    fn test_replace_with_empty_sequence_is_loaded() {
        let mut state = ViewState::new();
        state.replace(Vec::new());
        assert!(state.is_empty());
        assert_eq!(state.phase(), ViewPhase::Loaded);
    }

    #[test]
    fn test_clear_returns_to_empty() {
        let mut state = ViewState::new();
        state.replace(vec![AuthorityRecord::new("Delhi", "0xAA")]);
        state.clear();
        assert!(state.is_empty());
        assert_eq!(state.phase(), ViewPhase::Empty);
    }
}
