//! Load lifecycle of a view backed by a single fetch.

use crate::FetchError;

/// Where a one-shot collection load currently stands.
///
/// `Loading` is the only non-terminal variant. Whether a loaded collection is
/// empty is a rendering concern, not a separate state.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// The request is in flight.
    Loading,
    /// The request failed; holds the message shown to the user.
    Failed(String),
    /// The request succeeded; items are in response order.
    Loaded(Vec<T>),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    /// Apply the outcome of the fetch.
    ///
    /// Only `Loading` moves; a settled state stays as it is.
    pub fn settle(self, outcome: Result<Vec<T>, FetchError>) -> Self {
        match self {
            LoadState::Loading => match outcome {
                Ok(items) => LoadState::Loaded(items),
                Err(err) => LoadState::Failed(err.to_string()),
            },
            settled => settled,
        }
    }

    /// `true` while the request is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// `true` once the state can no longer change.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// Loaded items, or `None` unless the load succeeded.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            LoadState::Loaded(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Failure message, if the load failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LoadState;
    use crate::FetchError;

    #[test]
    fn starts_loading() {
        let state = LoadState::<u32>::default();
        assert!(state.is_loading());
        assert_eq!(state.items(), None);
        assert_eq!(state.message(), None);
    }

    #[test]
    fn success_loads_items_in_order() {
        let state = LoadState::Loading.settle(Ok(vec![3, 1, 2]));
        assert!(state.is_terminal());
        assert_eq!(state.items(), Some(&[3, 1, 2][..]));
    }

    #[test]
    fn empty_success_is_still_loaded() {
        let state = LoadState::<u32>::Loading.settle(Ok(Vec::new()));
        assert_eq!(state, LoadState::Loaded(Vec::new()));
        assert_eq!(state.message(), None);
    }

    #[test]
    fn status_failure_uses_generic_message() {
        let state = LoadState::<u32>::Loading.settle(Err(FetchError::Status(500)));
        assert_eq!(state.message(), Some("Failed to fetch bikes"));
        assert_eq!(state.items(), None);
    }

    #[test]
    fn transport_failure_keeps_message() {
        let state =
            LoadState::<u32>::Loading.settle(Err(FetchError::Transport("Failed to fetch".into())));
        assert_eq!(state, LoadState::Failed("Failed to fetch".to_string()));
    }

    #[test]
    fn settled_states_are_terminal() {
        let failed = LoadState::<u32>::Failed("boom".into()).settle(Ok(vec![1]));
        assert_eq!(failed, LoadState::Failed("boom".into()));

        let loaded = LoadState::Loaded(vec![1]).settle(Err(FetchError::Status(404)));
        assert_eq!(loaded, LoadState::Loaded(vec![1]));
    }
}
