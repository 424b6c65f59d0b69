//! Loading/error/data envelope around one asynchronous resource

/// Network state of a single resource.
///
/// An error transition always ends loading and never touches `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkState<D> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<D>,
}

impl<D> NetworkState<D> {
    /// A resource whose first request is in flight
    pub fn pending() -> Self {
        Self {
            loading: true,
            error: None,
            data: None,
        }
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// Settle with data, clearing any earlier error
    pub fn resolve(&mut self, data: D) {
        self.loading = false;
        self.error = None;
        self.data = Some(data);
    }

    /// Settle with an error, keeping whatever data was already there
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn is_settled(&self) -> bool {
        !self.loading
    }
}

impl<D> Default for NetworkState<D> {
    fn default() -> Self {
        Self::pending()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_pending() {
        let state: NetworkState<Vec<u8>> = NetworkState::pending();
        assert!(state.loading);
        assert!(!state.is_settled());
        assert_eq!(state.error, None);
        assert_eq!(state.data, None);
    }

    #[test]
    fn test_fail_keeps_data() {
        let mut state = NetworkState::pending();
        state.resolve(vec![1, 2, 3]);
        state.start_loading();
        state.fail("timed out");

        assert!(state.is_settled());
        assert_eq!(state.error.as_deref(), Some("timed out"));
        assert_eq!(state.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_resolve_clears_error() {
        let mut state = NetworkState::pending();
        state.fail("boom");
        state.resolve("ok");

        assert_eq!(state.error, None);
        assert_eq!(state.data, Some("ok"));
    }
}
