//! Explicit fetch lifecycle surfaced to views
//!
//! Success, empty result and failure are distinct states: a failed fetch
//! renders an error panel with a retry affordance instead of being
//! swallowed into an endless placeholder.

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    /// No fetch started yet
    Idle,
    /// Fetch in flight; the view renders a placeholder
    Loading,
    /// Payload received and non-empty
    Ready(T),
    /// Payload received but carries no data
    Empty,
    /// Fetch failed; message shown with a retry affordance
    Failed(String),
}

impl<T> LoadState<T> {
    /// Classify a finished fetch into `Ready`, `Empty` or `Failed`
    pub fn classify(result: Result<T, String>, is_empty: impl FnOnce(&T) -> bool) -> Self {
        match result {
            Ok(payload) if is_empty(&payload) => LoadState::Empty,
            Ok(payload) => LoadState::Ready(payload),
            Err(message) => LoadState::Failed(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ready() {
        let state = LoadState::classify(Ok(vec![1, 2]), |v: &Vec<i32>| v.is_empty());
        assert_eq!(state, LoadState::Ready(vec![1, 2]));
    }

    #[test]
    fn test_classify_empty() {
        let state = LoadState::classify(Ok(Vec::<i32>::new()), |v| v.is_empty());
        assert_eq!(state, LoadState::Empty);
    }

    #[test]
    fn test_classify_failed() {
        let state: LoadState<Vec<i32>> =
            LoadState::classify(Err("HTTP error: 500".to_string()), |v| v.is_empty());
        assert_eq!(state, LoadState::Failed("HTTP error: 500".to_string()));
    }
}
