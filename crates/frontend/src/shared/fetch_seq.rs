//! Sequencing for overlapping in-flight fetches
//!
//! A new fetch triggered by a range change or a live-update signal races
//! with anything already in flight. Each fetch takes a token from
//! `begin()`; a response is applied only if its token is still the latest
//! issued, so a slow early response can never overwrite a fresher one.

#[derive(Debug, Default)]
pub struct FetchSequencer {
    issued: u64,
}

impl FetchSequencer {
    /// Issue the token for the next fetch
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// True if a response carrying `token` is still the latest
    pub fn accept(&self, token: u64) -> bool {
        token == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_monotonic() {
        let mut seq = FetchSequencer::default();
        let a = seq.begin();
        let b = seq.begin();
        let c = seq.begin();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_latest_response_accepted() {
        let mut seq = FetchSequencer::default();
        let token = seq.begin();
        assert!(seq.accept(token));
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut seq = FetchSequencer::default();
        let slow = seq.begin();
        let fresh = seq.begin();

        // newer response lands first, stale one arrives afterwards
        assert!(seq.accept(fresh));
        assert!(!seq.accept(slow));
    }

    #[test]
    fn test_one_token_per_signal() {
        let mut seq = FetchSequencer::default();
        let signals = 5;
        let tokens: Vec<u64> = (0..signals).map(|_| seq.begin()).collect();
        // no coalescing: every signal got its own fetch token
        assert_eq!(tokens.len(), signals);
        let mut unique = tokens.clone();
        unique.dedup();
        assert_eq!(unique.len(), signals);
        // only the last one may be applied
        assert!(seq.accept(tokens[signals - 1]));
        for token in &tokens[..signals - 1] {
            assert!(!seq.accept(*token));
        }
    }
}
