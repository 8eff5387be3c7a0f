// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    api_key: Arc<str>,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, api_key: &str) -> Self {
        Self {
            services,
            api_key: Arc::from(api_key),
        }
    }

    /// Compares without short-circuiting on the first differing byte.
    pub fn api_key_matches(&self, candidate: &str) -> bool {
        let expected = self.api_key.as_bytes();
        let candidate = candidate.as_bytes();
        if expected.len() != candidate.len() {
            return false;
        }
        expected
            .iter()
            .zip(candidate)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}
