use smart_default::SmartDefault;
use tracing::warn;

use crate::paging::{PageSizeValidator, DEFAULT_MAX_PAGE_SIZE};

pub const MAX_PAGE_SIZE_VAR: &str = "MAX_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq, SmartDefault)]
pub struct ApiConfig {
    #[default(DEFAULT_MAX_PAGE_SIZE)]
    pub max_page_size: usize,
}

impl ApiConfig {
    /// Reads settings from the process environment, loading `.env` first.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_PAGE_SIZE_VAR) {
            match raw.trim().parse::<i64>() {
                Ok(value) => {
                    config.max_page_size = usize::try_from(value.max(1)).unwrap_or(usize::MAX)
                }
                Err(e) => warn!(
                    "Ignoring {MAX_PAGE_SIZE_VAR}={raw:?} ({e}), using {}",
                    config.max_page_size
                ),
            }
        }

        config
    }

    pub fn with_max_page_size(mut self, max_page_size: Option<usize>) -> Self {
        if let Some(max_page_size) = max_page_size {
            self.max_page_size = max_page_size;
        }
        self
    }

    pub fn validator(&self) -> PageSizeValidator {
        PageSizeValidator::new(self.max_page_size)
    }
}
