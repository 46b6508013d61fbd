//! Command configuration.

/// Limits applied by the member commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandConfig {
    /// Most regions one player may own when claiming buyable regions (`None`: unlimited)
    pub max_region_count: Option<usize>,
}

impl CommandConfig {
    /// Reads `MAX_REGION_COUNT`; unset, negative or unparseable means unlimited.
    #[must_use]
    pub fn from_env() -> Self {
        let max_region_count = std::env::var("MAX_REGION_COUNT")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .and_then(|v| usize::try_from(v).ok());

        Self { max_region_count }
    }
}
