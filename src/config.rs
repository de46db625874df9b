use crate::cli::Cli;
use crate::{FindError, Result};

/// Most identifiers the ECS describe endpoints accept in a single call.
pub const MAX_BATCH_SIZE: usize = 100;

pub const DEFAULT_BATCH_SIZE: usize = MAX_BATCH_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindConfig {
    pub query: String,
    pub region: Option<String>,
    pub profile: Option<String>,
    pub batch_size: usize,
}

impl FindConfig {
    pub fn new(query: impl Into<String>) -> Result<Self> {
        let query = query.into();
        if query.is_empty() {
            return Err(FindError::Usage(
                "a non-empty --query is required to filter services".into(),
            ));
        }

        Ok(Self {
            query,
            region: None,
            profile: None,
            batch_size: DEFAULT_BATCH_SIZE,
        })
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Result<Self> {
        if batch_size == 0 || batch_size > MAX_BATCH_SIZE {
            return Err(FindError::Config(format!(
                "batch size must be between 1 and {}, got {}",
                MAX_BATCH_SIZE, batch_size
            )));
        }
        self.batch_size = batch_size;
        Ok(self)
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Self::new(cli.query.clone())?.with_batch_size(cli.batch_size)?;
        config.region = cli.region.clone();
        config.profile = cli.profile.clone();
        Ok(config)
    }
}
