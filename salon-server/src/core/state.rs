use chrono::NaiveDate;

use crate::core::{Config, Result};
use crate::db::KvStore;
use crate::stripe::StripeClient;

/// Shared handles for every request handler
///
/// Cloning is shallow; the store and HTTP client are reference counted
/// internally.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub kv: KvStore,
    pub stripe: StripeClient,
}

impl ServerState {
    /// Open the database under the configured work dir and build the
    /// Stripe client
    pub fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;
        let kv = KvStore::open(config.database_path())?;
        let stripe = StripeClient::new(
            config.stripe_secret_key.clone(),
            config.stripe_api_url.clone(),
            config.request_timeout(),
        )?;
        Ok(Self {
            config: config.clone(),
            kv,
            stripe,
        })
    }

    /// State backed by an in-memory database. For tests.
    pub fn in_memory(config: Config) -> Result<Self> {
        let kv = KvStore::open_in_memory()?;
        let stripe = StripeClient::new(
            config.stripe_secret_key.clone(),
            config.stripe_api_url.clone(),
            config.request_timeout(),
        )?;
        Ok(Self { config, kv, stripe })
    }

    /// Today's date in the salon's timezone
    pub fn today(&self) -> NaiveDate {
        chrono::Utc::now().with_timezone(&self.config.timezone).date_naive()
    }
}
