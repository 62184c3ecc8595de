use crate::application::queries::Dashboard;
use crate::application::seed::{demo_agents, demo_tickets};
use crate::application::services::{AgentService, PreferenceService, TicketService};
use crate::config::{Config, StorageBackend};
use crate::domain::errors::DomainResult;
use crate::domain::ports::clock::{Clock, SystemClock};
use crate::domain::ports::key_value_store::{KeyValueStore, StorageKeys};
use crate::infrastructure::persistence::{Database, SqliteKeyValueStore};
use crate::infrastructure::storage::{InMemoryStore, LocalFileStore};
use std::sync::Arc;

/// Open the key/value backend named in the configuration
pub async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Sqlite => {
            let db = Database::connect(&config.database_url).await?;
            db.run_migrations().await?;
            tracing::info!("Database migrations applied");
            Arc::new(SqliteKeyValueStore::new(db))
        }
        StorageBackend::File => {
            tracing::info!("Using file storage in {}", config.data_dir.display());
            Arc::new(LocalFileStore::new(config.data_dir.clone()))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; nothing will be kept after exit");
            Arc::new(InMemoryStore::new())
        }
    };

    Ok(store)
}

/// The three stores a presentation layer works against
pub struct Desk {
    pub tickets: TicketService,
    pub agents: AgentService,
    pub preferences: PreferenceService,
}

#[derive(Debug, Clone)]
pub struct DeskOptions {
    pub keys: StorageKeys,
    pub default_theme: crate::domain::entities::Theme,
    pub seed_demo_data: bool,
}

impl From<&Config> for DeskOptions {
    fn from(config: &Config) -> Self {
        Self {
            keys: StorageKeys::with_namespace(&config.storage_namespace),
            default_theme: config.default_theme,
            seed_demo_data: config.seed_demo_data,
        }
    }
}

impl Default for DeskOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl Desk {
    /// Read the persisted state once. Collections that were never saved start
    /// from the demo data, or empty when seeding is off.
    pub async fn open(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        options: DeskOptions,
    ) -> DomainResult<Self> {
        let seed = options.seed_demo_data;
        let now = clock.now();

        let tickets = TicketService::load(
            store.clone(),
            clock,
            options.keys.tickets.clone(),
            || if seed { demo_tickets(now) } else { Vec::new() },
        )
        .await?;

        let agents = AgentService::load(store.clone(), options.keys.agents.clone(), || {
            if seed {
                demo_agents()
            } else {
                Vec::new()
            }
        })
        .await?;

        let preferences =
            PreferenceService::load(store, options.keys.theme.clone(), options.default_theme)
                .await?;

        Ok(Self {
            tickets,
            agents,
            preferences,
        })
    }

    pub async fn open_with_config(store: Arc<dyn KeyValueStore>, config: &Config) -> DomainResult<Self> {
        Self::open(store, Arc::new(SystemClock), DeskOptions::from(config)).await
    }

    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard::build(self.tickets.tickets(), self.agents.agents())
    }

    /// Put the demo tickets back, discarding every current ticket
    pub async fn clear_all_data(&mut self, now: chrono::DateTime<chrono::Utc>) -> DomainResult<()> {
        self.tickets.reset(demo_tickets(now)).await
    }
}
