use crate::application::services::snapshot::{read_snapshot, write_snapshot, Snapshot};
use crate::domain::entities::{Agent, AgentPatch, CreateAgent};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::key_value_store::KeyValueStore;
use std::sync::Arc;

/// Owns the support agents. Removing an agent leaves tickets that name it
/// untouched.
pub struct AgentService {
    store: Arc<dyn KeyValueStore>,
    key: String,
    agents: Vec<Agent>,
}

impl AgentService {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>, agents: Vec<Agent>) -> Self {
        Self {
            store,
            key: key.into(),
            agents,
        }
    }

    pub async fn load<F>(
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        seed: F,
    ) -> DomainResult<Self>
    where
        F: FnOnce() -> Vec<Agent>,
    {
        let key = key.into();
        let agents = match read_snapshot::<Agent>(store.as_ref(), &key).await? {
            Snapshot::Loaded(agents) => {
                tracing::info!("Loaded {} agents from {}", agents.len(), key);
                agents
            }
            Snapshot::Missing => seed(),
            Snapshot::Unreadable(reason) => {
                tracing::warn!("Saved agents under {} are unreadable ({}); using seed data", key, reason);
                seed()
            }
        };

        Ok(Self::new(store, key, agents))
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.name == name)
    }

    /// Names offered in the assignee picker, in roster order
    pub fn agent_names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name.as_str()).collect()
    }

    pub async fn add(&mut self, data: CreateAgent) -> DomainResult<Agent> {
        let agent = Agent::new(data);

        let mut next = self.agents.clone();
        next.push(agent.clone());
        self.commit(next).await?;

        tracing::info!("Agent added: id={}, name={}", agent.id, agent.name);
        Ok(agent)
    }

    pub async fn update(&mut self, id: &str, patch: AgentPatch) -> DomainResult<Agent> {
        let index = self.position(id)?;

        let mut next = self.agents.clone();
        patch.apply_to(&mut next[index]);
        let updated = next[index].clone();
        self.commit(next).await?;

        tracing::info!("Agent updated: id={}", id);
        Ok(updated)
    }

    pub async fn remove(&mut self, id: &str) -> DomainResult<()> {
        self.position(id)?;

        let next: Vec<Agent> = self.agents.iter().filter(|a| a.id != id).cloned().collect();
        self.commit(next).await?;

        tracing::info!("Agent removed: id={}", id);
        Ok(())
    }

    pub async fn reset(&mut self, agents: Vec<Agent>) -> DomainResult<()> {
        self.commit(agents).await
    }

    fn position(&self, id: &str) -> DomainResult<usize> {
        self.agents
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Agent {} not found", id)))
    }

    async fn commit(&mut self, next: Vec<Agent>) -> DomainResult<()> {
        write_snapshot(self.store.as_ref(), &self.key, &next).await?;
        self.agents = next;
        Ok(())
    }
}
