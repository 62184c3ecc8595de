use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Inactive,
}

impl Default for AgentStatus {
    fn default() -> Self {
        AgentStatus::Active
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentStatus::Active => write!(f, "active"),
            AgentStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for AgentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(AgentStatus::Active),
            "inactive" => Ok(AgentStatus::Inactive),
            _ => Err(DomainError::ValidationError(format!(
                "Invalid agent status: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub status: AgentStatus,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Agent {
    pub fn new(create: CreateAgent) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: create.name,
            email: create.email,
            role: create.role,
            department: create.department,
            status: AgentStatus::Active,
            avatar: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }

    /// Up to two uppercase initials, as shown on agent cards
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAgent {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub status: Option<AgentStatus>,
}

impl AgentPatch {
    pub(crate) fn apply_to(self, agent: &mut Agent) {
        if let Some(name) = self.name {
            agent.name = name;
        }
        if let Some(email) = self.email {
            agent.email = email;
        }
        if let Some(role) = self.role {
            agent.role = role;
        }
        if let Some(department) = self.department {
            agent.department = department;
        }
        if let Some(status) = self.status {
            agent.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_agent_is_active_without_avatar() {
        let agent = Agent::new(CreateAgent {
            name: "Mike Chen".to_string(),
            email: "mike@support.com".to_string(),
            role: "Support Agent".to_string(),
            department: "General".to_string(),
        });

        assert_eq!(agent.status, AgentStatus::Active);
        assert!(agent.avatar.is_none());
        assert!(!agent.id.is_empty());
    }

    #[test]
    fn test_initials() {
        let mut agent = Agent::new(CreateAgent {
            name: "jessica anne taylor".to_string(),
            ..Default::default()
        });
        assert_eq!(agent.initials(), "JA");

        agent.name = String::new();
        assert_eq!(agent.initials(), "");
    }

    #[test]
    fn test_patch_can_deactivate() {
        let mut agent = Agent::new(CreateAgent::default());
        AgentPatch {
            status: Some(AgentStatus::Inactive),
            ..Default::default()
        }
        .apply_to(&mut agent);

        assert!(!agent.is_active());
    }
}
