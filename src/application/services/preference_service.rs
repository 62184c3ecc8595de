use crate::domain::entities::Theme;
use crate::domain::errors::DomainResult;
use crate::domain::ports::key_value_store::KeyValueStore;
use std::sync::Arc;

/// Theme preference, stored as the bare string `light` or `dark`
pub struct PreferenceService {
    store: Arc<dyn KeyValueStore>,
    key: String,
    theme: Theme,
}

impl PreferenceService {
    pub async fn load(
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        default_theme: Theme,
    ) -> DomainResult<Self> {
        let key = key.into();
        let theme = match store.get(&key).await? {
            Some(raw) => raw.parse::<Theme>().unwrap_or_else(|_| {
                tracing::warn!("Ignoring saved theme {:?}; using {}", raw, default_theme);
                default_theme
            }),
            None => default_theme,
        };

        Ok(Self { store, key, theme })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub async fn set_theme(&mut self, theme: Theme) -> DomainResult<()> {
        self.store.set(&self.key, theme.as_str()).await?;
        self.theme = theme;
        tracing::debug!("Theme set to {}", theme);
        Ok(())
    }

    pub async fn toggle_theme(&mut self) -> DomainResult<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next).await?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStore;

    #[tokio::test]
    async fn test_default_when_unset() {
        let store = Arc::new(InMemoryStore::new());
        let prefs = PreferenceService::load(store, "theme", Theme::Dark)
            .await
            .unwrap();
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[tokio::test]
    async fn test_toggle_persists() {
        let store = Arc::new(InMemoryStore::new());
        let mut prefs = PreferenceService::load(store.clone(), "theme", Theme::Light)
            .await
            .unwrap();

        assert_eq!(prefs.toggle_theme().await.unwrap(), Theme::Dark);
        assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn test_garbage_theme_falls_back() {
        let store = Arc::new(InMemoryStore::new());
        store.set("theme", "neon").await.unwrap();

        let prefs = PreferenceService::load(store, "theme", Theme::Light)
            .await
            .unwrap();
        assert_eq!(prefs.theme(), Theme::Light);
    }
}
