//! Read access to typed key-value settings.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

/// Setting consulted by the list route.
pub const HIDE_COMPLETED_ITEMS: &str = "hide_completed_items";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("unknown setting '{0}'")]
    Unknown(String),

    #[error("setting '{key}' has an invalid value: {value}")]
    InvalidValue { key: String, value: Value },
}

#[async_trait]
pub trait SettingsClient: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Value, SettingsError>;
}

#[derive(Debug, Clone)]
pub struct SettingDefinition {
    pub name: String,
    pub description: String,
    pub requires_page_reload: bool,
    pub default: Value,
}

impl SettingDefinition {
    pub fn hide_completed_items() -> Self {
        Self {
            name: "Hide completed items".to_string(),
            description: "completed items will not be sent in the GET /api/todos response"
                .to_string(),
            requires_page_reload: true,
            default: Value::Bool(false),
        }
    }
}

/// Registered definitions plus user overrides, all in memory.
#[derive(Debug, Default)]
pub struct MemorySettings {
    definitions: HashMap<String, SettingDefinition>,
    overrides: RwLock<HashMap<String, Value>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: &str, definition: SettingDefinition) {
        self.definitions.insert(key.to_string(), definition);
    }

    pub fn definition(&self, key: &str) -> Option<&SettingDefinition> {
        self.definitions.get(key)
    }

    /// Stores a user value for a registered key.
    pub fn set(&self, key: &str, value: Value) -> Result<(), SettingsError> {
        if !self.definitions.contains_key(key) {
            return Err(SettingsError::Unknown(key.to_string()));
        }
        self.overrides
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value);
        Ok(())
    }
}

#[async_trait]
impl SettingsClient for MemorySettings {
    async fn get(&self, key: &str) -> Result<Value, SettingsError> {
        let definition = self
            .definitions
            .get(key)
            .ok_or_else(|| SettingsError::Unknown(key.to_string()))?;
        let overrides = self
            .overrides
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(overrides
            .get(key)
            .cloned()
            .unwrap_or_else(|| definition.default.clone()))
    }
}

pub async fn hide_completed(settings: &dyn SettingsClient) -> Result<bool, SettingsError> {
    match settings.get(HIDE_COMPLETED_ITEMS).await? {
        Value::Bool(hide) => Ok(hide),
        value => Err(SettingsError::InvalidValue {
            key: HIDE_COMPLETED_ITEMS.to_string(),
            value,
        }),
    }
}
