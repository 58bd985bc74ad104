use std::path::Path;

use serde::{Deserialize, Serialize};

use moot_core::wire::WireShape;
use moot_core::Role;

// ── Field mapping ──

/// Names of the reply fields as the deployed backend sends them. Variants
/// disagree on naming, so the folder reads through this map instead of
/// hard-coded keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMap {
    pub reply: String,
    pub technical_analysis: String,
    pub business_analysis: String,
    pub final_report: String,
    pub can_generate_report: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            reply: "reply".to_string(),
            technical_analysis: "technical_analysis".to_string(),
            business_analysis: "business_analysis".to_string(),
            final_report: "final_report".to_string(),
            can_generate_report: "can_generate_report".to_string(),
        }
    }
}

// ── Backend config ──

/// Backend connection settings — stored in `moot.json` next to where the
/// session runs. The base address is injected here, never a literal in the
/// pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub endpoint: String,
    pub wire_shape: WireShape,
    pub timeout_secs: u64,
    /// Role assigned to generic replies: `system` or `model` per variant.
    pub reply_role: String,
    pub fields: FieldMap,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            endpoint: "/api/consult".to_string(),
            wire_shape: WireShape::Compact,
            timeout_secs: 30,
            reply_role: "model".to_string(),
            fields: FieldMap::default(),
        }
    }
}

impl BackendConfig {
    /// Load from a JSON file. Missing or unparseable files fall back to
    /// defaults; `MOOT_BACKEND_URL` overrides the base address either way.
    pub fn load(path: &Path) -> Self {
        let mut config = match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        };
        if let Ok(url) = std::env::var("MOOT_BACKEND_URL") {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        config
    }

    /// Full request URL.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint)
    }

    pub fn reply_role(&self) -> Role {
        Role::parse(&self.reply_role)
    }
}
