// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::infrastructure::constants::{
    DEFAULT_NAMESPACE, DEFAULT_STORAGE_SIZE, LABEL_COMPONENT, LABEL_MANAGED_BY,
    LABEL_MANAGED_BY_VALUE,
};
use crate::infrastructure::kubernetes::resources::ResourceSettings;
use crate::shared::error::{Result, SpecError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;
use std::sync::OnceLock;

/// Description of a single component, loaded from TOML or YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentConfig {
    pub name: String,
    pub namespace: String,
    pub image: String,
    pub privileged: bool,
    pub command: Vec<String>,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    pub resources: ResourcesConfig,
    pub storage: Option<StorageConfig>,
    pub ingress: Option<IngressConfig>,
    pub owner: Option<OwnerConfig>,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            image: String::new(),
            privileged: false,
            command: Vec::new(),
            args: Vec::new(),
            env: BTreeMap::new(),
            labels: BTreeMap::new(),
            annotations: BTreeMap::new(),
            resources: ResourcesConfig::default(),
            storage: None,
            ingress: None,
            owner: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ResourcesConfig {
    pub cpu_request: Option<String>,
    pub cpu_limit: Option<String>,
    pub memory_request: Option<String>,
    pub memory_limit: Option<String>,
}

impl From<&ResourcesConfig> for ResourceSettings {
    fn from(conf: &ResourcesConfig) -> Self {
        ResourceSettings {
            cpu_request: conf.cpu_request.clone(),
            cpu_limit: conf.cpu_limit.clone(),
            memory_request: conf.memory_request.clone(),
            memory_limit: conf.memory_limit.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Claim name; defaults to `<component>-pvc`
    pub name: Option<String>,
    pub size: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            name: None,
            size: DEFAULT_STORAGE_SIZE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IngressConfig {
    pub domain: String,
    /// Numeric port, or a named service port
    pub port: String,
    /// Service to route to; defaults to the component name
    pub service_name: Option<String>,
    pub tls_secret: Option<String>,
}

/// Deployment that owns the generated objects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerConfig {
    pub name: String,
    pub uid: String,
}

impl ComponentConfig {
    /// Load configuration from a `.toml`, `.yaml` or `.yml` file
    pub fn from<T: AsRef<str>>(path: T) -> Result<Self> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|e| {
            SpecError::config_error(format!("Failed to read config file {}: {}", path, e))
        })?;

        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "toml" => Self::from_toml_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            other => Err(SpecError::config_error(format!(
                "Unsupported config file extension '{}' for {} (expected toml, yaml or yml)",
                other, path
            ))),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Labels shared by the pod template, the selector and every generated object
    pub fn selector_labels(&self) -> BTreeMap<String, String> {
        let mut labels = self.labels.clone();
        labels.insert(LABEL_COMPONENT.to_string(), self.name.clone());
        labels.insert(
            LABEL_MANAGED_BY.to_string(),
            LABEL_MANAGED_BY_VALUE.to_string(),
        );
        labels
    }

    pub fn validate(&self) -> Result<()> {
        if !is_valid_k8s_name(&self.name) {
            return Err(SpecError::config_error(format!(
                "Invalid component name: '{}'",
                self.name
            )));
        }

        if !is_valid_k8s_name(&self.namespace) {
            return Err(SpecError::config_error(format!(
                "Invalid namespace: '{}'",
                self.namespace
            )));
        }

        if self.image.trim().is_empty() {
            return Err(SpecError::config_error("image must not be empty"));
        }

        if let Some(storage) = &self.storage {
            if storage.size.trim().is_empty() {
                return Err(SpecError::config_error("storage.size must not be empty"));
            }
        }

        if let Some(ingress) = &self.ingress {
            if ingress.domain.trim().is_empty() {
                return Err(SpecError::config_error("ingress.domain must not be empty"));
            }
            if ingress.port.trim().is_empty() {
                return Err(SpecError::config_error("ingress.port must not be empty"));
            }
            if let Ok(port) = ingress.port.parse::<i64>() {
                if !(1..=65535).contains(&port) {
                    return Err(SpecError::config_error(format!(
                        "ingress.port out of range (1-65535): {}",
                        port
                    )));
                }
            }
        }

        Ok(())
    }
}

/// DNS-1123 label: lowercase alphanumerics and '-', alphanumeric at both ends
pub(crate) fn is_valid_k8s_name(name: &str) -> bool {
    static DNS_LABEL: OnceLock<Regex> = OnceLock::new();
    let re = DNS_LABEL.get_or_init(|| {
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("static regex is valid")
    });

    name.len() <= 63 && re.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ComponentConfig {
        ComponentConfig {
            name: "nodejs".to_string(),
            image: "quay.io/odo/nodejs:latest".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_k8s_names() {
        assert!(is_valid_k8s_name("nodejs"));
        assert!(is_valid_k8s_name("my-app-1"));
        assert!(!is_valid_k8s_name(""));
        assert!(!is_valid_k8s_name("-app"));
        assert!(!is_valid_k8s_name("app-"));
        assert!(!is_valid_k8s_name("MyApp"));
        assert!(!is_valid_k8s_name(&"a".repeat(64)));
    }

    #[test]
    fn test_validate_ok() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_image() {
        let mut c = config();
        c.image = " ".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_validate_ingress_port_range() {
        let mut c = config();
        c.ingress = Some(IngressConfig {
            domain: "nodejs.example.com".to_string(),
            port: "70000".to_string(),
            ..Default::default()
        });
        assert!(c.validate().is_err());

        c.ingress.as_mut().unwrap().port = "http".to_string();
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_selector_labels_include_component() {
        let mut c = config();
        c.labels.insert("tier".to_string(), "web".to_string());
        let labels = c.selector_labels();
        assert_eq!(labels.get("app.kubernetes.io/instance").unwrap(), "nodejs");
        assert_eq!(labels.get("app.kubernetes.io/managed-by").unwrap(), "odo");
        assert_eq!(labels.get("tier").unwrap(), "web");
    }

    #[test]
    fn test_from_file_extension_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("component.YAML");
        std::fs::write(&path, "name: nodejs\nimage: node20\n").unwrap();

        let c = ComponentConfig::from(path.to_string_lossy()).unwrap();
        assert_eq!(c.name, "nodejs");
        assert_eq!(c.image, "node20");
    }

    #[test]
    fn test_from_toml_str_defaults() {
        let c = ComponentConfig::from_toml_str(
            r#"
name = "nodejs"
image = "node:20"

[storage]
size = "2Gi"
"#,
        )
        .unwrap();
        assert_eq!(c.namespace, "default");
        assert!(!c.privileged);
        assert_eq!(c.storage.unwrap().size, "2Gi");
        assert!(c.ingress.is_none());
    }

    #[test]
    fn test_from_yaml_str() {
        let c = ComponentConfig::from_yaml_str(
            r#"
name: nodejs
image: node:20
privileged: true
ingress:
  domain: nodejs.example.com
  port: "8080"
  tls-secret: my-secret
"#,
        )
        .unwrap();
        assert!(c.privileged);
        let ingress = c.ingress.unwrap();
        assert_eq!(ingress.tls_secret.as_deref(), Some("my-secret"));
        assert_eq!(ingress.port, "8080");
    }
}
