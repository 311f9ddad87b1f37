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

use crate::domain::config::component::{ComponentConfig, IngressConfig, OwnerConfig, StorageConfig};
use crate::shared::error::{Result, SpecError};
use std::collections::HashMap;

/// Parse dynamic configuration properties from -D key=value format
pub fn parse_dynamic_configs(configs: &[String]) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();

    for config in configs {
        let (key, value) = config.split_once('=').ok_or_else(|| {
            SpecError::config_error(format!(
                "Invalid config format: '{}'. Expected 'key=value'",
                config
            ))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(SpecError::config_error(format!(
                "Empty key in config: '{}'",
                config
            )));
        }

        map.insert(key.to_string(), value.trim().to_string());
    }

    Ok(map)
}

/// Apply `-D` overrides on top of a loaded component configuration.
///
/// Map keys: `labels.<key>`, `annotations.<key>`, `env.<NAME>`.
/// Unknown keys are ignored with a warning.
pub fn apply_to_component_config(
    configs: &HashMap<String, String>,
    component: &mut ComponentConfig,
) -> Result<()> {
    let mut keys: Vec<&String> = configs.keys().collect();
    keys.sort();

    for key in keys {
        let value = &configs[key];

        if let Some(label) = key.strip_prefix("labels.") {
            component.labels.insert(label.to_string(), value.clone());
            continue;
        }
        if let Some(annotation) = key.strip_prefix("annotations.") {
            component
                .annotations
                .insert(annotation.to_string(), value.clone());
            continue;
        }
        if let Some(var) = key.strip_prefix("env.") {
            component.env.insert(var.to_string(), value.clone());
            continue;
        }

        match key.as_str() {
            "component.name" => component.name = value.clone(),
            "component.namespace" => component.namespace = value.clone(),
            "component.image" => component.image = value.clone(),
            "component.privileged" => component.privileged = parse_bool(key, value)?,
            "component.command" => component.command = split_list(value),
            "component.args" => component.args = split_list(value),
            "resources.cpu-request" => component.resources.cpu_request = Some(value.clone()),
            "resources.cpu-limit" => component.resources.cpu_limit = Some(value.clone()),
            "resources.memory-request" => {
                component.resources.memory_request = Some(value.clone())
            }
            "resources.memory-limit" => component.resources.memory_limit = Some(value.clone()),
            "storage.size" => {
                component
                    .storage
                    .get_or_insert_with(StorageConfig::default)
                    .size = value.clone()
            }
            "storage.name" => {
                component
                    .storage
                    .get_or_insert_with(StorageConfig::default)
                    .name = Some(value.clone())
            }
            "ingress.domain" => ingress(component).domain = value.clone(),
            "ingress.port" => ingress(component).port = value.clone(),
            "ingress.service-name" => ingress(component).service_name = Some(value.clone()),
            "ingress.tls-secret" => ingress(component).tls_secret = Some(value.clone()),
            "owner.name" => owner(component).name = value.clone(),
            "owner.uid" => owner(component).uid = value.clone(),
            _ => tracing::warn!(key = %key, "ignoring unknown dynamic config"),
        }
    }

    Ok(())
}

fn ingress(component: &mut ComponentConfig) -> &mut IngressConfig {
    component.ingress.get_or_insert_with(IngressConfig::default)
}

fn owner(component: &mut ComponentConfig) -> &mut OwnerConfig {
    component.owner.get_or_insert_with(OwnerConfig::default)
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.parse::<bool>().map_err(|_| {
        SpecError::config_error(format!(
            "Invalid boolean for {}: '{}' (expected true or false)",
            key, value
        ))
    })
}

/// Comma-separated list; items cannot contain commas themselves.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[&str]) -> HashMap<String, String> {
        let owned: Vec<String> = pairs.iter().map(|s| s.to_string()).collect();
        parse_dynamic_configs(&owned).unwrap()
    }

    #[test]
    fn test_parse_dynamic_configs() {
        let map = props(&["component.image=node:20", "env.URL=http://a?b=c"]);
        assert_eq!(map["component.image"], "node:20");
        assert_eq!(map["env.URL"], "http://a?b=c");
    }

    #[test]
    fn test_parse_rejects_missing_value_separator() {
        assert!(parse_dynamic_configs(&["novalue".to_string()]).is_err());
        assert!(parse_dynamic_configs(&["=x".to_string()]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut c = ComponentConfig::default();
        apply_to_component_config(
            &props(&[
                "component.name=web",
                "component.privileged=true",
                "component.command=/bin/sh, -c",
                "labels.tier=frontend",
                "storage.size=5Gi",
                "ingress.domain=web.example.com",
                "ingress.port=8080",
            ]),
            &mut c,
        )
        .unwrap();

        assert_eq!(c.name, "web");
        assert!(c.privileged);
        assert_eq!(c.command, vec!["/bin/sh".to_string(), "-c".to_string()]);
        assert_eq!(c.labels["tier"], "frontend");
        assert_eq!(c.storage.unwrap().size, "5Gi");
        let ingress = c.ingress.unwrap();
        assert_eq!(ingress.domain, "web.example.com");
        assert_eq!(ingress.port, "8080");
    }

    #[test]
    fn test_list_values_split_on_every_comma() {
        let mut c = ComponentConfig::default();
        apply_to_component_config(&props(&["component.args=-c,echo a,b"]), &mut c).unwrap();
        assert_eq!(c.args, vec!["-c", "echo a", "b"]);
    }

    #[test]
    fn test_apply_rejects_bad_bool() {
        let mut c = ComponentConfig::default();
        let result = apply_to_component_config(&props(&["component.privileged=yes"]), &mut c);
        assert!(result.is_err());
    }
}
