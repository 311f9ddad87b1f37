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

//! Environment variables and resource requirements for component containers

use crate::infrastructure::constants::{RESOURCE_CPU, RESOURCE_MEMORY};
use k8s_openapi::api::core::v1::{EnvVar, ResourceRequirements};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use std::collections::BTreeMap;

/// Plain `name=value` variables, in key order.
pub fn generate_env_vars(vars: &BTreeMap<String, String>) -> Vec<EnvVar> {
    vars.iter()
        .map(|(name, value)| EnvVar {
            name: name.clone(),
            value: Some(value.clone()),
            ..Default::default()
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSettings {
    pub cpu_request: Option<String>,
    pub cpu_limit: Option<String>,
    pub memory_request: Option<String>,
    pub memory_limit: Option<String>,
}

/// Returns `None` when no request or limit is set.
pub fn generate_resource_requirements(settings: &ResourceSettings) -> Option<ResourceRequirements> {
    let requests = resource_list(&settings.cpu_request, &settings.memory_request);
    let limits = resource_list(&settings.cpu_limit, &settings.memory_limit);

    if requests.is_none() && limits.is_none() {
        return None;
    }

    Some(ResourceRequirements {
        requests,
        limits,
        ..Default::default()
    })
}

fn resource_list(
    cpu: &Option<String>,
    memory: &Option<String>,
) -> Option<BTreeMap<String, Quantity>> {
    let mut list = BTreeMap::new();
    if let Some(cpu) = cpu {
        list.insert(RESOURCE_CPU.to_string(), Quantity(cpu.clone()));
    }
    if let Some(memory) = memory {
        list.insert(RESOURCE_MEMORY.to_string(), Quantity(memory.clone()));
    }

    if list.is_empty() {
        None
    } else {
        Some(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_vars_sorted_by_name() {
        let mut vars = BTreeMap::new();
        vars.insert("PORT".to_string(), "8080".to_string());
        vars.insert("DEBUG".to_string(), "true".to_string());

        let env = generate_env_vars(&vars);
        assert_eq!(env.len(), 2);
        assert_eq!(env[0].name, "DEBUG");
        assert_eq!(env[1].value.as_deref(), Some("8080"));
    }

    #[test]
    fn test_no_settings_no_requirements() {
        assert!(generate_resource_requirements(&ResourceSettings::default()).is_none());
    }

    #[test]
    fn test_limits_only() {
        let settings = ResourceSettings {
            memory_limit: Some("512Mi".to_string()),
            ..Default::default()
        };
        let reqs = generate_resource_requirements(&settings).unwrap();
        assert!(reqs.requests.is_none());
        assert_eq!(
            reqs.limits.unwrap().get("memory"),
            Some(&Quantity("512Mi".to_string()))
        );
    }
}
