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

use crate::infrastructure::constants::STRATEGY_TYPE_RECREATE;
use k8s_openapi::api::apps::v1::{DeploymentSpec, DeploymentStrategy};
use k8s_openapi::api::core::v1::PodTemplateSpec;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use std::collections::BTreeMap;

/// Creates a deployment spec around the given pod template.
///
/// The selector is a verbatim copy of the template labels, so the two always
/// match. A template without labels still produces a spec, which the API
/// server will reject; see `validate_deployment_spec` to catch this earlier.
pub fn generate_deployment_spec(pod_template_spec: PodTemplateSpec) -> DeploymentSpec {
    let labels = pod_template_spec
        .metadata
        .as_ref()
        .and_then(|meta| meta.labels.clone());

    if labels.as_ref().map_or(true, BTreeMap::is_empty) {
        tracing::warn!("pod template has no labels, deployment selector will be empty");
    }

    DeploymentSpec {
        strategy: Some(DeploymentStrategy {
            type_: Some(STRATEGY_TYPE_RECREATE.to_string()),
            rolling_update: None,
        }),
        selector: LabelSelector {
            match_labels: labels,
            ..Default::default()
        },
        template: pod_template_spec,
        ..Default::default()
    }
}
