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

use crate::infrastructure::constants::ODO_SOURCE_VOLUME;
use crate::shared::error::{Result, SpecError};
use k8s_openapi::api::apps::v1::DeploymentSpec;
use k8s_openapi::api::core::v1::PodTemplateSpec;

/// Checks that the selector is non-empty and identical to the template labels.
pub fn validate_deployment_spec(spec: &DeploymentSpec) -> Result<()> {
    let selector = spec
        .selector
        .match_labels
        .as_ref()
        .filter(|labels| !labels.is_empty())
        .ok_or_else(|| {
            SpecError::validation_error(
                "deployment selector has no labels; set labels on the pod template metadata",
            )
        })?;

    let template_labels = spec
        .template
        .metadata
        .as_ref()
        .and_then(|meta| meta.labels.as_ref());

    if template_labels != Some(selector) {
        return Err(SpecError::validation_error(format!(
            "deployment selector {:?} does not match pod template labels {:?}",
            selector, template_labels
        )));
    }

    validate_pod_template_spec(&spec.template)
}

/// Checks that the template carries exactly one source scratch volume.
pub fn validate_pod_template_spec(template: &PodTemplateSpec) -> Result<()> {
    let source_volumes = template
        .spec
        .as_ref()
        .and_then(|spec| spec.volumes.as_ref())
        .map(|volumes| {
            volumes
                .iter()
                .filter(|v| v.name == ODO_SOURCE_VOLUME)
                .count()
        })
        .unwrap_or(0);

    if source_volumes != 1 {
        return Err(SpecError::validation_error(format!(
            "pod template must have exactly one '{}' volume, found {}",
            ODO_SOURCE_VOLUME, source_volumes
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::kubernetes::resources::{
        generate_deployment_spec, generate_pod_template_spec,
    };
    use k8s_openapi::api::core::v1::Container;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
    use std::collections::BTreeMap;

    fn spec_with_labels(labels: Option<BTreeMap<String, String>>) -> DeploymentSpec {
        let template = generate_pod_template_spec(
            ObjectMeta {
                labels,
                ..Default::default()
            },
            vec![Container {
                name: "runtime".to_string(),
                ..Default::default()
            }],
        );
        generate_deployment_spec(template)
    }

    fn labels() -> BTreeMap<String, String> {
        let mut labels = BTreeMap::new();
        labels.insert("app".to_string(), "web".to_string());
        labels
    }

    #[test]
    fn test_generated_spec_is_valid() {
        assert!(validate_deployment_spec(&spec_with_labels(Some(labels()))).is_ok());
    }

    #[test]
    fn test_missing_labels_rejected() {
        assert!(validate_deployment_spec(&spec_with_labels(None)).is_err());
        assert!(validate_deployment_spec(&spec_with_labels(Some(BTreeMap::new()))).is_err());
    }

    #[test]
    fn test_diverged_labels_rejected() {
        let mut spec = spec_with_labels(Some(labels()));
        spec.template
            .metadata
            .as_mut()
            .unwrap()
            .labels
            .as_mut()
            .unwrap()
            .insert("app".to_string(), "other".to_string());

        let err = validate_deployment_spec(&spec).unwrap_err();
        assert!(matches!(err, SpecError::ValidationError(_)));
    }

    #[test]
    fn test_missing_source_volume_rejected() {
        let mut spec = spec_with_labels(Some(labels()));
        spec.template.spec.as_mut().unwrap().volumes = None;
        assert!(validate_deployment_spec(&spec).is_err());
    }
}
