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

//! Full API objects wrapping the generated specs

use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{PersistentVolumeClaim, PersistentVolumeClaimSpec};
use k8s_openapi::api::networking::v1::{Ingress, IngressSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference};
use std::collections::BTreeMap;

/// Metadata shared by every object generated for a component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectParams {
    pub name: String,
    pub namespace: String,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    pub owner: Option<OwnerReference>,
}

impl ObjectParams {
    pub fn object_meta(&self) -> ObjectMeta {
        ObjectMeta {
            name: Some(self.name.clone()),
            namespace: Some(self.namespace.clone()),
            labels: non_empty(&self.labels),
            annotations: non_empty(&self.annotations),
            owner_references: self.owner.clone().map(|owner| vec![owner]),
            ..Default::default()
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

pub fn build_deployment(params: &ObjectParams, spec: DeploymentSpec) -> Deployment {
    Deployment {
        metadata: params.object_meta(),
        spec: Some(spec),
        status: None,
    }
}

pub fn build_pvc(params: &ObjectParams, spec: PersistentVolumeClaimSpec) -> PersistentVolumeClaim {
    PersistentVolumeClaim {
        metadata: params.object_meta(),
        spec: Some(spec),
        status: None,
    }
}

pub fn build_ingress(params: &ObjectParams, spec: IngressSpec) -> Ingress {
    Ingress {
        metadata: params.object_meta(),
        spec: Some(spec),
        status: None,
    }
}

fn non_empty(map: &BTreeMap<String, String>) -> Option<BTreeMap<String, String>> {
    if map.is_empty() {
        None
    } else {
        Some(map.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::kubernetes::resources::generate_pvc_spec;
    use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

    #[test]
    fn test_object_meta_with_owner() {
        let params = ObjectParams {
            name: "web".to_string(),
            namespace: "dev".to_string(),
            owner: Some(OwnerReference {
                api_version: "apps/v1".to_string(),
                kind: "Deployment".to_string(),
                name: "web".to_string(),
                uid: "abc-123".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let pvc = build_pvc(
            &params.with_name("web-pvc"),
            generate_pvc_spec(Quantity("1Gi".to_string())),
        );
        assert_eq!(pvc.metadata.name.as_deref(), Some("web-pvc"));
        assert_eq!(pvc.metadata.namespace.as_deref(), Some("dev"));
        assert!(pvc.metadata.labels.is_none());
        let owners = pvc.metadata.owner_references.unwrap();
        assert_eq!(owners.len(), 1);
        assert_eq!(owners[0].uid, "abc-123");
    }
}
