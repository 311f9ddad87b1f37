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

use crate::domain::component::validator::validate_deployment_spec;
use crate::domain::config::ComponentConfig;
use crate::infrastructure::constants::PVC_SUFFIX;
use crate::infrastructure::kubernetes::resources::{
    build_deployment, build_ingress, build_pvc, generate_container, generate_deployment_spec,
    generate_env_vars, generate_ingress_spec, generate_owner_reference,
    generate_pod_template_spec, generate_pvc_spec, generate_resource_requirements,
    IngressParameter, ObjectParams, ResourceSettings,
};
use crate::shared::error::Result;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::PersistentVolumeClaim;
use k8s_openapi::api::networking::v1::Ingress;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

/// Objects generated for one component
#[derive(Debug, Clone)]
pub struct ComponentManifests {
    pub deployment: Deployment,
    pub pvc: Option<PersistentVolumeClaim>,
    pub ingress: Option<Ingress>,
}

impl ComponentManifests {
    /// Multi-document YAML stream: deployment, then claim, then ingress
    pub fn to_yaml(&self) -> Result<String> {
        let mut docs = vec![serde_yaml::to_string(&self.deployment)?];
        if let Some(pvc) = &self.pvc {
            docs.push(serde_yaml::to_string(pvc)?);
        }
        if let Some(ingress) = &self.ingress {
            docs.push(serde_yaml::to_string(ingress)?);
        }
        Ok(docs.join("---\n"))
    }

    /// Single `v1/List` object holding the same documents
    pub fn to_json(&self) -> Result<String> {
        let mut items = vec![serde_json::to_value(&self.deployment)?];
        if let Some(pvc) = &self.pvc {
            items.push(serde_json::to_value(pvc)?);
        }
        if let Some(ingress) = &self.ingress {
            items.push(serde_json::to_value(ingress)?);
        }

        let list = serde_json::json!({
            "apiVersion": "v1",
            "kind": "List",
            "items": items,
        });
        Ok(serde_json::to_string_pretty(&list)?)
    }
}

pub struct ComponentDescriptor {
    config: ComponentConfig,
}

impl ComponentDescriptor {
    pub fn new(config: ComponentConfig) -> Self {
        Self { config }
    }

    pub fn build(&self) -> Result<ComponentManifests> {
        self.config.validate()?;

        let params = self.object_params();
        tracing::debug!(
            component = %self.config.name,
            namespace = %self.config.namespace,
            "generating component manifests"
        );

        let deployment = self.build_deployment(&params)?;

        let pvc = self.config.storage.as_ref().map(|storage| {
            let name = storage
                .name
                .clone()
                .unwrap_or_else(|| format!("{}{}", self.config.name, PVC_SUFFIX));
            build_pvc(
                &params.with_name(name),
                generate_pvc_spec(Quantity(storage.size.clone())),
            )
        });

        let ingress = self.config.ingress.as_ref().map(|ingress| {
            let service_name = ingress
                .service_name
                .clone()
                .unwrap_or_else(|| self.config.name.clone());
            let param = IngressParameter {
                service_name,
                ingress_domain: ingress.domain.clone(),
                port_number: parse_port(&ingress.port),
                tls_secret_name: ingress.tls_secret.clone(),
            };
            build_ingress(&params, generate_ingress_spec(param))
        });

        Ok(ComponentManifests {
            deployment,
            pvc,
            ingress,
        })
    }

    fn build_deployment(&self, params: &ObjectParams) -> Result<Deployment> {
        let resources =
            generate_resource_requirements(&ResourceSettings::from(&self.config.resources))
                .unwrap_or_default();

        let container = generate_container(
            &self.config.name,
            &self.config.image,
            self.config.privileged,
            self.config.command.clone(),
            self.config.args.clone(),
            generate_env_vars(&self.config.env),
            resources,
        );

        let template_meta = ObjectMeta {
            name: Some(self.config.name.clone()),
            labels: Some(params.labels.clone()),
            ..Default::default()
        };

        let spec = generate_deployment_spec(generate_pod_template_spec(
            template_meta,
            vec![container],
        ));
        validate_deployment_spec(&spec)?;

        // The deployment is the owner, so it never references itself.
        let deployment_params = ObjectParams {
            owner: None,
            ..params.clone()
        };
        Ok(build_deployment(&deployment_params, spec))
    }

    fn object_params(&self) -> ObjectParams {
        ObjectParams {
            name: self.config.name.clone(),
            namespace: self.config.namespace.clone(),
            labels: self.config.selector_labels(),
            annotations: self.config.annotations.clone(),
            owner: self.owner_reference(),
        }
    }

    fn owner_reference(&self) -> Option<OwnerReference> {
        self.config.owner.as_ref().map(|owner| {
            let deployment = Deployment {
                metadata: ObjectMeta {
                    name: Some(owner.name.clone()),
                    uid: Some(owner.uid.clone()),
                    ..Default::default()
                },
                ..Default::default()
            };
            generate_owner_reference(&deployment)
        })
    }
}

fn parse_port(port: &str) -> IntOrString {
    match port.trim().parse::<i32>() {
        Ok(number) => IntOrString::Int(number),
        Err(_) => IntOrString::String(port.trim().to_string()),
    }
}
