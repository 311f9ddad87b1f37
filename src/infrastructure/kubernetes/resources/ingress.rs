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

use crate::infrastructure::constants::{INGRESS_PATH_TYPE, INGRESS_ROOT_PATH};
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, IngressBackend, IngressRule, IngressServiceBackend,
    IngressSpec, IngressTLS, ServiceBackendPort,
};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

/// Parameters for [`generate_ingress_spec`].
#[derive(Debug, Clone, PartialEq)]
pub struct IngressParameter {
    /// Service the ingress routes to
    pub service_name: String,
    /// Host the rule (and TLS block) applies to
    pub ingress_domain: String,
    /// Target port on the service, by number or by name
    pub port_number: IntOrString,
    /// Secret holding the TLS certificate; `None` or empty disables TLS
    pub tls_secret_name: Option<String>,
}

impl IngressParameter {
    pub fn new(
        service_name: impl Into<String>,
        ingress_domain: impl Into<String>,
        port_number: IntOrString,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            ingress_domain: ingress_domain.into(),
            port_number,
            tls_secret_name: None,
        }
    }

    pub fn with_tls_secret(mut self, secret_name: impl Into<String>) -> Self {
        self.tls_secret_name = Some(secret_name.into());
        self
    }

    fn tls_secret(&self) -> Option<&str> {
        self.tls_secret_name
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

/// Creates an ingress spec with a single rule routing `/` on the domain to
/// the service port.
pub fn generate_ingress_spec(ingress_param: IngressParameter) -> IngressSpec {
    let path = HTTPIngressPath {
        path: Some(INGRESS_ROOT_PATH.to_string()),
        path_type: INGRESS_PATH_TYPE.to_string(),
        backend: IngressBackend {
            service: Some(IngressServiceBackend {
                name: ingress_param.service_name.clone(),
                port: Some(service_backend_port(&ingress_param.port_number)),
            }),
            ..Default::default()
        },
    };

    let tls = ingress_param.tls_secret().map(|secret_name| {
        vec![IngressTLS {
            hosts: Some(vec![ingress_param.ingress_domain.clone()]),
            secret_name: Some(secret_name.to_string()),
        }]
    });

    IngressSpec {
        rules: Some(vec![IngressRule {
            host: Some(ingress_param.ingress_domain.clone()),
            http: Some(HTTPIngressRuleValue { paths: vec![path] }),
        }]),
        tls,
        ..Default::default()
    }
}

fn service_backend_port(port: &IntOrString) -> ServiceBackendPort {
    match port {
        IntOrString::Int(number) => ServiceBackendPort {
            number: Some(*number),
            ..Default::default()
        },
        IntOrString::String(name) => ServiceBackendPort {
            name: Some(name.clone()),
            ..Default::default()
        },
    }
}
