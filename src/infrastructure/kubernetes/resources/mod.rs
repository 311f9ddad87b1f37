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

//! Spec generators for the Kubernetes objects of a component

pub mod container;
pub mod deployment;
pub mod env;
pub mod ingress;
pub mod manifest;
pub mod owner_reference;
pub mod pod_template;
pub mod pvc;

pub use self::container::generate_container;
pub use self::deployment::generate_deployment_spec;
pub use self::env::{generate_env_vars, generate_resource_requirements, ResourceSettings};
pub use self::ingress::{generate_ingress_spec, IngressParameter};
pub use self::manifest::{build_deployment, build_ingress, build_pvc, ObjectParams};
pub use self::owner_reference::generate_owner_reference;
pub use self::pod_template::generate_pod_template_spec;
pub use self::pvc::generate_pvc_spec;
