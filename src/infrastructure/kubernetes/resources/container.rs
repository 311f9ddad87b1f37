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

use crate::infrastructure::constants::IMAGE_PULL_POLICY_ALWAYS;
use k8s_openapi::api::core::v1::{Container, EnvVar, ResourceRequirements, SecurityContext};

/// Creates a container spec that can be used when creating a pod.
///
/// A security context is attached only for privileged containers; an
/// unprivileged container carries none rather than `privileged: false`.
pub fn generate_container(
    name: &str,
    image: &str,
    is_privileged: bool,
    command: Vec<String>,
    args: Vec<String>,
    env_vars: Vec<EnvVar>,
    resource_reqs: ResourceRequirements,
) -> Container {
    let mut container = Container {
        name: name.to_string(),
        image: Some(image.to_string()),
        image_pull_policy: Some(IMAGE_PULL_POLICY_ALWAYS.to_string()),
        resources: Some(resource_reqs),
        command: non_empty(command),
        args: non_empty(args),
        env: non_empty(env_vars),
        ..Default::default()
    };

    if is_privileged {
        container.security_context = Some(SecurityContext {
            privileged: Some(true),
            ..Default::default()
        });
    }

    container
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(privileged: bool) -> Container {
        generate_container(
            "runtime",
            "quay.io/odo/nodejs:latest",
            privileged,
            vec!["/bin/sh".to_string()],
            vec!["-c".to_string(), "npm start".to_string()],
            vec![EnvVar {
                name: "PORT".to_string(),
                value: Some("8080".to_string()),
                ..Default::default()
            }],
            ResourceRequirements::default(),
        )
    }

    #[test]
    fn test_privileged_container_has_security_context() {
        let c = container(true);
        let ctx = c.security_context.expect("security context");
        assert_eq!(ctx.privileged, Some(true));
    }

    #[test]
    fn test_unprivileged_container_has_no_security_context() {
        assert!(container(false).security_context.is_none());
    }

    #[test]
    fn test_fields_copied() {
        let c = container(false);
        assert_eq!(c.name, "runtime");
        assert_eq!(c.image.as_deref(), Some("quay.io/odo/nodejs:latest"));
        assert_eq!(c.image_pull_policy.as_deref(), Some("Always"));
        assert_eq!(c.command, Some(vec!["/bin/sh".to_string()]));
        assert_eq!(c.args.as_ref().map(Vec::len), Some(2));
        assert_eq!(c.env.as_ref().unwrap()[0].name, "PORT");
    }

    #[test]
    fn test_empty_lists_are_omitted() {
        let c = generate_container(
            "x",
            "img",
            false,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            ResourceRequirements::default(),
        );
        assert!(c.command.is_none());
        assert!(c.args.is_none());
        assert!(c.env.is_none());
    }
}
