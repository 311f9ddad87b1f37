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

use crate::infrastructure::constants::{ODO_SOURCE_VOLUME, ODO_SOURCE_VOLUME_MOUNT};
use k8s_openapi::api::core::v1::{
    Container, EmptyDirVolumeSource, PodSpec, PodTemplateSpec, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Creates a pod template spec that can be used to create a deployment spec.
///
/// The `odo-projects` scratch volume is always attached and mounted at
/// `/projects` in every container.
pub fn generate_pod_template_spec(
    object_meta: ObjectMeta,
    containers: Vec<Container>,
) -> PodTemplateSpec {
    let containers = containers
        .into_iter()
        .map(with_source_volume_mount)
        .collect();

    PodTemplateSpec {
        metadata: Some(object_meta),
        spec: Some(PodSpec {
            containers,
            volumes: Some(vec![source_volume()]),
            ..Default::default()
        }),
    }
}

fn source_volume() -> Volume {
    Volume {
        name: ODO_SOURCE_VOLUME.to_string(),
        empty_dir: Some(EmptyDirVolumeSource::default()),
        ..Default::default()
    }
}

fn with_source_volume_mount(mut container: Container) -> Container {
    let mounts = container.volume_mounts.get_or_insert_with(Vec::new);
    if !mounts
        .iter()
        .any(|m| m.name == ODO_SOURCE_VOLUME || m.mount_path == ODO_SOURCE_VOLUME_MOUNT)
    {
        mounts.push(VolumeMount {
            name: ODO_SOURCE_VOLUME.to_string(),
            mount_path: ODO_SOURCE_VOLUME_MOUNT.to_string(),
            ..Default::default()
        });
    }
    container
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn meta() -> ObjectMeta {
        let mut labels = BTreeMap::new();
        labels.insert("app".to_string(), "nodejs".to_string());
        ObjectMeta {
            name: Some("nodejs".to_string()),
            labels: Some(labels),
            ..Default::default()
        }
    }

    fn named(name: &str) -> Container {
        Container {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_exactly_one_source_volume() {
        let template = generate_pod_template_spec(meta(), vec![named("a"), named("b")]);
        let volumes = template.spec.unwrap().volumes.unwrap();
        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].name, "odo-projects");
        assert!(volumes[0].empty_dir.is_some());
    }

    #[test]
    fn test_source_volume_even_without_containers() {
        let template = generate_pod_template_spec(meta(), Vec::new());
        let spec = template.spec.unwrap();
        assert!(spec.containers.is_empty());
        assert_eq!(spec.volumes.unwrap().len(), 1);
    }

    #[test]
    fn test_every_container_mounts_projects() {
        let template = generate_pod_template_spec(meta(), vec![named("a"), named("b")]);
        for c in template.spec.unwrap().containers {
            let mounts = c.volume_mounts.unwrap();
            assert_eq!(mounts.len(), 1);
            assert_eq!(mounts[0].mount_path, "/projects");
        }
    }

    #[test]
    fn test_existing_mount_not_duplicated() {
        let mut c = named("a");
        c.volume_mounts = Some(vec![VolumeMount {
            name: "odo-projects".to_string(),
            mount_path: "/src".to_string(),
            ..Default::default()
        }]);
        let template = generate_pod_template_spec(meta(), vec![c]);
        let mounts = template.spec.unwrap().containers[0]
            .volume_mounts
            .clone()
            .unwrap();
        assert_eq!(mounts.len(), 1);
        assert_eq!(mounts[0].mount_path, "/src");
    }

    #[test]
    fn test_projects_path_taken_by_other_volume() {
        let mut c = named("a");
        c.volume_mounts = Some(vec![VolumeMount {
            name: "data".to_string(),
            mount_path: "/projects".to_string(),
            ..Default::default()
        }]);
        let template = generate_pod_template_spec(meta(), vec![c]);
        let mounts = template.spec.unwrap().containers[0]
            .volume_mounts
            .clone()
            .unwrap();
        let paths: Vec<&str> = mounts.iter().map(|m| m.mount_path.as_str()).collect();
        assert_eq!(paths, vec!["/projects"]);
        assert_eq!(mounts[0].name, "data");
    }

    #[test]
    fn test_metadata_preserved() {
        let template = generate_pod_template_spec(meta(), vec![named("a")]);
        assert_eq!(template.metadata, Some(meta()));
    }
}
