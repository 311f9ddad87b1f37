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

use crate::infrastructure::constants::{ACCESS_MODE_READ_WRITE_ONCE, RESOURCE_STORAGE};
use k8s_openapi::api::core::v1::{PersistentVolumeClaimSpec, VolumeResourceRequirements};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use std::collections::BTreeMap;

/// Creates a read-write-once claim spec requesting `quantity` of storage.
pub fn generate_pvc_spec(quantity: Quantity) -> PersistentVolumeClaimSpec {
    let mut requests = BTreeMap::new();
    requests.insert(RESOURCE_STORAGE.to_string(), quantity);

    PersistentVolumeClaimSpec {
        access_modes: Some(vec![ACCESS_MODE_READ_WRITE_ONCE.to_string()]),
        resources: Some(VolumeResourceRequirements {
            requests: Some(requests),
            ..Default::default()
        }),
        ..Default::default()
    }
}
