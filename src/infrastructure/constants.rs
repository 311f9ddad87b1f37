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

/// Scratch volume holding the component's project sources
pub const ODO_SOURCE_VOLUME: &str = "odo-projects";
pub const ODO_SOURCE_VOLUME_MOUNT: &str = "/projects";

/// Container settings
pub const IMAGE_PULL_POLICY_ALWAYS: &str = "Always";

/// Deployment strategy
pub const STRATEGY_TYPE_RECREATE: &str = "Recreate";

/// Persistent volume claims
pub const ACCESS_MODE_READ_WRITE_ONCE: &str = "ReadWriteOnce";
pub const RESOURCE_STORAGE: &str = "storage";
pub const PVC_SUFFIX: &str = "-pvc";

/// Resource names
pub const RESOURCE_CPU: &str = "cpu";
pub const RESOURCE_MEMORY: &str = "memory";

/// Ingress routing
pub const INGRESS_ROOT_PATH: &str = "/";
pub const INGRESS_PATH_TYPE: &str = "ImplementationSpecific";

/// Resource labels
pub const LABEL_COMPONENT: &str = "app.kubernetes.io/instance";
pub const LABEL_MANAGED_BY: &str = "app.kubernetes.io/managed-by";
pub const LABEL_MANAGED_BY_VALUE: &str = "odo";

/// Defaults
pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_STORAGE_SIZE: &str = "1Gi";
