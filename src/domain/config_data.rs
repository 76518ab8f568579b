//! Data supplied to the kubeadm config template.

use std::collections::HashMap;

use gtmpl::Value;

/// Values populated by the caller for the kubeadm config template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigData {
    pub cluster_name: String,
    pub kubernetes_version: String,
    /// Optional; empty means not specified.
    pub unified_control_plane_image: String,
    /// Filled in by [`ConfigData::derive_fields`]; promoted to the top level
    /// when rendered.
    pub auto_derived: AutoDerivedConfigData,
}

/// Fields derived from the rest of [`ConfigData`] when left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoDerivedConfigData {
    /// Derived from the Kubernetes version with `+` replaced by `_`.
    pub docker_stable_tag: String,
}

impl ConfigData {
    pub fn new(cluster_name: impl Into<String>, kubernetes_version: impl Into<String>) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            kubernetes_version: kubernetes_version.into(),
            ..Self::default()
        }
    }

    pub fn with_unified_control_plane_image(mut self, image: impl Into<String>) -> Self {
        self.unified_control_plane_image = image.into();
        self
    }

    pub fn with_docker_stable_tag(mut self, tag: impl Into<String>) -> Self {
        self.auto_derived.docker_stable_tag = tag.into();
        self
    }

    pub fn docker_stable_tag(&self) -> &str {
        &self.auto_derived.docker_stable_tag
    }

    /// Derive every auto-derived field that is still empty.
    ///
    /// Explicitly supplied values are never overwritten, so this is idempotent.
    pub fn derive_fields(&mut self) {
        if self.auto_derived.docker_stable_tag.is_empty() {
            self.auto_derived.docker_stable_tag = self.kubernetes_version.replace('+', "_");
        }
    }

    /// Consuming form of [`ConfigData::derive_fields`].
    pub fn derived(mut self) -> Self {
        self.derive_fields();
        self
    }
}

impl From<&AutoDerivedConfigData> for Value {
    fn from(derived: &AutoDerivedConfigData) -> Self {
        Value::Object(HashMap::from([(
            "DockerStableTag".to_string(),
            Value::String(derived.docker_stable_tag.clone()),
        )]))
    }
}

/// Template view of the data. Auto-derived fields appear both at the top
/// level and under `AutoDerivedConfigData`.
impl From<&ConfigData> for Value {
    fn from(data: &ConfigData) -> Self {
        let derived = Value::from(&data.auto_derived);
        let mut fields = HashMap::from([
            ("ClusterName".to_string(), Value::String(data.cluster_name.clone())),
            ("KubernetesVersion".to_string(), Value::String(data.kubernetes_version.clone())),
            (
                "UnifiedControlPlaneImage".to_string(),
                Value::String(data.unified_control_plane_image.clone()),
            ),
        ]);
        if let Value::Object(promoted) = &derived {
            fields.extend(promoted.iter().map(|(name, value)| (name.clone(), value.clone())));
        }
        fields.insert("AutoDerivedConfigData".to_string(), derived);
        Value::Object(fields)
    }
}
