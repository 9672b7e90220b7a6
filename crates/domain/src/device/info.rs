//! Device info — a read-only snapshot of a device's fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeValue;
use crate::device::DeviceKind;
use crate::id::DeviceId;

/// Flat view of a device: `id`, `type`, then the variant's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub id: DeviceId,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
    #[serde(flatten)]
    pub fields: BTreeMap<String, AttributeValue>,
}

impl DeviceInfo {
    /// Look up a variant field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&AttributeValue> {
        self.fields.get(field)
    }
}
