//! Device changes — a named set of optional fields to apply to a device.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::attribute::AttributeValue;

/// Requested field updates, keyed by field name.
///
/// Each device variant picks the fields it understands and ignores the rest.
/// When read from a JSON object, `null`, arrays and nested objects are
/// dropped, so they never fail the whole request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DeviceChanges {
    fields: BTreeMap<String, AttributeValue>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RequestedValue {
    Scalar(AttributeValue),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for DeviceChanges {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let requested = BTreeMap::<String, RequestedValue>::deserialize(deserializer)?;
        let fields = requested
            .into_iter()
            .filter_map(|(field, value)| match value {
                RequestedValue::Scalar(value) => Some((field, value)),
                RequestedValue::Other(IgnoredAny) => None,
            })
            .collect();
        Ok(Self { fields })
    }
}

impl DeviceChanges {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&AttributeValue> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
