//! Callback input values
//!
//! The current value of every input component, keyed by component id, as
//! posted by the page.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::error::{CallbackError, CallbackResult};
use crate::dataset::{PayloadRange, SiteSelection};

/// Input values for one callback invocation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallbackInputs {
    values: HashMap<String, Value>,
}

impl CallbackInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set one input value
    pub fn with(mut self, id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(id.into(), value.into());
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    fn required(&self, id: &str) -> CallbackResult<&Value> {
        self.values.get(id).ok_or_else(|| CallbackError::InvalidInput {
            input: id.to_string(),
            reason: "no value supplied".to_string(),
        })
    }

    /// Read a dropdown value as a site selection
    pub fn site(&self, id: &str) -> CallbackResult<SiteSelection> {
        match self.required(id)? {
            Value::String(value) => Ok(SiteSelection::from(value.as_str())),
            other => Err(CallbackError::InvalidInput {
                input: id.to_string(),
                reason: format!("expected a site name, got {}", other),
            }),
        }
    }

    /// Read a range slider value as `[low, high]`
    pub fn payload_range(&self, id: &str) -> CallbackResult<PayloadRange> {
        let value = self.required(id)?;
        serde_json::from_value::<PayloadRange>(value.clone()).map_err(|e| {
            CallbackError::InvalidInput {
                input: id.to_string(),
                reason: format!("expected [low, high], {}", e),
            }
        })
    }
}
