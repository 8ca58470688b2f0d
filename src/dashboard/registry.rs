//! Callback registration table
//!
//! Maps input components to a pure handler and the output component it
//! redraws. The HTTP layer dispatches through this table; the page fetches
//! it to know which inputs trigger which outputs.

use serde::Serialize;
use std::fmt;

use super::error::{CallbackError, CallbackResult};
use super::inputs::CallbackInputs;
use crate::chart::{payload_scatter, success_pie, ChartSpec, PIE_SNAPSHOT, SCATTER_SNAPSHOT};
use crate::dataset::Dataset;
use crate::layout::{PAYLOAD_SLIDER, PIE_GRAPH, SCATTER_GRAPH, SITE_DROPDOWN};

/// Pure callback body
pub type Handler = fn(&Dataset, &CallbackInputs) -> CallbackResult<ChartSpec>;

/// A component property, e.g. `site-dropdown.value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRef {
    pub id: String,
    pub property: String,
}

impl ComponentRef {
    pub fn new(id: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            property: property.into(),
        }
    }

    pub fn value(id: impl Into<String>) -> Self {
        Self::new(id, "value")
    }

    pub fn figure(id: impl Into<String>) -> Self {
        Self::new(id, "figure")
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.id, self.property)
    }
}

/// One registered callback
#[derive(Clone, Serialize)]
pub struct Callback {
    pub output: ComponentRef,
    pub inputs: Vec<ComponentRef>,
    /// Snapshot file refreshed after each run, if any
    pub snapshot: Option<String>,
    #[serde(skip)]
    handler: Handler,
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

impl Callback {
    pub fn new(output: ComponentRef, inputs: Vec<ComponentRef>, handler: Handler) -> Self {
        Self {
            output,
            inputs,
            snapshot: None,
            handler,
        }
    }

    /// Builder method: refresh a snapshot file after each run
    pub fn snapshot(mut self, file_name: impl Into<String>) -> Self {
        self.snapshot = Some(file_name.into());
        self
    }

    /// Check declared inputs are present, then run the handler
    pub fn invoke(&self, dataset: &Dataset, inputs: &CallbackInputs) -> CallbackResult<ChartSpec> {
        if let Some(missing) = self.inputs.iter().find(|i| !inputs.contains(&i.id)) {
            return Err(CallbackError::MissingInput {
                output: self.output.id.clone(),
                input: missing.id.clone(),
            });
        }
        (self.handler)(dataset, inputs)
    }
}

/// Serializable view of the registry for the page
#[derive(Debug, Serialize)]
pub struct CallbackTable<'a> {
    pub callbacks: &'a [Callback],
}

/// The full set of dashboard callbacks, keyed by output id
#[derive(Debug, Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dashboard's two chart callbacks
    pub fn standard() -> Self {
        let mut registry = Self::new();

        let callbacks = [
            Callback::new(
                ComponentRef::figure(PIE_GRAPH),
                vec![ComponentRef::value(SITE_DROPDOWN)],
                pie_handler,
            )
            .snapshot(PIE_SNAPSHOT),
            Callback::new(
                ComponentRef::figure(SCATTER_GRAPH),
                vec![
                    ComponentRef::value(SITE_DROPDOWN),
                    ComponentRef::value(PAYLOAD_SLIDER),
                ],
                scatter_handler,
            )
            .snapshot(SCATTER_SNAPSHOT),
        ];

        for callback in callbacks {
            registry
                .register(callback)
                .expect("standard callbacks claim distinct outputs");
        }
        registry
    }

    /// Add a callback; each output may be claimed once
    pub fn register(&mut self, callback: Callback) -> CallbackResult<()> {
        if self.get(&callback.output.id).is_some() {
            return Err(CallbackError::DuplicateOutput(callback.output.id));
        }
        tracing::debug!(
            output = %callback.output,
            inputs = callback.inputs.len(),
            "Registered callback"
        );
        self.callbacks.push(callback);
        Ok(())
    }

    pub fn get(&self, output_id: &str) -> Option<&Callback> {
        self.callbacks.iter().find(|c| c.output.id == output_id)
    }

    pub fn callbacks(&self) -> &[Callback] {
        &self.callbacks
    }

    /// Callbacks that read a given input component
    pub fn triggered_by<'a>(&'a self, input_id: &'a str) -> impl Iterator<Item = &'a Callback> + 'a {
        self.callbacks
            .iter()
            .filter(move |c| c.inputs.iter().any(|i| i.id == input_id))
    }

    pub fn table(&self) -> CallbackTable<'_> {
        CallbackTable {
            callbacks: &self.callbacks,
        }
    }

    /// Resolve the callback for `output_id` and run it
    pub fn dispatch(
        &self,
        output_id: &str,
        dataset: &Dataset,
        inputs: &CallbackInputs,
    ) -> CallbackResult<(&Callback, ChartSpec)> {
        let callback = self
            .get(output_id)
            .ok_or_else(|| CallbackError::UnknownOutput(output_id.to_string()))?;
        let spec = callback.invoke(dataset, inputs)?;
        Ok((callback, spec))
    }
}

fn pie_handler(dataset: &Dataset, inputs: &CallbackInputs) -> CallbackResult<ChartSpec> {
    let site = inputs.site(SITE_DROPDOWN)?;
    Ok(success_pie(dataset, &site))
}

fn scatter_handler(dataset: &Dataset, inputs: &CallbackInputs) -> CallbackResult<ChartSpec> {
    let site = inputs.site(SITE_DROPDOWN)?;
    let range = inputs.payload_range(PAYLOAD_SLIDER)?;
    Ok(payload_scatter(dataset, &site, range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;
    use crate::dataset::fixtures;
    use serde_json::json;

    #[test]
    fn test_standard_table() {
        let registry = CallbackRegistry::standard();
        assert_eq!(registry.callbacks().len(), 2);

        let pie = registry.get(PIE_GRAPH).unwrap();
        assert_eq!(pie.inputs, vec![ComponentRef::value(SITE_DROPDOWN)]);
        assert_eq!(pie.snapshot.as_deref(), Some("success_pie_chart.html"));

        let scatter = registry.get(SCATTER_GRAPH).unwrap();
        assert_eq!(scatter.inputs.len(), 2);
        assert_eq!(
            scatter.snapshot.as_deref(),
            Some("success_payload_scatter_chart.html")
        );

        assert_eq!(registry.triggered_by(SITE_DROPDOWN).count(), 2);
        assert_eq!(registry.triggered_by(PAYLOAD_SLIDER).count(), 1);
    }

    #[test]
    fn test_table_serialization() {
        let registry = CallbackRegistry::standard();
        let json = serde_json::to_value(registry.table()).unwrap();

        assert_eq!(json["callbacks"][0]["output"]["id"], "success-pie-chart");
        assert_eq!(json["callbacks"][0]["output"]["property"], "figure");
        assert_eq!(json["callbacks"][1]["inputs"][1]["id"], "payload-slider");
        assert!(json["callbacks"][0].get("handler").is_none());
    }

    #[test]
    fn test_dispatch_pie() {
        let dataset = fixtures::dataset();
        let registry = CallbackRegistry::standard();
        let inputs = CallbackInputs::new().with(SITE_DROPDOWN, "KSC LC-39A");

        let (callback, spec) = registry.dispatch(PIE_GRAPH, &dataset, &inputs).unwrap();
        assert_eq!(callback.output.id, PIE_GRAPH);
        assert_eq!(spec.kind(), ChartKind::Pie);
        assert_eq!(spec.title, "Success vs. Failed for KSC LC-39A");
    }

    #[test]
    fn test_dispatch_scatter() {
        let dataset = fixtures::dataset();
        let registry = CallbackRegistry::standard();
        let inputs = CallbackInputs::new()
            .with(SITE_DROPDOWN, "ALL")
            .with(PAYLOAD_SLIDER, json!([0, 0]));

        let (_, spec) = registry.dispatch(SCATTER_GRAPH, &dataset, &inputs).unwrap();
        assert_eq!(spec.kind(), ChartKind::Scatter);
        assert_eq!(spec.mark_count(), 2);
    }

    #[test]
    fn test_dispatch_missing_input() {
        let dataset = fixtures::dataset();
        let registry = CallbackRegistry::standard();
        let inputs = CallbackInputs::new().with(SITE_DROPDOWN, "ALL");

        assert_eq!(
            registry
                .dispatch(SCATTER_GRAPH, &dataset, &inputs)
                .unwrap_err(),
            CallbackError::MissingInput {
                output: SCATTER_GRAPH.to_string(),
                input: PAYLOAD_SLIDER.to_string(),
            }
        );
    }

    #[test]
    fn test_dispatch_unknown_output() {
        let dataset = fixtures::dataset();
        let registry = CallbackRegistry::standard();
        assert!(matches!(
            registry.dispatch("nope", &dataset, &CallbackInputs::new()),
            Err(CallbackError::UnknownOutput(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_standard_registers_every_output() {
        let registry = CallbackRegistry::standard();
        let outputs: Vec<&str> = registry
            .callbacks()
            .iter()
            .map(|c| c.output.id.as_str())
            .collect();
        assert_eq!(outputs, vec![PIE_GRAPH, SCATTER_GRAPH]);
    }

    #[test]
    fn test_duplicate_output_rejected() {
        let mut registry = CallbackRegistry::standard();
        let again = Callback::new(ComponentRef::figure(PIE_GRAPH), Vec::new(), pie_handler);
        assert_eq!(
            registry.register(again),
            Err(CallbackError::DuplicateOutput(PIE_GRAPH.to_string()))
        );
    }
}
