use crate::data::model::LaunchDataset;
use crate::data::query::{self, PieInput, ScatterInput, SiteFilter};

// ---------------------------------------------------------------------------
// Control inputs
// ---------------------------------------------------------------------------

/// Current values of the two selection controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub site: SiteFilter,
    /// Inclusive payload range, kept at `lo <= hi` by the UI layer.
    pub payload_lo: f64,
    pub payload_hi: f64,
}

impl Controls {
    /// Initial selection: all sites, full observed payload range.
    pub fn for_dataset(dataset: &LaunchDataset) -> Self {
        Controls {
            site: SiteFilter::AllSites,
            payload_lo: dataset.payload_min,
            payload_hi: dataset.payload_max,
        }
    }
}

// ---------------------------------------------------------------------------
// Callback registry: output id → (handler, declared inputs)
// ---------------------------------------------------------------------------

/// A control whose change can trigger chart recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputId {
    SiteSelector,
    PayloadRange,
}

/// A chart recomputed by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OutputId {
    SuccessPie,
    PayloadScatter,
}

/// Result of one handler invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutput {
    Pie(PieInput),
    Scatter(ScatterInput),
}

/// A chart handler: pure function of the dataset and the current controls.
pub type Handler = fn(&LaunchDataset, &Controls) -> ChartOutput;

struct Callback {
    output: OutputId,
    inputs: &'static [InputId],
    handler: Handler,
}

/// Synchronous dispatch table in the manner of a declarative callback graph:
/// each output names the inputs it depends on, and a control change
/// recomputes exactly the outputs that declared it.
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        CallbackRegistry {
            callbacks: Vec::new(),
        }
    }

    /// The standard dashboard graph: the pie reacts to the site selector,
    /// the scatter reacts to both controls.
    pub fn dashboard() -> Self {
        let mut registry = Self::new();
        registry.register(
            OutputId::SuccessPie,
            &[InputId::SiteSelector],
            success_pie_handler,
        );
        registry.register(
            OutputId::PayloadScatter,
            &[InputId::SiteSelector, InputId::PayloadRange],
            payload_scatter_handler,
        );
        registry
    }

    pub fn register(
        &mut self,
        output: OutputId,
        inputs: &'static [InputId],
        handler: Handler,
    ) {
        self.callbacks.push(Callback {
            output,
            inputs,
            handler,
        });
    }

    /// Recompute every output that declared `changed` as an input.
    pub fn dispatch(
        &self,
        changed: InputId,
        dataset: &LaunchDataset,
        controls: &Controls,
    ) -> Vec<(OutputId, ChartOutput)> {
        self.callbacks
            .iter()
            .filter(|cb| cb.inputs.contains(&changed))
            .map(|cb| (cb.output, (cb.handler)(dataset, controls)))
            .collect()
    }

    /// Recompute every registered output (initial render).
    pub fn dispatch_all(
        &self,
        dataset: &LaunchDataset,
        controls: &Controls,
    ) -> Vec<(OutputId, ChartOutput)> {
        self.callbacks
            .iter()
            .map(|cb| (cb.output, (cb.handler)(dataset, controls)))
            .collect()
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::dashboard()
    }
}

// ---------------------------------------------------------------------------
// Standard handlers
// ---------------------------------------------------------------------------

fn success_pie_handler(dataset: &LaunchDataset, controls: &Controls) -> ChartOutput {
    ChartOutput::Pie(query::build_success_pie(dataset, &controls.site))
}

fn payload_scatter_handler(dataset: &LaunchDataset, controls: &Controls) -> ChartOutput {
    ChartOutput::Scatter(query::build_payload_scatter(
        dataset,
        &controls.site,
        controls.payload_lo,
        controls.payload_hi,
    ))
}
