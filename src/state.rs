use std::collections::BTreeMap;

use crate::color::ColorMap;
use crate::data::model::LaunchDataset;
use crate::data::query::{PieInput, ScatterInput, SiteFilter};
use crate::dispatch::{CallbackRegistry, ChartOutput, Controls, InputId, OutputId};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once before the window opens and never changes;
/// everything else is derived from it and the current control values.
pub struct AppState {
    /// Loaded dataset (read-only for the process lifetime).
    pub dataset: LaunchDataset,

    /// Current selector values.
    pub controls: Controls,

    /// Cached chart inputs, keyed by output id, kept current by dispatch.
    outputs: BTreeMap<OutputId, ChartOutput>,

    /// Colour per booster category for the scatter chart.
    pub booster_colors: ColorMap,

    /// Colour per slice label for the pie chart.
    pub site_colors: ColorMap,

    registry: CallbackRegistry,
}

impl AppState {
    /// Build the initial state and compute both charts once.
    pub fn new(dataset: LaunchDataset) -> Self {
        let controls = Controls::for_dataset(&dataset);
        let booster_colors =
            ColorMap::new(dataset.records.iter().map(|r| r.booster_category.as_str()));
        // Pie slices are either site names or the Success/Failure pair.
        let site_colors = ColorMap::new(
            dataset
                .sites
                .iter()
                .map(String::as_str)
                .chain(["Success", "Failure"]),
        );

        let mut state = AppState {
            dataset,
            controls,
            outputs: BTreeMap::new(),
            booster_colors,
            site_colors,
            registry: CallbackRegistry::dashboard(),
        };
        let updates = state
            .registry
            .dispatch_all(&state.dataset, &state.controls);
        state.apply(updates);
        state
    }

    fn apply(&mut self, updates: Vec<(OutputId, ChartOutput)>) {
        for (id, output) in updates {
            self.outputs.insert(id, output);
        }
    }

    fn refresh(&mut self, changed: InputId) {
        let updates = self
            .registry
            .dispatch(changed, &self.dataset, &self.controls);
        self.apply(updates);
    }

    /// Change the site selection; no-op if the value is unchanged.
    pub fn set_site(&mut self, site: SiteFilter) {
        if self.controls.site != site {
            self.controls.site = site;
            self.refresh(InputId::SiteSelector);
        }
    }

    /// Change the payload range. Values are clamped to the dataset's
    /// observed bounds and ordered so `lo <= hi` always holds.
    pub fn set_payload_range(&mut self, lo: f64, hi: f64) {
        let lo = lo.clamp(self.dataset.payload_min, self.dataset.payload_max);
        let hi = hi.clamp(self.dataset.payload_min, self.dataset.payload_max);
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

        if lo != self.controls.payload_lo || hi != self.controls.payload_hi {
            self.controls.payload_lo = lo;
            self.controls.payload_hi = hi;
            self.refresh(InputId::PayloadRange);
        }
    }

    /// Current pie chart input.
    pub fn pie(&self) -> Option<&PieInput> {
        match self.outputs.get(&OutputId::SuccessPie) {
            Some(ChartOutput::Pie(pie)) => Some(pie),
            _ => None,
        }
    }

    /// Current scatter chart input.
    pub fn scatter(&self) -> Option<&ScatterInput> {
        match self.outputs.get(&OutputId::PayloadScatter) {
            Some(ChartOutput::Scatter(scatter)) => Some(scatter),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn state() -> AppState {
        let rec = |site: &str, payload: f64, booster: &str, class: i64| LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: booster.to_string(),
            outcome: Outcome::from_class(class).unwrap(),
        };
        AppState::new(LaunchDataset::from_records(vec![
            rec("siteA", 500.0, "boosterX", 1),
            rec("siteA", 1500.0, "boosterY", 0),
            rec("siteB", 800.0, "boosterX", 1),
        ]))
    }

    #[test]
    fn initial_state_has_both_charts() {
        let state = state();
        let pie = state.pie().expect("pie computed at startup");
        assert_eq!(pie.slices.len(), 2);
        let scatter = state.scatter().expect("scatter computed at startup");
        assert_eq!(scatter.points.len(), 3);
    }

    #[test]
    fn site_change_updates_both_charts() {
        let mut state = state();
        state.set_site(SiteFilter::Site("siteB".to_string()));

        let pie = state.pie().unwrap();
        assert_eq!(
            pie.slices,
            vec![("Success".to_string(), 1), ("Failure".to_string(), 0)]
        );
        assert_eq!(state.scatter().unwrap().points.len(), 1);
    }

    #[test]
    fn payload_change_leaves_pie_untouched() {
        let mut state = state();
        let pie_before = state.pie().unwrap().clone();

        state.set_payload_range(600.0, 1000.0);
        assert_eq!(state.pie().unwrap(), &pie_before);
        assert_eq!(state.scatter().unwrap().points.len(), 1);
    }

    #[test]
    fn payload_range_is_clamped_and_ordered() {
        let mut state = state();
        state.set_payload_range(9000.0, -10.0);
        assert_eq!(state.controls.payload_lo, 500.0);
        assert_eq!(state.controls.payload_hi, 1500.0);
    }
}
