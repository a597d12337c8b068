use eframe::egui::{self, Slider, Ui};

use crate::data::query::SiteFilter;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection controls
// ---------------------------------------------------------------------------

/// Render the control panel: site dropdown and payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // ---- Site selector ----
    ui.strong("Launch site");
    let sites = state.dataset.sites.clone();
    let current = state.controls.site.clone();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteFilter::AllSites, "All Sites")
                .clicked()
            {
                state.set_site(SiteFilter::AllSites);
            }
            for site in &sites {
                let selected = current == SiteFilter::Site(site.clone());
                if ui.selectable_label(selected, site).clicked() {
                    state.set_site(SiteFilter::Site(site.clone()));
                }
            }
        });

    ui.add_space(8.0);
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let bounds = state.dataset.payload_min..=state.dataset.payload_max;
    let mut lo = state.controls.payload_lo;
    let mut hi = state.controls.payload_hi;

    let lo_changed = ui
        .add(Slider::new(&mut lo, bounds.clone()).text("Min"))
        .changed();
    let hi_changed = ui
        .add(Slider::new(&mut hi, bounds).text("Max"))
        .changed();

    if lo_changed || hi_changed {
        // Keep the range well-formed: the edited end pushes the other along.
        if lo_changed && lo > hi {
            hi = lo;
        }
        if hi_changed && hi < lo {
            lo = hi;
        }
        state.set_payload_range(lo, hi);
    }

    ui.add_space(8.0);
    ui.separator();

    if let Some(scatter) = state.scatter() {
        ui.label(format!(
            "{} of {} launches in range",
            scatter.points.len(),
            state.dataset.len()
        ));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar with the dashboard heading and dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("SpaceX Launch Records Dashboard");
        ui.separator();
        ui.label(format!(
            "{} launches, {} sites",
            state.dataset.len(),
            state.dataset.sites.len()
        ));
    });
}
