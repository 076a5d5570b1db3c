//! Owns chart lifecycle per draw target.
//!
//! The coordinator keeps one record per target: the signature of the inputs
//! the live chart was built from, and the handle of that chart. A render
//! whose canonicalized inputs match the stored signature is a no-op; any
//! difference destroys the old instance before creating the new one, so a
//! target never has two live charts at once.

use crate::calendar::band_series::{build_band_series, clamp_score};
use crate::calendar::month_parser::parse_months;
use crate::chart::crop_calendar::crop_calendar_config;
use crate::chart::forecast::forecast_chart_config;
use crate::chart::plugins::zone_bands_spec;
use crate::render::backend::{ChartBackend, ChartHandle};
use crate::types::month::MonthSet;
use chrono::Datelike;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug)]
struct TargetRecord {
    signature: String,
    chart: ChartHandle,
}

#[derive(Serialize)]
struct SignatureInputs<'a> {
    planting: &'a MonthSet,
    harvest: &'a MonthSet,
    avg: Option<f64>,
}

/// Derives the rebuild-detection signature from the canonicalized inputs.
/// Equal inputs always serialize identically (month sets iterate in
/// ascending order), so signature equality means "nothing to redraw".
fn render_signature(planting: &MonthSet, harvest: &MonthSet, avg: Option<f64>) -> String {
    serde_json::to_string(&SignatureInputs {
        planting,
        harvest,
        avg,
    })
    .unwrap_or_default()
}

fn current_month() -> u8 {
    chrono::Local::now().month() as u8
}

/// Idempotent chart (re)creation for the dashboard's draw targets.
///
/// Construction registers the zone-bands plugin with the backend; render
/// calls never register anything. All state lives in explicit per-target
/// records owned by this struct.
///
/// # Examples
///
/// ```
/// use agroclima::{RecordingBackend, RenderCoordinator};
///
/// let mut backend = RecordingBackend::new();
/// backend.add_target("crop-bands");
/// let mut coordinator = RenderCoordinator::new(backend);
///
/// coordinator.render_crop_calendar("crop-bands", Some("[5,6]"), Some("Sep-Oct"), Some(81.0));
/// // Same inputs: no-op, still a single creation.
/// coordinator.render_crop_calendar("crop-bands", Some("[5,6]"), Some("Sep-Oct"), Some(81.0));
/// assert_eq!(coordinator.backend().charts_created(), 1);
/// ```
pub struct RenderCoordinator<B: ChartBackend> {
    backend: B,
    targets: HashMap<String, TargetRecord>,
}

impl<B: ChartBackend> RenderCoordinator<B> {
    /// Wraps a backend and performs one-time plugin registration.
    pub fn new(mut backend: B) -> Self {
        backend.register_plugin(zone_bands_spec());
        Self {
            backend,
            targets: HashMap::new(),
        }
    }

    /// Renders the crop calendar widget into `target_id`.
    ///
    /// The raw descriptors and score are canonicalized first; a missing
    /// target and malformed descriptors degrade silently (the latter to
    /// empty month sets). When the canonicalized inputs match what the
    /// live chart was built from, nothing happens.
    pub fn render_crop_calendar(
        &mut self,
        target_id: &str,
        planting_raw: Option<&str>,
        harvest_raw: Option<&str>,
        raw_score: Option<f64>,
    ) {
        if !self.backend.has_target(target_id) {
            return;
        }
        let planting = parse_months(planting_raw);
        let harvest = parse_months(harvest_raw);
        let score = clamp_score(raw_score);
        let signature = render_signature(&planting, &harvest, score);

        if let Some(record) = self.targets.get(target_id) {
            if record.signature == signature {
                debug!("inputs unchanged for '{target_id}', keeping existing chart");
                return;
            }
        }

        self.destroy_existing(target_id);
        let series = build_band_series(&planting, &harvest, score, current_month());
        let config = crop_calendar_config(&series);
        let chart = self.backend.create_chart(target_id, &config);
        self.targets
            .insert(target_id.to_string(), TargetRecord { signature, chart });
    }

    /// Renders the precipitation forecast panel into `target_id`.
    ///
    /// Forecast data changes with every fetch, so this always rebuilds:
    /// destroy the previous instance (if any), then create the new one.
    pub fn render_forecast(&mut self, target_id: &str, labels: &[String], precipitation: &[f64]) {
        if !self.backend.has_target(target_id) {
            return;
        }
        self.destroy_existing(target_id);
        let config = forecast_chart_config(labels, precipitation);
        let chart = self.backend.create_chart(target_id, &config);
        self.targets.insert(
            target_id.to_string(),
            TargetRecord {
                signature: String::new(),
                chart,
            },
        );
    }

    /// Tears down the chart on `target_id`, if one exists. Call when the
    /// target itself goes away; the per-target record lives exactly as
    /// long as the target does.
    pub fn discard(&mut self, target_id: &str) {
        self.destroy_existing(target_id);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn destroy_existing(&mut self, target_id: &str) {
        if let Some(record) = self.targets.remove(target_id) {
            self.backend.destroy_chart(record.chart);
        }
    }
}
