//! The seam between the render coordinator and the actual charting library.
//!
//! A [`ChartBackend`] owns the drawing surface: it knows which draw targets
//! exist, registers plugins, and turns a [`ChartConfig`] into a live chart
//! instance identified by an opaque [`ChartHandle`]. The crate ships
//! [`RecordingBackend`], a headless implementation that records every call;
//! real integrations wrap whatever charting library the host application
//! embeds.

use crate::chart::config::ChartConfig;
use crate::chart::plugins::PluginSpec;
use std::collections::{HashMap, HashSet};

/// Opaque identifier of a live chart instance, minted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

impl ChartHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Drawing-side operations the render coordinator depends on.
///
/// Contract:
/// - [`register_plugin`](Self::register_plugin) is idempotent per plugin id;
///   registering an already-known id is a no-op.
/// - [`create_chart`](Self::create_chart) returns a handle that stays valid
///   until passed to [`destroy_chart`](Self::destroy_chart).
/// - [`has_target`](Self::has_target) answers whether a draw target
///   currently exists; the coordinator treats a missing target as a silent
///   no-op because renders may race with target teardown.
pub trait ChartBackend {
    fn has_target(&self, target: &str) -> bool;

    fn register_plugin(&mut self, plugin: PluginSpec);

    fn create_chart(&mut self, target: &str, config: &ChartConfig) -> ChartHandle;

    fn destroy_chart(&mut self, chart: ChartHandle);
}

/// A headless backend that records chart lifecycle calls.
///
/// Used by this crate's own tests and useful for driving the render
/// pipeline without a UI, e.g. to snapshot the generated configs.
///
/// # Examples
///
/// ```
/// use agroclima::{RecordingBackend, RenderCoordinator};
///
/// let mut backend = RecordingBackend::new();
/// backend.add_target("crop-bands");
/// let mut coordinator = RenderCoordinator::new(backend);
/// coordinator.render_crop_calendar("crop-bands", Some("May-Jun"), Some("Sep-Oct"), Some(72.0));
/// assert_eq!(coordinator.backend().charts_created(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingBackend {
    targets: HashSet<String>,
    plugins: Vec<PluginSpec>,
    next_handle: u64,
    live: HashMap<ChartHandle, String>,
    configs: HashMap<ChartHandle, ChartConfig>,
    created: usize,
    destroyed: usize,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a draw target as existing.
    pub fn add_target(&mut self, target: impl Into<String>) {
        self.targets.insert(target.into());
    }

    /// Removes a draw target, simulating teardown on the drawing side.
    pub fn remove_target(&mut self, target: &str) {
        self.targets.remove(target);
    }

    /// Total number of `create_chart` calls observed.
    pub fn charts_created(&self) -> usize {
        self.created
    }

    /// Total number of `destroy_chart` calls observed.
    pub fn charts_destroyed(&self) -> usize {
        self.destroyed
    }

    /// Number of currently live instances drawn into `target`.
    pub fn live_chart_count(&self, target: &str) -> usize {
        self.live.values().filter(|t| t.as_str() == target).count()
    }

    /// The config of the live instance on `target`, if any.
    pub fn live_config(&self, target: &str) -> Option<&ChartConfig> {
        self.live
            .iter()
            .find(|(_, t)| t.as_str() == target)
            .and_then(|(handle, _)| self.configs.get(handle))
    }

    /// Whether a plugin with the given id has been registered.
    pub fn plugin_registered(&self, id: &str) -> bool {
        self.plugins.iter().any(|p| p.id == id)
    }

    /// Number of registered plugins (duplicates are dropped).
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }
}

impl ChartBackend for RecordingBackend {
    fn has_target(&self, target: &str) -> bool {
        self.targets.contains(target)
    }

    fn register_plugin(&mut self, plugin: PluginSpec) {
        if !self.plugins.iter().any(|p| p.id == plugin.id) {
            self.plugins.push(plugin);
        }
    }

    fn create_chart(&mut self, target: &str, config: &ChartConfig) -> ChartHandle {
        self.next_handle += 1;
        let handle = ChartHandle::new(self.next_handle);
        self.live.insert(handle, target.to_string());
        self.configs.insert(handle, config.clone());
        self.created += 1;
        handle
    }

    fn destroy_chart(&mut self, chart: ChartHandle) {
        if self.live.remove(&chart).is_some() {
            self.configs.remove(&chart);
            self.destroyed += 1;
        }
    }
}
