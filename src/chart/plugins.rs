//! Chart plugin registration.
//!
//! The one plugin this crate relies on shades horizontal zone bands behind
//! the datasets of a chart (driven by
//! [`ChartConfig::zones`](crate::ChartConfig)). Registration happens
//! explicitly when a [`RenderCoordinator`](crate::RenderCoordinator) is
//! constructed, never as a side effect of a render call, and
//! [`ChartBackend::register_plugin`](crate::ChartBackend::register_plugin)
//! must treat a repeated id as a no-op so initialization stays idempotent.

use serde::Serialize;

/// Identifier of the zone-bands plugin.
pub const ZONE_BANDS_PLUGIN_ID: &str = "zone-bands";

/// Identifies a chart plugin to a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginSpec {
    pub id: &'static str,
}

/// The zone-bands plugin registration record.
pub fn zone_bands_spec() -> PluginSpec {
    PluginSpec {
        id: ZONE_BANDS_PLUGIN_ID,
    }
}
