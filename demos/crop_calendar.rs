//! Renders the crop calendar widget headlessly and prints the chart
//! description the backend would receive.

use agroclima::{RecordingBackend, RenderCoordinator};

fn main() {
    let mut backend = RecordingBackend::new();
    backend.add_target("crop-bands");
    let mut coordinator = RenderCoordinator::new(backend);

    coordinator.render_crop_calendar(
        "crop-bands",
        Some("May-Jun · Sep-Oct"),
        Some("[11,12,1]"),
        Some(82.0),
    );

    let config = coordinator
        .backend()
        .live_config("crop-bands")
        .expect("chart was created");
    println!("{}", serde_json::to_string_pretty(config).unwrap());
}
