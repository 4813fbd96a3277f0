// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover overlay driven by region paths.
//!
//! The hotspot lives in the sidebar and the overlay surface floats elsewhere,
//! so moving between them never produces a clean leave event. The controller
//! re-checks containment on every move instead.
//!
//! Run:
//! - `cargo run -p vitrine_demos --example overlay_hover`

use core::time::Duration;

use kurbo::Size;
use vitrine_interact::InteractionConfig;
use vitrine_interact::host::{MediaElement, RegionProbe};
use vitrine_interact::overlay::{OverlayController, OverlayState};
use vitrine_interact::sim::{PageLayout, SimulatedMedia};
use vitrine_interact::timer::TimerQueue;

fn main() {
    let mut page = PageLayout::new(Size::new(1280.0, 800.0), &[("about", 800.0)]).unwrap();
    let targets = page.targets();
    let mut overlay = OverlayController::new(targets.hotspot, targets.surface, &InteractionConfig::default());
    let mut media = SimulatedMedia::new(4.0);
    let mut timers = TimerQueue::new();

    let mut step = |label: &str, page: &mut PageLayout, at| {
        let path = page.path_at(at);
        let states = overlay.on_pointer_move(&path, &mut media, &mut timers);
        let _ = page.set_overlay_visible(overlay.is_visible());
        println!("{label:<10} path {path:?}\n           -> {states:?}");
        states
    };

    let hotspot = page.hotspot_center();
    let surface = page.surface_center();
    let elsewhere = page.pane_point();

    assert_eq!(
        step("hotspot", &mut page, hotspot),
        [OverlayState::Showing, OverlayState::Playing]
    );
    assert!(step("surface", &mut page, surface).is_empty());
    assert_eq!(step("elsewhere", &mut page, elsewhere), [OverlayState::FadingOut]);

    for handle in timers.advance_by(Duration::from_millis(1000)) {
        let states = overlay.on_timer(handle, &mut media);
        println!("timer      -> {states:?}");
    }
    assert_eq!(overlay.state(), OverlayState::Hidden);
    assert_eq!(media.current_time(), 0.0);
}
