// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full page session over simulated host capabilities.
//!
//! Loads an interaction config from TOML, mounts a session on a three-section
//! page, then plays a scripted visit: scrolling, a menu click, a hover over
//! the hotspot and a jump away from it. State transitions are logged through
//! `tracing`; set `RUST_LOG=vitrine_interact=trace` to see every signal.
//!
//! Run:
//! - `cargo run -p vitrine_demos --example portfolio_session`

use core::time::Duration;

use kurbo::Size;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vitrine_interact::sim::{PageLayout, SimulatedMedia, SmoothScrollPane};
use vitrine_interact::{Host, InteractionConfig, PageSession, Signal};

const CONFIG: &str = r#"
observer = "visibility-ratio"
fade_delay_ms = 1000
settle_delay_ms = 500
"#;

const FRAME: Duration = Duration::from_millis(16);

type Session = PageSession<SimulatedMedia, SmoothScrollPane, PageLayout>;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Run pending pane animation frames, keeping layout and observer in step.
fn animate(session: &mut Session) {
    while let Some(offset) = session.pane_mut().tick() {
        let _ = session.probe_mut().set_scroll(offset);
        let _ = session.dispatch(Signal::Scroll { offset });
        let _ = session.advance_by(FRAME);
    }
}

fn pointer(session: &mut Session, at: kurbo::Point) {
    let _ = session.dispatch(Signal::PointerMove(at));
    let visible = session.overlay_visible();
    let _ = session.probe_mut().set_overlay_visible(visible);
}

fn main() {
    init_tracing();

    let config = InteractionConfig::from_toml_str(CONFIG).unwrap();
    let viewport = Size::new(1280.0, 800.0);
    let page = PageLayout::new(
        viewport,
        &[("about", 800.0), ("experience", 1200.0), ("projects", 900.0)],
    )
    .unwrap();
    let registry = page.registry().clone();
    let targets = page.targets();
    let host = Host {
        media: SimulatedMedia::new(6.0),
        pane: SmoothScrollPane::new(page.content_height(), page.pane_height()),
        probe: page,
    };
    let mut session = PageSession::mount(config, registry, viewport, host, targets).unwrap();
    info!(active = ?session.active_section(), "mounted");

    // Wheel scroll past the middle of experience.
    for offset in [200.0, 400.0, 600.0] {
        let offset = session.pane_mut().jump_to(offset);
        let _ = session.probe_mut().set_scroll(offset);
        let _ = session.dispatch(Signal::Scroll { offset });
    }
    info!(active = ?session.active_section(), "after wheel scroll");
    assert_eq!(session.active_section(), Some("experience"));

    // Menu click.
    session.navigate("projects").unwrap();
    animate(&mut session);
    let _ = session.advance_by(Duration::from_millis(500));
    info!(active = ?session.active_section(), offset = session.probe().scroll(), "after navigation");
    assert_eq!(session.active_section(), Some("projects"));

    // Hover the hotspot, watch a second of video, then jump into the pane.
    let hotspot = session.probe().hotspot_center();
    let elsewhere = session.probe().pane_point();
    pointer(&mut session, hotspot);
    let _ = session.media_mut().advance(Duration::from_secs(1));
    pointer(&mut session, elsewhere);
    let _ = session.advance_by(Duration::from_millis(1000));
    info!(overlay = ?session.overlay_state(), "after hover");

    // Narrow window.
    let _ = session.dispatch(Signal::Resize {
        width: 480.0,
        height: 800.0,
    });
    info!(follower = ?session.follower(), "after resize");

    session.unmount();
    println!("{session:?}");
}
