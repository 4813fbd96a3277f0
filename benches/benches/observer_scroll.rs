// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vitrine_interact::InteractionConfig;
use vitrine_interact::config::ObserverStrategy;
use vitrine_interact::observer::{ScrollFrame, SectionObserver};
use vitrine_interact::sections::{ActiveSection, Section, SectionRegistry};

const PANE: f64 = 800.0;

fn registry(n: usize) -> SectionRegistry {
    SectionRegistry::new((0..n).map(|i| {
        let h = 800.0 + (i % 3) as f64 * 300.0;
        let top = (0..i).map(|j| 800.0 + (j % 3) as f64 * 300.0).sum();
        Section::new(format!("section-{i}"), top, h)
    }))
    .unwrap()
}

fn bench_observer(c: &mut Criterion) {
    let mut group = c.benchmark_group("observer_scroll");
    let registry = registry(24);
    let end: f64 = registry.iter().map(Section::height).sum();
    let offsets: Vec<f64> = (0..200).map(|i| end * f64::from(i) / 200.0).collect();

    for strategy in [ObserverStrategy::VisibilityRatio, ObserverStrategy::ScrollPolling] {
        let config = InteractionConfig {
            observer: strategy,
            ..Default::default()
        };
        group.bench_function(format!("{strategy:?}_sweep200"), |b| {
            b.iter(|| {
                let mut observer = SectionObserver::new(&config, &registry);
                let mut active = ActiveSection::new(&registry);
                for &offset in &offsets {
                    let frame = ScrollFrame {
                        offset,
                        viewport_height: PANE,
                    };
                    black_box(observer.observe(&registry, frame, &mut active));
                }
                black_box(active.current().map(str::len))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_observer);
criterion_main!(benches);
