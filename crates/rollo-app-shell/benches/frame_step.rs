use rollo_animation::prelude::*;
use rollo_app_shell::{Carousel, CarouselEvent, HeadlessRenderer};
use rollo_core::LatestReadback;
use rollo_foundation::GridLayout;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const FRAME_MS: u64 = 16;
const FRAME_DT: f32 = 0.016;
const PAGE_COUNT_SAMPLES: &[usize] = &[3, 64];
const FLING_FRAMES: usize = 240;

fn open_carousel(icons: usize) -> Carousel<LatestReadback> {
    let mut carousel = Carousel::new(
        TuningProfile::rollo(),
        GridLayout::default(),
        LatestReadback::new(),
    )
    .expect("valid config");
    carousel.handle(CarouselEvent::SetIconCount(icons));
    carousel.set_zoom(1.0, false);
    carousel
}

fn bench_position_fling(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_fling");
    for &page_count in PAGE_COUNT_SAMPLES {
        group.bench_with_input(
            BenchmarkId::new("pages", page_count),
            &page_count,
            |b, &page_count| {
                b.iter(|| {
                    let mut integrator = PositionIntegrator::new(TuningProfile::rollo(), page_count)
                        .expect("valid profile");
                    integrator.apply(PositionInput::Fling(-40.0));
                    for _ in 0..FLING_FRAMES {
                        integrator.step(FRAME_DT);
                    }
                    black_box(integrator.page());
                });
            },
        );
    }
    group.finish();
}

fn bench_carousel_frame(c: &mut Criterion) {
    let mut carousel = open_carousel(1024);
    let mut renderer = HeadlessRenderer::new();
    let mut now = 0;

    c.bench_function("carousel_frame", |b| {
        b.iter(|| {
            // Keep the carousel moving so every frame runs the full step.
            if !carousel.needs_frame() {
                carousel.handle(CarouselEvent::Fling { velocity: -20.0 });
            }
            now += FRAME_MS;
            black_box(carousel.frame(now, &mut renderer));
        });
    });
}

criterion_group!(benches, bench_position_fling, bench_carousel_frame);
criterion_main!(benches);
