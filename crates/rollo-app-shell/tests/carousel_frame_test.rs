use rollo_animation::TuningProfile;
use rollo_app_shell::{Carousel, CarouselEvent, FrameParams, HeadlessRenderer};
use rollo_core::{LatestReadback, ManualClock, MonotonicClock, ReadbackSnapshot};
use rollo_foundation::GridLayout;

fn open_carousel(icons: usize) -> (Carousel<LatestReadback>, LatestReadback) {
    let readback = LatestReadback::new();
    let mut carousel =
        Carousel::new(TuningProfile::rollo(), GridLayout::default(), readback.clone())
            .expect("valid config");
    carousel.handle(CarouselEvent::SetIconCount(icons));
    carousel.set_zoom(1.0, false);
    (carousel, readback)
}

#[test]
fn hard_fling_settles_within_three_seconds() {
    let clock = ManualClock::new(0);
    let (mut carousel, readback) = open_carousel(48);
    let mut renderer = HeadlessRenderer::new();
    carousel.frame(clock.now_millis(), &mut renderer);
    assert_eq!(carousel.position().page_count, 3);

    carousel.handle(CarouselEvent::Touch { x: 0.5, down: true });
    carousel.handle(CarouselEvent::Fling { velocity: -300.0 });
    for _ in 0..30 {
        clock.advance(100);
        carousel.frame(clock.now_millis(), &mut renderer);
        let page = carousel.position().page;
        assert!((-0.5..=2.5).contains(&page), "page {page} out of range");
    }

    let snapshot = readback.take().expect("position was reported");
    assert_eq!(snapshot.page.fract(), 0.0);
    assert!(snapshot.page > 0.0 && snapshot.page <= 2.0);
    assert_eq!(snapshot.velocity, 0.0);
    assert_eq!(snapshot.zoom, 1.0);
}

#[test]
fn readback_decodes_from_the_fixed_point_packet() {
    let clock = ManualClock::new(1_000);
    let (mut carousel, readback) = open_carousel(48);
    let mut renderer = HeadlessRenderer::new();
    carousel.frame(clock.now_millis(), &mut renderer);

    carousel.handle(CarouselEvent::MoveTo { page: 2.0 });
    while carousel.frame(clock.now_millis(), &mut renderer) {
        clock.advance(16);
    }

    let packet = readback.take().expect("position was reported").to_fixed();
    assert_eq!(packet, [2 << 16, 0, 1 << 16]);
    assert_eq!(
        ReadbackSnapshot::from_fixed(packet),
        ReadbackSnapshot::new(2.0, 0.0, 1.0)
    );
}

#[test]
fn closure_renderer_sees_every_drawn_frame() {
    let clock = ManualClock::new(0);
    let (mut carousel, _readback) = open_carousel(48);
    let mut pages = Vec::new();
    let mut renderer = |params: &FrameParams| pages.push(params.page);

    carousel.handle(CarouselEvent::MoveTo { page: 1.0 });
    while carousel.frame(clock.now_millis(), &mut renderer) {
        clock.advance(16);
    }

    assert!(pages.len() > 2);
    assert!(pages.windows(2).all(|pair| pair[1] >= pair[0]));
    assert_eq!(pages.last().copied(), Some(1.0));
}
