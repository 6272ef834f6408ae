use rollo_animation::TuningProfile;
use rollo_app_shell::{Carousel, CarouselEvent, FrameParams};
use rollo_core::{LatestReadback, MonotonicClock, SystemClock};
use rollo_foundation::GridLayout;
use std::thread;
use std::time::Duration;

const FRAME_MS: u64 = 16;
/// Frames to run after the last scripted step before giving up.
const MAX_IDLE_WAIT: usize = 2_000;

/// One scripted step: events to deliver, then frames until the loop idles.
struct Step {
    label: &'static str,
    events: Vec<CarouselEvent>,
}

fn script() -> Vec<Step> {
    let mut drag = vec![CarouselEvent::Touch { x: 0.8, down: true }];
    drag.extend((1..=6).map(|i| CarouselEvent::Touch {
        x: 0.8 - i as f32 * 0.05,
        down: true,
    }));

    vec![
        Step {
            label: "open",
            events: vec![
                CarouselEvent::SetViewport {
                    width: 480.0,
                    height: 800.0,
                },
                CarouselEvent::SetIconCount(70),
                CarouselEvent::SetZoom {
                    target: 1.0,
                    animate: true,
                },
            ],
        },
        Step {
            label: "drag and release",
            events: drag
                .into_iter()
                .chain([CarouselEvent::Touch { x: 0.5, down: false }])
                .collect(),
        },
        Step {
            label: "fling",
            events: vec![
                CarouselEvent::Touch { x: 0.5, down: true },
                CarouselEvent::Fling { velocity: -3.0 },
            ],
        },
        Step {
            label: "move to first page",
            events: vec![CarouselEvent::MoveTo { page: 0.0 }],
        },
        Step {
            label: "rotate",
            events: vec![CarouselEvent::SetViewport {
                width: 800.0,
                height: 480.0,
            }],
        },
        Step {
            label: "close",
            events: vec![CarouselEvent::SetZoom {
                target: 0.0,
                animate: true,
            }],
        },
    ]
}

fn profile_from_args() -> TuningProfile {
    match std::env::args().nth(1).as_deref() {
        Some("all-apps") => TuningProfile::all_apps(),
        Some("rollo") | None => TuningProfile::rollo(),
        Some(other) => {
            log::warn!("unknown profile '{other}', using rollo");
            TuningProfile::rollo()
        }
    }
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let readback = LatestReadback::new();
    let carousel = Carousel::new(profile_from_args(), GridLayout::default(), readback.clone());
    let mut carousel = match carousel {
        Ok(carousel) => carousel,
        Err(err) => {
            log::error!("invalid carousel configuration: {err}");
            std::process::exit(1);
        }
    };

    let clock = SystemClock::new();
    let mut frame_index = 0u64;
    let mut renderer = |params: &FrameParams| {
        log::debug!(
            "draw page={:.3} zoom={:.3} grid={}x{} pages={}{}",
            params.page,
            params.zoom,
            params.grid.columns,
            params.grid.rows,
            params.page_count,
            if params.warm_up { " (warm-up)" } else { "" }
        );
    };

    for step in script() {
        log::info!("--- {} ---", step.label);
        for event in step.events {
            carousel.handle(event);
        }

        let mut frames = 0;
        while frames < MAX_IDLE_WAIT {
            let keep_running = carousel.frame(clock.now_millis(), &mut renderer);
            frame_index += 1;
            frames += 1;
            if let Some(snapshot) = readback.take() {
                log::info!(
                    "frame {frame_index}: page={:.3} velocity={:.3} zoom={:.3} fixed={:?}",
                    snapshot.page,
                    snapshot.velocity,
                    snapshot.zoom,
                    snapshot.to_fixed()
                );
            }
            if !keep_running {
                break;
            }
            thread::sleep(Duration::from_millis(FRAME_MS));
        }
        if frames == MAX_IDLE_WAIT {
            log::warn!("'{}' still moving after {frames} frames", step.label);
        }

        let position = carousel.position();
        log::info!(
            "'{}' settled after {frames} frames on page {} of {}",
            step.label,
            position.page,
            position.page_count
        );
    }
}
