//! Full slideshow demo: slides, particles, and captions driven together by
//! the frame clock.
//!
//! Run with: `cargo run --example slideshow`

use fiesta::prelude::*;
use std::time::Duration;

fn main() {
    env_logger::init();

    let mut show = Slideshow::new(8)
        .expect("non-empty slideshow")
        .with_interval(Duration::from_secs(3))
        .with_palette(Palette::Golden)
        .with_captions(CaptionConfig::default())
        .with_seed(1234);

    let mut clock = Clock::new();
    clock.set_fixed_delta(Some(0.016));

    let mut last_slide = show.current_index();
    let mut last_caption: Option<&str> = None;

    // Two full loops through the slide set.
    for _ in 0..3000 {
        clock.update();
        show.tick(Duration::from_secs_f32(clock.delta()));

        if show.current_index() != last_slide {
            last_slide = show.current_index();
            println!(
                "[{:>6.2}s] slide {}/{} ({} confetti in flight)",
                clock.elapsed_secs(),
                last_slide + 1,
                show.slide_count(),
                show.effects().confetti().len()
            );
        }

        if show.caption() != last_caption {
            last_caption = show.caption();
            if let Some(text) = last_caption {
                println!("[{:>6.2}s]   \"{text}\"", clock.elapsed_secs());
            }
        }
    }
}
