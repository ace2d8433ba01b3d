//! Caption scheduler demo: steps a synthetic timeline through a few slide
//! transitions and prints each caption as it appears and hides.
//!
//! Run with: `cargo run --example captions`

use fiesta::prelude::*;
use std::time::Duration;

fn main() {
    env_logger::init();

    let mut captions = CaptionScheduler::new(CaptionConfig::default()).with_seed(7);
    let total = 5;

    let mut now = Duration::ZERO;
    let mut was_visible = false;

    for slide in 0..total {
        captions.advance(slide, total, now);

        // 12 s per slide at 16 ms steps.
        for _ in 0..750 {
            now += Duration::from_millis(16);
            captions.update(now);

            if captions.is_visible() != was_visible {
                was_visible = captions.is_visible();
                if was_visible {
                    println!(
                        "[{:>6.2}s] slide {slide}: \"{}\"",
                        now.as_secs_f32(),
                        captions.current_phrase().unwrap_or_default()
                    );
                } else {
                    println!("[{:>6.2}s] (hidden)", now.as_secs_f32());
                }
            }
        }
    }

    println!("phrases shown: {}", captions.used_count());
}
