//! Folio FX entry point
//!
//! On the web this wires the page behaviors; natively it prints a preview
//! of the typewriter and counter timelines.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    folio_fx::web::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Folio FX (native) starting...");
    log::info!("Native mode only previews timelines - build for wasm32 to wire a page");

    let config = folio_fx::SiteConfig::load();
    preview_typewriter(&config);
    preview_counter(150, "+");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Print every role once against a simulated clock
#[cfg(not(target_arch = "wasm32"))]
fn preview_typewriter(config: &folio_fx::SiteConfig) {
    use folio_fx::fx::{Phase, Typewriter};

    let Some(mut writer) = Typewriter::new(&config.roles, config.typewriter) else {
        println!("No roles configured");
        return;
    };

    println!("\nTypewriter timeline:");
    let mut clock = writer.start_delay_ms() as u64;
    let last_role = config.roles.len() - 1;
    loop {
        let frame = writer.tick();
        if let Some(text) = frame.text {
            println!("{:>7}ms  {:?}  |{}", clock, writer.phase(), text);
        }
        clock += frame.delay_ms as u64;
        if writer.phase() == Phase::Advancing && writer.role_index() == last_role {
            break;
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn preview_counter(target: i64, suffix: &str) {
    use folio_fx::consts::COUNTER_FRAME_MS;
    use folio_fx::fx::CounterAnimation;

    println!("\nCounter to {}{}:", target, suffix);
    let mut counter = CounterAnimation::new(target, suffix);
    let mut frames = 0;
    loop {
        let frame = counter.advance();
        frames += 1;
        if frame.done || frames % 25 == 0 {
            println!("{:>7.0}ms  {}", frames as f64 * COUNTER_FRAME_MS, frame.text);
        }
        if frame.done {
            break;
        }
    }
}
