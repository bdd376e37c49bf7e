use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};

use side_scroller::assets::{Textures, ASSET_DIR};
use side_scroller::audio::{Audio, Sfx};
use side_scroller::compute::{init_state, tick};
use side_scroller::display::Renderer;
use side_scroller::error::Result;
use side_scroller::input::{InputSampler, Poll};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

// ── Logging ───────────────────────────────────────────────────────────────────

/// The game owns the terminal, so log lines go to a file in the temp dir.
/// `RUST_LOG` picks the level (default `info`).
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match File::create(std::env::temp_dir().join("side_scroller.log")) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Poll input → simulate → render, once per frame, until quit.
/// Returns the best score of the session.
fn game_loop<W: Write>(
    out: &mut W,
    sampler: &mut InputSampler,
    textures: &Textures,
    audio: &Audio,
) -> Result<u32> {
    let (cols, rows) = terminal::size()?;
    let mut renderer = Renderer::new(cols, rows);

    let clock = Instant::now();
    let mut state = init_state(0);

    loop {
        let frame_start = Instant::now();

        if sampler.poll(&mut state.ship.intents, state.frame)? == Poll::Quit {
            break;
        }
        if let Some((cols, rows)) = sampler.take_resize() {
            renderer.resize(cols, rows);
        }

        let now = clock.elapsed().as_millis() as u64;
        for event in tick(&mut state, now) {
            audio.play(Sfx::for_event(&event));
        }

        renderer.render(out, &state, textures)?;
        state.frame += 1;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }

    Ok(state.max_score)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    init_logging();
    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("side_scroller: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Everything that can fail on a bad install happens before the terminal
    // is taken over, so the error prints normally.
    let assets = Path::new(ASSET_DIR);
    let textures = Textures::load(assets)?;
    let audio = Audio::open(assets)?;

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    log::info!("key release events: {}", keyboard_enhanced);

    let mut sampler = InputSampler::new(keyboard_enhanced);
    let result = game_loop(&mut out, &mut sampler, &textures, &audio);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    drop(audio);
    drop(textures);
    log::info!("resources released");

    let best = result?;
    log::info!("session over, best score {}", best);
    Ok(())
}
