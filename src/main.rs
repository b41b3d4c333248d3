mod display;

use std::fs::OpenOptions;
use std::io::{self, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use fight_kokaton::assets::Assets;
use fight_kokaton::compute::{Flow, Game};
use fight_kokaton::consts::{CAPTION, END_SCREEN_DELAY, FRAME};
use fight_kokaton::input::{HeldKeys, InputEvent, InputSource, KeyTracker};

use display::TerminalCanvas;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw alternate-screen mode while playing, so log lines
/// go to a file: `$FIGHT_KOKATON_LOG`, else `~/.fight_kokaton.log`.
fn log_path() -> PathBuf {
    if let Some(path) = std::env::var_os("FIGHT_KOKATON_LOG") {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".fight_kokaton.log")
}

fn init_logging() {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(log_path()) else {
        return; // play on without a log
    };
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Non-blocking terminal input, polled once per tick on the game thread.
struct TerminalInput {
    keys: KeyTracker,
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                events.extend(self.keys.record(key));
            }
        }
        Ok(events)
    }

    fn held_keys(&self) -> HeldKeys {
        self.keys.held_keys()
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn run<W: Write>(out: W) -> io::Result<()> {
    let assets = Assets::load();
    let mut rng = thread_rng();
    let mut game = Game::new(&assets, &mut rng);
    let mut canvas = TerminalCanvas::new(out)?;
    let mut input = TerminalInput { keys: KeyTracker::new() };

    loop {
        let frame_start = Instant::now();
        input.keys.set_tick(game.frame);

        match game.tick(&mut input, &mut canvas)? {
            Flow::Continue => {}
            Flow::Quit => return Ok(()),
            Flow::Ended(_) => {
                // The end screen always stays up for the full delay.
                thread::sleep(END_SCREEN_DELAY);
                return Ok(());
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    init_logging();
    info!("{} starting", CAPTION);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(terminal::SetTitle(CAPTION))?;
    out.execute(cursor::Hide)?;

    // Release events make held arrows precise; without them keys expire
    // after a short hold window instead.
    let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    if !keyboard_enhanced {
        warn!("terminal reports no key releases; falling back to hold window");
    }

    let result = run(&mut out);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("terminated by I/O error: {e}");
    }
    result
}
