//! Input and tick events for the UI loop.

use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent};

/// Events consumed by the main loop.
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Background input thread feeding an mpsc channel.
///
/// Polls crossterm with a short timeout so ticks keep flowing while the
/// keyboard is idle.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match crossterm::event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match crossterm::event::read() {
                            Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)).is_ok(),
                            Ok(Event::Resize(cols, rows)) => {
                                tx.send(AppEvent::Resize(cols, rows)).is_ok()
                            }
                            Ok(_) => true,
                            Err(_) => false,
                        };
                        if !forwarded {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
