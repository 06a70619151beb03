//! The main UI loop: draw, dispatch events, tear down.

use std::sync::mpsc;
use std::time::Duration;

use crate::api::ApiClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::controller::RosterController;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    // The fetch starts here, before the first draw; the initial frame
    // already shows the loading state.
    let controller = {
        let _guard = runtime.enter();
        RosterController::spawn(ApiClient::new(&config.api))
    };

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.terminal.tick_rate_ms);
    let mut app = App::new(controller.subscribe());
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    drop(controller);
    runtime.shutdown_timeout(Duration::from_millis(200));
    Ok(())
}
