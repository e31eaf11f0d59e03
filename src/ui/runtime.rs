use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::counter::CounterReducer;
use crate::store::StoreContext;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(ctx: &StoreContext<CounterReducer>, tick_rate: Duration) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(ctx);
    let events = EventHandler::new(tick_rate);
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|frame| draw(frame, &app))?;
            needs_redraw = false;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => needs_redraw = true,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        // Redraw only when a bound slice changed or chrome moved;
        // dispatches that leave the derived values untouched skip the
        // draw entirely.
        needs_redraw = needs_redraw || app.take_dirty();
    }

    drop(guard);
    Ok(())
}
