use crate::counter::{clamp_step, counter_value, step_size, CounterAction, CounterReducer};
use crate::store::{Dispatcher, Selected, StoreContext};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Counter,
    Step,
}

/// UI-side state of the counter demo.
///
/// Store-derived values come in through two `Selected` bindings; local
/// chrome (focus, quit flag) lives here. Key handling only dispatches;
/// the displayed values always come back out of the store.
pub struct App {
    dispatcher: Dispatcher<CounterReducer>,
    counter: Selected<i64>,
    step: Selected<i64>,
    focus: Focus,
    should_quit: bool,
    ui_dirty: bool,
}

impl App {
    pub fn new(ctx: &StoreContext<CounterReducer>) -> Self {
        Self {
            dispatcher: ctx.dispatcher(),
            counter: ctx.select(counter_value),
            step: ctx.select(step_size),
            focus: Focus::Counter,
            should_quit: false,
            ui_dirty: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.ui_dirty = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn counter(&self) -> i64 {
        self.counter.get()
    }

    pub fn step(&self) -> i64 {
        self.step.get()
    }

    /// True when anything visible changed since the last call: a bound
    /// store slice went dirty, or local chrome changed.
    pub fn take_dirty(&mut self) -> bool {
        let counter = self.counter.take_dirty();
        let step = self.step.take_dirty();
        let local = std::mem::take(&mut self.ui_dirty);
        counter || step || local
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Tab => self.toggle_focus(),
            _ => match self.focus {
                Focus::Counter => self.on_counter_key(key.code),
                Focus::Step => self.on_step_key(key.code),
            },
        }
    }

    pub fn on_tick(&mut self) {}

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Counter => Focus::Step,
            Focus::Step => Focus::Counter,
        };
        self.ui_dirty = true;
    }

    fn on_counter_key(&mut self, code: KeyCode) {
        let delta = match code {
            KeyCode::Char('+') | KeyCode::Up => self.step.get(),
            KeyCode::Char('-') | KeyCode::Down => -self.step.get(),
            _ => return,
        };
        self.dispatcher
            .dispatch(CounterAction::UpdateCounter { delta });
    }

    fn on_step_key(&mut self, code: KeyCode) {
        let current = self.step.get();
        let step = match code {
            KeyCode::Right | KeyCode::Up => clamp_step(current + 1),
            KeyCode::Left | KeyCode::Down => clamp_step(current - 1),
            _ => return,
        };
        if step != current {
            self.dispatcher
                .dispatch(CounterAction::ChangeStepSize { step });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterState;
    use crate::store::Store;
    use crossterm::event::KeyModifiers;

    fn app() -> (StoreContext<CounterReducer>, App) {
        let ctx = StoreContext::new(Store::<CounterReducer>::new(CounterState::default()));
        let app = App::new(&ctx);
        (ctx, app)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn plus_key_adds_the_current_step() {
        let (ctx, mut app) = app();
        ctx.dispatcher()
            .dispatch(CounterAction::ChangeStepSize { step: 3 });

        app.on_key(press(KeyCode::Char('+')));
        assert_eq!(ctx.store().state().counter, 4);
        assert_eq!(app.counter(), 4);
    }

    #[test]
    fn minus_key_subtracts_the_current_step() {
        let (ctx, mut app) = app();
        app.on_key(press(KeyCode::Char('-')));
        assert_eq!(ctx.store().state().counter, 0);
    }

    #[test]
    fn step_keys_only_work_with_step_focus() {
        let (ctx, mut app) = app();

        // Counter focus: Right is not a counter key, nothing happens.
        app.on_key(press(KeyCode::Right));
        assert_eq!(ctx.store().state().step_size, 1);

        app.on_key(press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Step);
        app.on_key(press(KeyCode::Right));
        assert_eq!(ctx.store().state().step_size, 2);
    }

    #[test]
    fn step_stops_at_the_control_bounds() {
        let (ctx, mut app) = app();
        app.on_key(press(KeyCode::Tab));

        app.on_key(press(KeyCode::Left));
        assert_eq!(ctx.store().state().step_size, 1);

        for _ in 0..10 {
            app.on_key(press(KeyCode::Right));
        }
        assert_eq!(ctx.store().state().step_size, 5);
    }

    #[test]
    fn q_requests_quit() {
        let (_ctx, mut app) = app();
        app.on_key(press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let (ctx, mut app) = app();
        let mut key = press(KeyCode::Char('+'));
        key.kind = KeyEventKind::Release;
        app.on_key(key);
        assert_eq!(ctx.store().state().counter, 1);
    }

    #[test]
    fn dirty_tracks_store_changes_and_focus() {
        let (_ctx, mut app) = app();
        assert!(!app.take_dirty());

        app.on_key(press(KeyCode::Char('+')));
        assert!(app.take_dirty());
        assert!(!app.take_dirty());

        app.on_key(press(KeyCode::Tab));
        assert!(app.take_dirty());
    }

    #[test]
    fn counter_key_with_step_focus_is_ignored() {
        let (ctx, mut app) = app();
        app.on_key(press(KeyCode::Tab));
        app.on_key(press(KeyCode::Char('+')));
        assert_eq!(ctx.store().state().counter, 1);
    }
}
