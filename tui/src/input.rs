//! Input handling for the tally TUI.
//!
//! A blocking thread pumps crossterm events into a bounded channel; the
//! frame loop drains it without blocking. Activation events (Space, Enter,
//! left click on the button) increment the counter.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use tally_engine::App;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Background reader of terminal events.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = Arc::clone(&stop);

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the reader thread unblocks if it is
        // backpressured on a send.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break; // receiver closed
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued terminal events without blocking the frame loop.
///
/// Returns true when the user asked to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        match input.rx.try_recv() {
            Ok(InputMsg::Event(event)) => apply_event(app, &event),
            Ok(InputMsg::Error(e)) => return Err(anyhow!("input thread failed: {e}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input thread stopped unexpectedly"));
            }
        }
    }
    Ok(app.should_quit())
}

/// Apply a single terminal event to the application state.
///
/// Runs to completion on the UI task before the next event is processed, so
/// increments cannot race.
pub fn apply_event(app: &mut App, event: &Event) {
    match event {
        Event::Key(key) => apply_key(app, key),
        Event::Mouse(mouse) => apply_mouse(app, mouse),
        Event::Resize(_, _) => app.schedule_redraw(),
        _ => {}
    }
}

fn apply_key(app: &mut App, key: &KeyEvent) {
    // Press only: repeats and releases are not activation events.
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char(' ') | KeyCode::Enter => app.activate(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn apply_mouse(app: &mut App, mouse: &MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(area) = app.view().button_area else {
        return;
    };
    if area.contains(mouse.column, mouse.row) {
        app.activate();
    } else {
        debug!(column = mouse.column, row = mouse.row, "click outside button");
    }
}

#[cfg(test)]
mod tests {
    use super::apply_event;
    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };
    use tally_engine::{App, ButtonArea, UiOptions};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn left_click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn app_with_button() -> App {
        let mut app = App::new(UiOptions::default());
        app.view_mut().button_area = Some(ButtonArea {
            x: 20,
            y: 4,
            width: 16,
            height: 3,
        });
        app
    }

    #[test]
    fn space_and_enter_activate() {
        let mut app = App::new(UiOptions::default());
        apply_event(&mut app, &key(KeyCode::Char(' ')));
        apply_event(&mut app, &key(KeyCode::Enter));
        assert_eq!(app.count(), 2);
    }

    #[test]
    fn key_release_is_not_an_activation() {
        let mut app = App::new(UiOptions::default());
        let mut release = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        apply_event(&mut app, &Event::Key(release));
        assert_eq!(app.count(), 0);
    }

    #[test]
    fn quit_keys_do_not_touch_the_counter() {
        let mut app = App::new(UiOptions::default());
        apply_event(&mut app, &key(KeyCode::Char('q')));
        assert!(app.should_quit());
        assert_eq!(app.count(), 0);

        let mut app = App::new(UiOptions::default());
        apply_event(
            &mut app,
            &Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn click_inside_button_activates() {
        let mut app = app_with_button();
        apply_event(&mut app, &left_click(27, 5));
        assert_eq!(app.count(), 1);
    }

    #[test]
    fn click_outside_button_is_ignored() {
        let mut app = app_with_button();
        apply_event(&mut app, &left_click(0, 0));
        apply_event(&mut app, &left_click(36, 5));
        assert_eq!(app.count(), 0);
    }

    #[test]
    fn click_before_first_frame_is_ignored() {
        let mut app = App::new(UiOptions::default());
        apply_event(&mut app, &left_click(10, 10));
        assert_eq!(app.count(), 0);
    }

    #[test]
    fn resize_schedules_redraw() {
        let app_event = Event::Resize(80, 24);
        let mut app = App::new(UiOptions::default());
        app.take_redraw();
        apply_event(&mut app, &app_event);
        assert!(app.take_redraw());
    }
}
