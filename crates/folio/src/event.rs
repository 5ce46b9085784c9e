//! Terminal input plus the two clocks, merged onto one channel by a
//! background task.

use std::time::Duration;

use crossterm::event::{
    Event as TermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// New terminal size as (cols, rows).
    Resize(u16, u16),
    /// Slow clock for the submit spinner.
    Tick,
    /// Frame clock; each one also advances scroll glides and reveals.
    Render,
}

/// Presses and auto-repeats, so holding `j` keeps scrolling.
fn accept_key(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

/// Clicks and the wheel. Motion and drags would only flood the loop.
fn accept_mouse(mouse: &MouseEvent) -> bool {
    matches!(
        mouse.kind,
        MouseEventKind::Down(_) | MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
    )
}

fn translate(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) if accept_key(&key) => Some(Event::Key(key)),
        TermEvent::Mouse(mouse) if accept_mouse(&mouse) => Some(Event::Mouse(mouse)),
        TermEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        _ => None,
    }
}

fn clock(period: Duration) -> Interval {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

/// Handle on the background reader. Dropping it stops the task.
pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventReader {
    pub fn new(tick_rate: Duration, render_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        tokio::spawn(pump(tx, cancel.clone(), tick_rate, render_rate));
        Self { rx, cancel }
    }

    /// `None` once the reader has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn pump(
    tx: mpsc::UnboundedSender<Event>,
    cancel: CancellationToken,
    tick_rate: Duration,
    render_rate: Duration,
) {
    let mut input = EventStream::new();
    let mut tick = clock(tick_rate);
    let mut frame = clock(render_rate);

    loop {
        let event = tokio::select! {
            () = cancel.cancelled() => break,
            _ = tick.tick() => Event::Tick,
            _ = frame.tick() => Event::Render,
            next = input.next() => match next {
                Some(Ok(raw)) => match translate(raw) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => {
                    debug!(error = %e, "terminal input error");
                    continue;
                }
                None => break,
            },
        };
        if tx.send(event).is_err() {
            break;
        }
    }
    trace!("event reader stopped");
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseButton};

    use super::*;

    fn mouse(kind: MouseEventKind) -> TermEvent {
        TermEvent::Mouse(MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keeps_presses_and_repeats_only() {
        let key = |kind| {
            TermEvent::Key(KeyEvent {
                code: KeyCode::Char('j'),
                modifiers: KeyModifiers::NONE,
                kind,
                state: KeyEventState::NONE,
            })
        };
        assert!(matches!(translate(key(KeyEventKind::Press)), Some(Event::Key(_))));
        assert!(matches!(translate(key(KeyEventKind::Repeat)), Some(Event::Key(_))));
        assert!(translate(key(KeyEventKind::Release)).is_none());
    }

    #[test]
    fn drops_pointer_motion() {
        assert!(translate(mouse(MouseEventKind::Moved)).is_none());
        assert!(translate(mouse(MouseEventKind::Drag(MouseButton::Left))).is_none());
        assert!(matches!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(Event::Mouse(_))
        ));
        assert!(matches!(
            translate(mouse(MouseEventKind::ScrollDown)),
            Some(Event::Mouse(_))
        ));
        assert!(matches!(translate(TermEvent::Resize(80, 24)), Some(Event::Resize(80, 24))));
        assert!(translate(TermEvent::FocusGained).is_none());
    }
}
