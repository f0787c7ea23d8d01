use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseButton, MouseEventKind};
use tracing::error;

use crate::catalog::CategoryLoad;
use crate::contact::{ContactData, Notification};

/// Everything the showcase loop reacts to, in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    /// Left mouse button pressed at a screen cell.
    Click { column: u16, row: u16 },
    Resize(u16, u16),
    Tick,
    /// Autoplay timer fired. Tagged with the timer generation so ticks from
    /// a torn-down timer are dropped.
    AutoAdvance { generation: u64 },
    CategoriesLoaded(Result<CategoryLoad, String>),
    ContactLoaded(ContactData),
    LeadSubmitted(Notification),
    NotificationExpired { token: u64 },
    /// The close delay after a sent lead elapsed.
    ContactCloseDue { token: u64 },
}

/// Reads terminal input on a background thread and emits render ticks.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            while !stop_flag.load(Ordering::Relaxed) {
                let timeout =
                    tick_rate.saturating_sub(last_tick.elapsed()).min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => Some(AppEvent::Input(key)),
                            Ok(Event::Mouse(mouse))
                                if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                            {
                                Some(AppEvent::Click {
                                    column: mouse.column,
                                    row: mouse.row,
                                })
                            }
                            Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                            Ok(_) => None,
                            Err(err) => {
                                error!(error = %err, "terminal read failed");
                                break;
                            }
                        };
                        if let Some(app_event) = forwarded {
                            if event_tx.send(app_event).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        error!(error = %err, "terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx, stop }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
