use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::api::ApiClient;
use crate::carousel::Autoplay;
use crate::catalog::CategorySource;
use crate::config::CarouselConfig;
use crate::contact::{submit_lead, ContactData, CLOSE_AFTER_SENT, NOTIFICATION_TTL};
use crate::mvi::expire_after;
use crate::theme::ThemeProvider;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Everything `browse` needs to run the showcase.
pub struct Showcase {
    pub source: CategorySource,
    pub client: ApiClient,
    pub theme: ThemeProvider,
    pub carousel: CarouselConfig,
    pub fallback_on_error: bool,
}

/// Runs the terminal showcase on the calling thread until the user quits.
///
/// Network calls and timers are spawned on `runtime`; they only ever send
/// [`AppEvent`]s back to this loop.
pub fn run(showcase: Showcase, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(showcase.theme.clone(), showcase.carousel.autoplay);
    let mut theme_changes = showcase.theme.subscribe();
    let (command_tx, command_rx) = mpsc::channel(16);
    app.attach_commands(command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    spawn_loader(
        &runtime,
        showcase.source,
        showcase.fallback_on_error,
        events.sender(),
    );
    let worker = runtime.spawn(command_worker(showcase.client, command_rx, events.sender()));
    let mut autoplay = Autoplay::new(
        runtime.clone(),
        Duration::from_millis(showcase.carousel.autoplay_interval_ms),
    );
    info!("showcase started");

    loop {
        let tick_tx = events.sender();
        autoplay.sync(app.carousel().autoplay_deps(), move |generation| {
            let _ = tick_tx.send(AppEvent::AutoAdvance { generation });
        });
        if let Some(token) = app.take_pending_expiry() {
            let expiry_tx = events.sender();
            expire_after(&runtime, NOTIFICATION_TTL, token, move |token| {
                let _ = expiry_tx.send(AppEvent::NotificationExpired { token });
            });
        }
        if let Some(token) = app.take_pending_close() {
            let close_tx = events.sender();
            expire_after(&runtime, CLOSE_AFTER_SENT, token, move |token| {
                let _ = close_tx.send(AppEvent::ContactCloseDue { token });
            });
        }

        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Click { column, row }) => app.on_click(column, row),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::AutoAdvance { generation }) => {
                if generation == autoplay.generation() && autoplay.is_running() {
                    app.auto_advance();
                }
            }
            Ok(AppEvent::CategoriesLoaded(result)) => app.on_categories_loaded(result),
            Ok(AppEvent::ContactLoaded(data)) => app.on_contact_loaded(data),
            Ok(AppEvent::LeadSubmitted(notification)) => app.on_lead_submitted(notification),
            Ok(AppEvent::NotificationExpired { token }) => app.on_notification_expired(token),
            Ok(AppEvent::ContactCloseDue { token }) => app.on_contact_close_due(token),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if let Some(theme) = theme_changes.poll_change() {
            app.on_theme_changed(theme);
        }
    }

    autoplay.stop();
    worker.abort();
    drop(guard);
    info!("showcase stopped");
    Ok(())
}

fn spawn_loader(
    runtime: &Handle,
    source: CategorySource,
    fallback_on_error: bool,
    events: Sender<AppEvent>,
) {
    runtime.spawn(async move {
        let result = source
            .load(fallback_on_error)
            .await
            .map_err(|err| err.to_string());
        let _ = events.send(AppEvent::CategoriesLoaded(result));
    });
}

async fn command_worker(
    client: ApiClient,
    mut commands: mpsc::Receiver<UiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let event = match command {
            UiCommand::LoadContact => {
                let data = client.fetch_contact().await.unwrap_or_else(|err| {
                    error!(error = %err, "Error fetching contact info");
                    ContactData::default()
                });
                AppEvent::ContactLoaded(data)
            }
            UiCommand::SubmitLead(mut form) => {
                AppEvent::LeadSubmitted(submit_lead(&client, &mut form).await)
            }
        };
        if events.send(event).is_err() {
            break;
        }
    }
}
