use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::carousel::{Activation, CarouselIntent, CarouselReducer, CarouselState, Slot};
use crate::catalog::{CategoryItem, CategoryLoad, LoadOrigin, Route};
use crate::contact::{ContactData, LeadField, LeadForm, Notification, NotificationSlot};
use crate::mvi::{Reducer, Timed};
use crate::theme::{Theme, ThemeProvider};
use crate::ui::layout::card_slot_at;
use crate::ui::theme::{palette, Palette};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Carousel,
    Contact,
}

/// Work the loop hands to the async side.
#[derive(Debug)]
pub enum UiCommand {
    LoadContact,
    SubmitLead(LeadForm),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Contact modal: business info plus the lead form.
#[derive(Debug, Default)]
pub struct ContactModal {
    data: Option<ContactData>,
    form: LeadForm,
    field: Option<LeadField>,
    submitting: bool,
    notification: NotificationSlot,
    /// Armed after a successful send; the modal closes when it expires.
    auto_close: Timed<()>,
}

impl ContactModal {
    /// Business info, or the built-in defaults until the fetch lands.
    pub fn data(&self) -> ContactData {
        self.data.clone().unwrap_or_default()
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn field(&self) -> LeadField {
        self.field.unwrap_or(LeadField::Name)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.current()
    }
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    /// Carousel position (MVI pattern).
    carousel: CarouselState<CategoryItem>,
    loading: bool,
    origin: Option<LoadOrigin>,
    load_error: Option<String>,
    route: Option<Route>,
    theme: ThemeProvider,
    palette: Palette,
    contact: ContactModal,
    commands: Option<UiCommandSender>,
    pending_expiry: Option<u64>,
    pending_close: Option<u64>,
}

impl App {
    pub fn new(theme: ThemeProvider, autoplay: bool) -> Self {
        let carousel = if autoplay {
            CarouselState::default()
        } else {
            CarouselState::without_autoplay(Vec::new())
        };
        Self {
            should_quit: false,
            focus: Focus::Carousel,
            size: None,
            carousel,
            loading: true,
            origin: None,
            load_error: None,
            route: None,
            palette: palette(theme.current()),
            theme,
            contact: ContactModal::default(),
            commands: None,
            pending_expiry: None,
            pending_close: None,
        }
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn carousel(&self) -> &CarouselState<CategoryItem> {
        &self.carousel
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn origin(&self) -> Option<LoadOrigin> {
        self.origin
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn contact(&self) -> &ContactModal {
        &self.contact
    }

    fn dispatch_carousel(&mut self, intent: CarouselIntent<CategoryItem>) {
        dispatch_mvi!(self, carousel, CarouselReducer<CategoryItem>, intent);
    }

    // ========================================================================
    // Carousel
    // ========================================================================

    pub fn on_categories_loaded(&mut self, result: Result<CategoryLoad, String>) {
        self.loading = false;
        match result {
            Ok(load) => {
                debug!(count = load.items.len(), origin = ?load.origin, "categories loaded");
                self.origin = Some(load.origin);
                self.load_error = None;
                self.dispatch_carousel(CarouselIntent::ReplaceItems { items: load.items });
            }
            Err(message) => {
                warn!(%message, "categories unavailable");
                self.load_error = Some(message);
            }
        }
    }

    /// Manual prev/next.
    pub fn navigate(&mut self, delta: i64) {
        self.dispatch_carousel(CarouselIntent::Navigate { delta });
    }

    /// Jump to a dot.
    pub fn select(&mut self, index: i64) {
        self.dispatch_carousel(CarouselIntent::Select { index });
    }

    pub fn auto_advance(&mut self) {
        self.dispatch_carousel(CarouselIntent::AutoAdvance);
    }

    /// Enter on the carousel: open the centered category.
    pub fn activate_center(&mut self) {
        self.activate(Slot::Center);
    }

    /// The centered card opens its category; a side card steps towards it.
    pub fn activate(&mut self, slot: Slot) {
        match self.carousel.activate(slot) {
            Some(Activation::Open { id }) => self.route = Some(Route::CategoryDetail { id }),
            Some(Activation::Step { delta }) => {
                self.dispatch_carousel(CarouselIntent::SideCard { delta })
            }
            None => {}
        }
    }

    /// Left click at a screen cell. Only cards react, and only while the
    /// carousel has focus.
    pub fn on_click(&mut self, column: u16, row: u16) {
        if self.focus != Focus::Carousel {
            return;
        }
        let Some((cols, rows)) = self.size else {
            return;
        };
        if let Some(slot) = card_slot_at(Rect::new(0, 0, cols, rows), column, row) {
            self.activate(slot);
        }
    }

    pub fn view_all(&mut self) {
        self.route = Some(Route::AllCategories);
    }

    // ========================================================================
    // Theme
    // ========================================================================

    pub fn toggle_theme(&mut self) {
        let theme = self.theme.toggle();
        self.on_theme_changed(theme);
    }

    pub fn on_theme_changed(&mut self, theme: Theme) {
        self.palette = palette(theme);
    }

    // ========================================================================
    // Contact modal
    // ========================================================================

    pub fn open_contact(&mut self) {
        self.focus = Focus::Contact;
        self.contact.auto_close.clear();
        if !self.contact.is_loaded() {
            self.send_command(UiCommand::LoadContact);
        }
    }

    pub fn close_contact(&mut self) {
        self.focus = Focus::Carousel;
        self.contact.auto_close.clear();
    }

    pub fn on_contact_loaded(&mut self, data: ContactData) {
        self.contact.data = Some(data);
    }

    pub fn contact_next_field(&mut self) {
        self.contact.field = Some(self.contact.field().next());
    }

    pub fn contact_input(&mut self, ch: char) {
        if self.contact.submitting {
            return;
        }
        let field = self.contact.field();
        self.contact.form.field_mut(field).push(ch);
    }

    pub fn contact_backspace(&mut self) {
        if self.contact.submitting {
            return;
        }
        let field = self.contact.field();
        self.contact.form.field_mut(field).pop();
    }

    /// Validates locally and hands the form to the async side.
    pub fn submit_lead(&mut self) {
        if self.contact.submitting {
            return;
        }
        if let Err(err) = self.contact.form.validate() {
            self.show_notification(Notification::error(err.to_string()));
            return;
        }
        self.contact.notification.clear();
        self.contact.submitting = true;
        self.send_command(UiCommand::SubmitLead(self.contact.form.clone()));
    }

    pub fn on_lead_submitted(&mut self, notification: Notification) {
        self.contact.submitting = false;
        if notification.is_success() {
            self.contact.form.clear();
            self.contact.field = None;
            if self.focus == Focus::Contact {
                self.pending_close = Some(self.contact.auto_close.show(()));
            }
        }
        self.show_notification(notification);
    }

    /// Closes the modal if `token` is the latest successful send and the
    /// modal was not closed or reopened in between.
    pub fn on_contact_close_due(&mut self, token: u64) {
        if self.contact.auto_close.expire(token) && self.focus == Focus::Contact {
            debug!("closing contact modal after send");
            self.close_contact();
        }
    }

    /// Token of a successful send whose close timer still has to start.
    pub fn take_pending_close(&mut self) -> Option<u64> {
        self.pending_close.take()
    }

    pub fn on_notification_expired(&mut self, token: u64) {
        self.contact.notification.expire(token);
    }

    /// Token of a notification that still needs an expiry timer.
    pub fn take_pending_expiry(&mut self) -> Option<u64> {
        self.pending_expiry.take()
    }

    fn show_notification(&mut self, notification: Notification) {
        let token = self.contact.notification.show(notification);
        self.pending_expiry = Some(token);
    }

    fn send_command(&mut self, command: UiCommand) {
        let Some(sender) = &self.commands else {
            return;
        };
        if let Err(err) = sender.try_send(command) {
            warn!(error = %err, "ui command dropped");
            if let mpsc::error::TrySendError::Full(UiCommand::SubmitLead(_))
            | mpsc::error::TrySendError::Closed(UiCommand::SubmitLead(_)) = err
            {
                self.contact.submitting = false;
            }
        }
    }
}
