//! Display mode shared by every view.
//!
//! One [`ThemeProvider`] is created from config and handed to whoever needs
//! it. Views that must react to changes made elsewhere hold a
//! [`ThemeSubscription`]; everybody else just reads [`ThemeProvider::current`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{other}' (expected dark or light)")),
        }
    }
}

/// Single source of truth for the active theme.
#[derive(Clone)]
pub struct ThemeProvider {
    tx: Arc<watch::Sender<Theme>>,
}

impl ThemeProvider {
    pub fn new(initial: Theme) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> Theme {
        *self.tx.borrow()
    }

    /// Sets the theme. Subscribers are only woken by an actual change.
    pub fn set(&self, theme: Theme) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == theme {
                return false;
            }
            *current = theme;
            true
        });
        if changed {
            debug!(%theme, "theme changed");
        }
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    pub fn subscribe(&self) -> ThemeSubscription {
        ThemeSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

/// Receiving side for views that live outside the provider's owner.
pub struct ThemeSubscription {
    rx: watch::Receiver<Theme>,
}

impl ThemeSubscription {
    pub fn current(&self) -> Theme {
        *self.rx.borrow()
    }

    /// Returns the new theme if it changed since the last call.
    pub fn poll_change(&mut self) -> Option<Theme> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays() {
        assert_eq!("Light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(" dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert!("blue".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn toggle_flips_and_notifies() {
        let provider = ThemeProvider::new(Theme::Dark);
        let mut sub = provider.subscribe();
        assert_eq!(sub.poll_change(), None);

        assert_eq!(provider.toggle(), Theme::Light);
        assert_eq!(provider.current(), Theme::Light);
        assert_eq!(sub.poll_change(), Some(Theme::Light));
        assert_eq!(sub.poll_change(), None);
    }

    #[test]
    fn setting_same_theme_does_not_notify() {
        let provider = ThemeProvider::new(Theme::Light);
        let mut sub = provider.subscribe();
        provider.set(Theme::Light);
        assert_eq!(sub.poll_change(), None);
        assert_eq!(sub.current(), Theme::Light);
    }

    #[test]
    fn set_without_subscribers_still_applies() {
        let provider = ThemeProvider::default();
        provider.set(Theme::Light);
        assert_eq!(provider.current(), Theme::Light);
    }

    #[test]
    fn deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Holder {
            theme: Theme,
        }
        let holder: Holder = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(holder.theme, Theme::Light);
    }
}
