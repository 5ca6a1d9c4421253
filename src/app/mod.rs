// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting one alert queue and one inventory table.
//!
//! The `App` struct owns component state the way a real host would: the
//! alert queue is a provider living next to the data it confirms changes to,
//! and callbacks come back as regular messages.

pub mod inventory;
mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::alert::{self, AlertQueue};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use inventory::Inventory;
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    alerts: AlertQueue<Message>,
    inventory: Inventory,
    /// Last user-visible outcome, shown under the table.
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("alerts", &self.alerts.len())
            .field("rows", &self.inventory.items().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 420;
pub const MIN_WINDOW_WIDTH: u32 = 520;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and translations, surfacing a config warning through
    /// the alert queue itself.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let app = Self::with_config(flags, config, warning);
        (app, Task::none())
    }

    /// Builds the app from an already loaded config.
    pub fn with_config(flags: Flags, config: Config, warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang, &config);
        let mut alerts = AlertQueue::new(&config.alert);

        if let Some(key) = warning {
            alerts.show(None, Some(&i18n.tr(&key)), None);
        }

        tracing::info!(locale = %i18n.current_locale(), "demo application ready");

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            alerts,
            inventory: Inventory::new(inventory::sample_items()),
            status: None,
        }
    }

    pub fn alerts(&self) -> &AlertQueue<Message> {
        &self.alerts
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Routes a modal message, returning the host message of an activated
    /// action instead of scheduling it.
    pub fn route_alert(&mut self, message: alert::Message) -> Option<Message> {
        update::route_alert(&mut self.alerts, message)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_alert_subscription(&self.alerts)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            alerts: &mut self.alerts,
            inventory: &mut self.inventory,
            status: &mut self.status,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            alerts: &self.alerts,
            inventory: &self.inventory,
            status: self.status.as_deref(),
            striped: self.config.table.striped(),
        })
    }
}
