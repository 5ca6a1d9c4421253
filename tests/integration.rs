// SPDX-License-Identifier: MPL-2.0
use iced_helpers::app::{App, Flags, Message};
use iced_helpers::config::{self, Config, LOAD_WARNING_KEY};
use iced_helpers::i18n::fluent::I18n;
use iced_helpers::ui::alert::{self, AlertQueue, AlertRequest};
use iced_helpers::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("alert-default-title"), "Notice");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("alert-default-title"), "Avis");
    assert_eq!(i18n_fr.tr("alert-default-action"), "Confirmer");
}

#[test]
fn test_cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("zh-TW".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "zh-TW");
    assert_eq!(i18n.tr("alert-default-action"), "確認");
}

#[test]
fn test_default_title_follows_locale() {
    let mut queue: AlertQueue<()> = AlertQueue::default();
    queue.show(None, Some("body"), None);
    let request = queue.current().expect("alert on screen");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    assert_eq!(request.display_title(&I18n::new(None, &config)), "Notice");

    config.general.language = Some("fr".to_string());
    assert_eq!(request.display_title(&I18n::new(None, &config)), "Avis");
}

#[test]
fn test_sections_round_trip_through_toml() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.alert.transition_ms = Some(0);
    config.alert.dismiss_on_backdrop = Some(false);
    config.table.striped = Some(false);

    config::save_to_path(&config, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to read config");
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_config_is_reported_through_alert_queue() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[alert\ntransition_ms = ")
        .expect("Failed to write broken config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));

    let app = App::with_config(
        Flags {
            lang: Some("en-US".to_string()),
        },
        config,
        warning,
    );
    let shown = app.alerts().current().map(AlertRequest::body_text);
    assert_eq!(
        shown,
        Some("Settings could not be read. Defaults are in use.")
    );
}

#[test]
fn test_demo_delete_flow_goes_through_confirmation() {
    let mut app = App::with_config(
        Flags {
            lang: Some("en-US".to_string()),
        },
        Config::default(),
        None,
    );
    let rows = app.inventory().items().len();

    let _ = app.update(Message::RequestDelete("sku-002".to_string()));
    assert_eq!(app.alerts().len(), 1);
    assert_eq!(app.inventory().items().len(), rows);

    // Button 1 is "Delete"; activating it closes the dialog and yields the callback
    let id = app
        .alerts()
        .current()
        .map(AlertRequest::id)
        .expect("confirmation on screen");
    let callback = app.route_alert(alert::Message::Activate { id, index: 1 });
    assert!(app.alerts().is_empty());
    assert_eq!(app.inventory().items().len(), rows);
    assert!(matches!(&callback, Some(Message::Delete(id)) if id == "sku-002"));

    let _ = app.update(callback.expect("delete callback"));
    assert_eq!(app.inventory().items().len(), rows - 1);
    assert_eq!(app.status(), Some("Removed \"Washers 6mm\"."));
}
