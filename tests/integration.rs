// SPDX-License-Identifier: MPL-2.0
use iced_invite::config::{self, Config, DEFAULT_MAX_TILT_DEG};
use iced_invite::content;
use iced_invite::countdown::Countdown;
use iced_invite::error::{ContentError, Error};
use iced_invite::i18n::fluent::I18n;
use iced_invite::ui::theming::ThemeMode;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const MINIMAL_INVITATION: &str = r#"
[couple]
partner_one = "Ana"
partner_two = "Bo"

[event]
date = "2030-06-01T15:30"
venue = "Town hall"

[[gallery]]
src = "pics/a.jpg"
caption = "At the lake"

[[gallery]]
src = "/abs/b.jpg"
"#;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &config_path).expect("Failed to write english config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load english config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french = loaded;
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &config_path).expect("Failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // The CLI flag wins over the file.
    let i18n_cli = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n_cli.current_locale().to_string(), "en-US");
}

#[test]
fn config_sections_survive_a_save() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.gallery.max_tilt_deg = Some(5.5);
    config.intro.enabled = Some(false);
    config::save_to_path(&config, &dir.path().join("settings.toml"))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning, None);
    assert_eq!(loaded, config);
    assert_eq!(loaded.gallery.max_tilt_deg(), 5.5);
    assert!(!loaded.intro.enabled());
}

#[test]
fn partial_config_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[intro]\nenabled = false\n")
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning, None);
    assert!(!loaded.intro.enabled());
    assert_eq!(loaded.gallery.max_tilt_deg(), DEFAULT_MAX_TILT_DEG);
}

#[test]
fn broken_config_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[gallery\nmax_tilt_deg = ")
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}

#[test]
fn content_file_resolves_photos_next_to_it() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("invitation.toml");
    fs::write(&path, MINIMAL_INVITATION).expect("Failed to write content");

    let invitation = content::load(Some(&path), Path::new("/unused")).expect("valid content");
    assert_eq!(invitation.couple.partner_one, "Ana");
    assert_eq!(invitation.gallery.len(), 2);

    let first = invitation.gallery.get(0).expect("first photo");
    assert_eq!(first.source(), dir.path().join("pics/a.jpg"));
    assert_eq!(first.caption(), Some("At the lake"));

    let second = invitation.gallery.get(1).expect("second photo");
    assert_eq!(second.source(), Path::new("/abs/b.jpg"));
    assert_eq!(second.caption(), None);

    assert!(invitation.timeline.is_empty());
    assert!(invitation.gifts.is_none());
}

#[test]
fn missing_content_file_is_an_io_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let result = content::load(Some(&dir.path().join("nope.toml")), Path::new("/"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn bad_event_date_is_reported() {
    let source = MINIMAL_INVITATION.replace("2030-06-01T15:30", "next summer");
    let result = content::parse(&source, Path::new("/"));
    assert!(matches!(
        result,
        Err(Error::Content(ContentError::InvalidDate(_)))
    ));
}

#[test]
fn embedded_invitation_is_complete() {
    let invitation = content::load(None, Path::new("/data")).expect("embedded content");
    assert!(!invitation.gallery.is_empty());
    assert!(!invitation.timeline.is_empty());
    assert!(invitation.gifts.is_some());
    assert!(invitation
        .gallery
        .iter()
        .all(|item| item.source().starts_with("/data")));
}

#[test]
fn countdown_to_embedded_event() {
    let invitation = content::load(None, Path::new("/data")).expect("embedded content");
    let date = invitation.event.date;

    let day_before = date - chrono::Duration::days(1);
    let countdown = Countdown::until(date, day_before);
    assert_eq!(countdown.days, 1);
    assert_eq!(countdown.hours, 0);
    assert!(!countdown.elapsed);

    let after = Countdown::until(date, date + chrono::Duration::seconds(1));
    assert!(after.elapsed);
}

#[test]
fn window_title_is_translated_for_every_locale() {
    for lang in ["en-US", "fr"] {
        let i18n = I18n::new(Some(lang.to_string()), &Config::default());
        let title = i18n.tr_with_args("window-title", &[("first", "Ana"), ("second", "Bo")]);
        assert!(title.contains("Ana"), "{lang}: {title}");
        assert!(title.contains("Bo"), "{lang}: {title}");
        assert!(!title.starts_with("MISSING"), "{lang}: {title}");
    }
}
