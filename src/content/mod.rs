// SPDX-License-Identifier: MPL-2.0
//! Invitation content: names, event details, story, people, photos, gifts.
//!
//! Content is read from an `invitation.toml` file. A default copy is embedded
//! in the binary and used when no `--content` path is given. Photo paths in
//! the file are relative to the directory that holds it.
//!
//! # Example
//!
//! ```
//! use iced_invite::content;
//! use std::path::Path;
//!
//! let source = r#"
//! [couple]
//! partner_one = "Ana"
//! partner_two = "Leo"
//!
//! [event]
//! date = "2026-06-20T15:30:00"
//! venue = "Old Mill"
//!
//! [[gallery]]
//! src = "photos/one.jpg"
//! caption = "First trip"
//! "#;
//!
//! let invitation = content::parse(source, Path::new("/srv/invite")).unwrap();
//! assert_eq!(invitation.gallery.len(), 1);
//! assert_eq!(
//!     invitation.gallery.get(0).unwrap().source(),
//!     Path::new("/srv/invite/photos/one.jpg")
//! );
//! ```

use crate::error::{ContentError, Error, Result};
use crate::gallery::{Gallery, GalleryItem};
use chrono::NaiveDateTime;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct EmbeddedContent;

const EMBEDDED_FILE: &str = "invitation.toml";

/// Accepted event date layouts, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Names shown on the hero.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Couple {
    pub partner_one: String,
    pub partner_two: String,
    #[serde(default)]
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Local date and time of the ceremony.
    pub date: NaiveDateTime,
    pub venue: String,
    pub address: Option<String>,
}

/// One step of the couple's story.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimelineEntry {
    /// Free-form label such as "Summer 2019".
    pub when: String,
    pub title: String,
    #[serde(default)]
    pub text: String,
}

/// Card in the couple section (the couple or their witnesses).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub photo: Option<PathBuf>,
}

/// Bank details listed in the gift modal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GiftDetails {
    #[serde(default)]
    pub message: Option<String>,
    pub bank: String,
    pub holder: String,
    pub account: String,
    #[serde(default)]
    pub reference: Option<String>,
}

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    pub couple: Couple,
    pub event: Event,
    pub timeline: Vec<TimelineEntry>,
    pub people: Vec<Person>,
    pub gallery: Gallery,
    pub gifts: Option<GiftDetails>,
}

impl Invitation {
    /// Gallery sources that do not exist on disk.
    pub fn missing_photos(&self) -> Vec<&Path> {
        self.gallery
            .iter()
            .map(|item| item.source())
            .filter(|source| !source.exists())
            .collect()
    }
}

// -----------------------------------------------------------------------------
// File layout
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawInvitation {
    couple: Couple,
    event: RawEvent,
    #[serde(default)]
    timeline: Vec<TimelineEntry>,
    #[serde(default)]
    people: Vec<RawPerson>,
    #[serde(default)]
    gallery: Vec<RawPhoto>,
    #[serde(default)]
    gifts: Option<GiftDetails>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    date: String,
    venue: String,
    #[serde(default)]
    address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPerson {
    name: String,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    photo: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawPhoto {
    src: PathBuf,
    #[serde(default)]
    caption: Option<String>,
}

/// Loads the invitation from `path`, or the embedded default when `None`.
///
/// Photos of the embedded default are resolved against `embedded_base`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and
/// [`Error::Content`] if it is malformed.
pub fn load(path: Option<&Path>, embedded_base: &Path) -> Result<Invitation> {
    let invitation = match path {
        Some(path) => {
            let source = fs::read_to_string(path)?;
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            tracing::debug!(path = %path.display(), "loading invitation content");
            parse(&source, base)
        }
        None => {
            let file = EmbeddedContent::get(EMBEDDED_FILE).ok_or(ContentError::MissingEmbedded)?;
            let source = String::from_utf8_lossy(file.data.as_ref());
            parse(&source, embedded_base)
        }
    }?;

    let missing = invitation.missing_photos();
    if let Some(first) = missing.first() {
        tracing::warn!(
            missing = missing.len(),
            total = invitation.gallery.len(),
            first = %first.display(),
            "gallery photos not found"
        );
    }
    Ok(invitation)
}

/// Parses invitation TOML, resolving relative photo paths against `base_dir`.
///
/// # Errors
///
/// Returns [`Error::Content`] if the TOML is malformed or the event date
/// cannot be parsed.
pub fn parse(source: &str, base_dir: &Path) -> Result<Invitation> {
    let raw: RawInvitation =
        toml::from_str(source).map_err(|e| ContentError::Malformed(e.message().to_string()))?;

    let date = parse_event_date(&raw.event.date)?;
    let resolve = |p: PathBuf| {
        if p.is_absolute() {
            p
        } else {
            base_dir.join(p)
        }
    };

    let people = raw
        .people
        .into_iter()
        .map(|person| Person {
            name: person.name,
            role: non_blank(person.role),
            bio: non_blank(person.bio),
            photo: person.photo.map(resolve),
        })
        .collect();

    let gallery = raw
        .gallery
        .into_iter()
        .map(|photo| GalleryItem::new(resolve(photo.src), photo.caption))
        .collect();

    Ok(Invitation {
        couple: raw.couple,
        event: Event {
            date,
            venue: raw.event.venue,
            address: non_blank(raw.event.address),
        },
        timeline: raw.timeline,
        people,
        gallery,
        gifts: raw.gifts,
    })
}

fn parse_event_date(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| ContentError::InvalidDate(raw.to_string()).into())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
