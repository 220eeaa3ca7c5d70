// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the overlays and global keys.
//!
//! Handlers receive an [`UpdateContext`] holding only the state they touch,
//! so they can be exercised without a full `App`.

use super::keyboard::{self, KeyAction, KeyMode};
use super::Message;
use crate::content::Invitation;
use crate::ui::gift::{self, GiftModal};
use crate::ui::lightbox::{view::Message as LightboxMessage, Lightbox};
use crate::ui::state::{ScrollLock, Ticket};
use iced::Task;
use std::time::{Duration, Instant};

/// Mutable overlay state borrowed from the application for one update.
pub(super) struct UpdateContext<'a> {
    pub lightbox: &'a mut Lightbox,
    pub gift: &'a mut GiftModal,
    pub scroll_lock: &'a mut ScrollLock,
    pub invitation: &'a Invitation,
    pub now: Instant,
}

/// Delivers `ticket` back as `message` after `delay`.
pub(super) fn deliver_after(
    delay: Duration,
    ticket: Ticket,
    message: fn(Ticket) -> Message,
) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
        },
        move |()| message(ticket),
    )
}

fn replay(ctx: &UpdateContext<'_>, ticket: Option<Ticket>) -> Task<Message> {
    match ticket {
        Some(ticket) => deliver_after(ctx.lightbox.replay_delay(), ticket, Message::LightboxReplay),
        None => Task::none(),
    }
}

pub(super) fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: LightboxMessage,
) -> Task<Message> {
    match message {
        LightboxMessage::Close => {
            ctx.lightbox.close(ctx.scroll_lock);
            Task::none()
        }
        LightboxMessage::Previous => {
            let ticket = ctx.lightbox.previous();
            replay(ctx, ticket)
        }
        LightboxMessage::Next => {
            let ticket = ctx.lightbox.next();
            replay(ctx, ticket)
        }
        LightboxMessage::Pressed(target) => {
            ctx.lightbox.press(target, ctx.scroll_lock);
            Task::none()
        }
    }
}

pub(super) fn handle_gift_message(
    ctx: &mut UpdateContext<'_>,
    message: gift::Message,
) -> Task<Message> {
    match message {
        gift::Message::Open => {
            if ctx.invitation.gifts.is_some() && !ctx.lightbox.is_open() {
                ctx.gift.open(ctx.scroll_lock);
            }
            Task::none()
        }
        gift::Message::Close | gift::Message::BackdropPressed => {
            ctx.gift.close(ctx.scroll_lock);
            Task::none()
        }
        gift::Message::DialogPressed => Task::none(),
        gift::Message::Copy(field) => {
            let Some(value) = ctx
                .invitation
                .gifts
                .as_ref()
                .and_then(|details| field.value(details))
            else {
                return Task::none();
            };
            ctx.gift.mark_copied(field, ctx.now);
            match gift::copy_to_system_clipboard(value) {
                Ok(()) => Task::none(),
                Err(err) => {
                    tracing::warn!(error = %err, "system clipboard unavailable, using window clipboard");
                    iced::clipboard::write(value.to_string())
                }
            }
        }
    }
}

/// Routes a key press according to which overlay is open.
pub(super) fn handle_key(ctx: &mut UpdateContext<'_>, key: &iced::keyboard::Key) -> Task<Message> {
    let mode = KeyMode::from_overlays(ctx.lightbox.is_open(), ctx.gift.is_open());
    match keyboard::dispatch(mode, key) {
        Some(KeyAction::CloseLightbox) => handle_lightbox_message(ctx, LightboxMessage::Close),
        Some(KeyAction::PreviousPhoto) => handle_lightbox_message(ctx, LightboxMessage::Previous),
        Some(KeyAction::NextPhoto) => handle_lightbox_message(ctx, LightboxMessage::Next),
        Some(KeyAction::CloseModal) => handle_gift_message(ctx, gift::Message::Close),
        None => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::ui::lightbox::PointerTarget;
    use iced::keyboard::{key::Named, Key};
    use std::path::Path;

    struct Fixture {
        lightbox: Lightbox,
        gift: GiftModal,
        scroll_lock: ScrollLock,
        invitation: Invitation,
    }

    impl Fixture {
        fn new() -> Self {
            let invitation = content::load(None, Path::new("/photos")).expect("embedded content");
            Self {
                lightbox: Lightbox::new(invitation.gallery.clone(), Duration::from_millis(10)),
                gift: GiftModal::default(),
                scroll_lock: ScrollLock::default(),
                invitation,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                lightbox: &mut self.lightbox,
                gift: &mut self.gift,
                scroll_lock: &mut self.scroll_lock,
                invitation: &self.invitation,
                now: Instant::now(),
            }
        }
    }

    fn key(named: Named) -> Key {
        Key::Named(named)
    }

    #[test]
    fn delayed_delivery_builds_without_a_runtime() {
        let mut fixture = Fixture::new();
        fixture.lightbox.open(0, &mut fixture.scroll_lock);
        let ticket = fixture.lightbox.next().expect("non-empty gallery");

        // No tokio runtime is entered here; the timer is created when the task runs.
        let _task = deliver_after(Duration::from_millis(10), ticket, Message::LightboxReplay);
        let _task = handle_lightbox_message(&mut fixture.ctx(), LightboxMessage::Next);
        assert_eq!(fixture.lightbox.current_index(), 2);
    }

    #[test]
    fn keys_are_inert_while_nothing_is_open() {
        let mut fixture = Fixture::new();
        let _ = handle_key(&mut fixture.ctx(), &key(Named::ArrowRight));
        assert_eq!(fixture.lightbox.current_index(), 0);
        assert!(!fixture.lightbox.is_open());
    }

    #[test]
    fn arrows_navigate_open_lightbox() {
        let mut fixture = Fixture::new();
        fixture.lightbox.open(0, &mut fixture.scroll_lock);

        let _ = handle_key(&mut fixture.ctx(), &key(Named::ArrowLeft));
        assert_eq!(fixture.lightbox.current_index(), fixture.lightbox.len() - 1);

        let _ = handle_key(&mut fixture.ctx(), &key(Named::ArrowRight));
        assert_eq!(fixture.lightbox.current_index(), 0);
    }

    #[test]
    fn escape_closes_lightbox_and_unlocks_scroll() {
        let mut fixture = Fixture::new();
        fixture.lightbox.open(2, &mut fixture.scroll_lock);

        let _ = handle_key(&mut fixture.ctx(), &key(Named::Escape));
        assert!(!fixture.lightbox.is_open());
        assert!(!fixture.scroll_lock.is_locked());
    }

    #[test]
    fn escape_closes_gift_modal() {
        let mut fixture = Fixture::new();
        let _ = handle_gift_message(&mut fixture.ctx(), gift::Message::Open);
        assert!(fixture.gift.is_open());
        assert!(fixture.scroll_lock.is_locked());

        let _ = handle_key(&mut fixture.ctx(), &key(Named::Escape));
        assert!(!fixture.gift.is_open());
        assert!(!fixture.scroll_lock.is_locked());
    }

    #[test]
    fn arrows_do_nothing_in_gift_modal() {
        let mut fixture = Fixture::new();
        let _ = handle_gift_message(&mut fixture.ctx(), gift::Message::Open);
        let _ = handle_key(&mut fixture.ctx(), &key(Named::ArrowRight));
        assert_eq!(fixture.lightbox.current_index(), 0);
        assert!(fixture.gift.is_open());
    }

    #[test]
    fn content_press_keeps_lightbox_open() {
        let mut fixture = Fixture::new();
        fixture.lightbox.open(1, &mut fixture.scroll_lock);

        let _ = handle_lightbox_message(
            &mut fixture.ctx(),
            LightboxMessage::Pressed(PointerTarget::Content),
        );
        assert!(fixture.lightbox.is_open());

        let _ = handle_lightbox_message(
            &mut fixture.ctx(),
            LightboxMessage::Pressed(PointerTarget::Backdrop),
        );
        assert!(!fixture.lightbox.is_open());
    }

    #[test]
    fn dialog_press_keeps_modal_open() {
        let mut fixture = Fixture::new();
        let _ = handle_gift_message(&mut fixture.ctx(), gift::Message::Open);
        let _ = handle_gift_message(&mut fixture.ctx(), gift::Message::DialogPressed);
        assert!(fixture.gift.is_open());

        let _ = handle_gift_message(&mut fixture.ctx(), gift::Message::BackdropPressed);
        assert!(!fixture.gift.is_open());
    }
}
