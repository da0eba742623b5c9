// SPDX-License-Identifier: MPL-2.0
//! Executes viewer effects against the host's ports.
//!
//! [`ViewerDriver`] owns a [`ViewerSession`] together with the scheduler,
//! image loader, fullscreen platform and host callbacks. Every message is
//! handled by the session first; the returned effects are then carried out
//! in order, so a session never observes a half-applied transition.

use crate::application::port::{Fullscreen, ImageLoader, Scheduler, ViewerHost};
use crate::domain::photo::PhotoSequence;
use crate::error::ViewerError;
use crate::infrastructure::timer::ManualScheduler;
use crate::ui::state::device::ViewportSignals;
use crate::ui::viewer::component::{Effect, Message, ViewerSession};
use crate::ui::viewer::settings::ViewerSettings;
use crate::ui::viewer::subcomponents::navigation::Direction;
use std::time::Duration;

/// The platform services a driver needs.
#[derive(Debug)]
pub struct Ports<S, L, F, H> {
    pub scheduler: S,
    pub loader: L,
    pub fullscreen: F,
    pub host: H,
}

/// A viewer session wired to its ports.
#[derive(Debug)]
pub struct ViewerDriver<S, L, F, H> {
    session: ViewerSession,
    ports: Ports<S, L, F, H>,
}

impl<S, L, F, H> ViewerDriver<S, L, F, H>
where
    S: Scheduler,
    L: ImageLoader,
    F: Fullscreen,
    H: ViewerHost,
{
    /// Opens a session and applies its initial effects.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::EmptySequence`] if `sequence` is empty.
    pub fn open(
        sequence: PhotoSequence,
        start_index: usize,
        settings: ViewerSettings,
        signals: ViewportSignals,
        ports: Ports<S, L, F, H>,
    ) -> Result<Self, ViewerError> {
        let (session, effects) = ViewerSession::open(sequence, start_index, settings, signals)?;
        let mut driver = Self { session, ports };
        driver.apply(effects);
        Ok(driver)
    }

    /// Handles one message and runs the resulting effects.
    pub fn send(&mut self, message: Message) {
        let effects = self.session.handle(message);
        self.apply(effects);
    }

    /// Runs effects in order.
    ///
    /// A display load of a preloaded URL is reported as loaded right away;
    /// a later signal from the loader for the same ticket is a no-op.
    pub fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            log::debug!("applying {effect:?}");
            self.apply_one(effect);
        }
    }

    fn apply_one(&mut self, effect: Effect) {
        let ports = &mut self.ports;
        match effect {
            Effect::ScheduleTimer { id, delay } => ports.scheduler.schedule(id, delay),
            Effect::CancelTimer(id) => ports.scheduler.cancel(id),
            Effect::ListenKeyboard(active) => ports.host.listen_keyboard(active),
            Effect::LoadImage { ticket, url, warm } => {
                ports.loader.load(ticket, &url);
                if warm {
                    log::trace!("{ticket} served from warm cache: {url}");
                    self.send(Message::ImageLoaded(ticket));
                }
            }
            Effect::Preload(urls) => {
                for url in &urls {
                    ports.loader.preload(url);
                }
            }
            Effect::RequestFullscreen => {
                if let Err(err) = ports.fullscreen.request() {
                    log::warn!("fullscreen request failed: {err}");
                }
            }
            Effect::ExitFullscreen => {
                if let Err(err) = ports.fullscreen.exit() {
                    log::warn!("fullscreen exit failed: {err}");
                }
            }
            Effect::NotifyClose => ports.host.on_close(),
            Effect::NotifyNavigated { direction, index } => {
                if let Some(photo) = self.session.photo(index) {
                    match direction {
                        Direction::Next => ports.host.on_next(index, photo),
                        Direction::Previous => ports.host.on_prev(index, photo),
                    }
                }
            }
            Effect::NotifyImageLoaded { index } => {
                if let Some(photo) = self.session.photo(index) {
                    ports.host.on_image_loaded(index, photo);
                }
            }
            Effect::NotifyImageError { index, reason } => {
                if let Some(photo) = self.session.photo(index) {
                    ports.host.on_image_error(index, photo, &reason);
                }
            }
            Effect::UiVisibilityChanged(visible) => log::trace!("chrome visible: {visible}"),
            Effect::DeviceChanged(profile) => log::trace!("device profile: {profile:?}"),
        }
    }

    #[must_use]
    pub fn session(&self) -> &ViewerSession {
        &self.session
    }

    #[must_use]
    pub fn ports(&self) -> &Ports<S, L, F, H> {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut Ports<S, L, F, H> {
        &mut self.ports
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.ports.host
    }

    #[must_use]
    pub fn loader(&self) -> &L {
        &self.ports.loader
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.ports.scheduler
    }

    /// Consumes the driver, returning the session and its ports.
    #[must_use]
    pub fn into_parts(self) -> (ViewerSession, Ports<S, L, F, H>) {
        (self.session, self.ports)
    }
}

impl<L, F, H> ViewerDriver<ManualScheduler, L, F, H>
where
    L: ImageLoader,
    F: Fullscreen,
    H: ViewerHost,
{
    /// Advances virtual time by `by`, delivering every timer that falls due.
    ///
    /// Timers are popped one at a time so that timers armed while handling a
    /// firing are delivered too if they fall inside the window.
    pub fn advance(&mut self, by: Duration) {
        let target = self.ports.scheduler.now() + by;
        while let Some(id) = self.ports.scheduler.pop_due(target) {
            self.send(Message::TimerFired(id));
        }
        self.ports.scheduler.set_now(target);
    }
}
