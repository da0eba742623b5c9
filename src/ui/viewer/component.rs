// SPDX-License-Identifier: MPL-2.0
//! Viewer component orchestrating the sub-components.
//!
//! [`ViewerSession`] owns the state of one open viewer. Every input arrives
//! as a [`Message`]; [`ViewerSession::handle`] applies it and returns the
//! [`Effect`]s the host must execute (arm or cancel timers, start loads,
//! notify the page). The session never performs I/O itself, so each call is
//! atomic with respect to other inputs.
//!
//! # Lifecycle
//!
//! 1. [`ViewerSession::open`] clamps the start index, attaches the keyboard
//!    listener, arms the initial hide timer on desktop and loads the photo.
//! 2. Messages are handled until [`Message::Close`] (or `Escape`).
//! 3. After close every message and operation is ignored.

use crate::application::port::loader::LoadTicket;
use crate::application::port::scheduler::TimerId;
use crate::domain::photo::{PhotoRecord, PhotoSequence};
use crate::domain::ui::newtypes::{RotationAngle, Scale};
use crate::error::ViewerError;
use crate::ui::state::device::{DeviceProfile, ViewportSignals};
use crate::ui::state::gesture::{
    GestureOutcome, GestureTracker, PinchEvent, PointerEvent, PointerKind, PointerPhase,
    SwipeDirection,
};
use crate::ui::state::preload::{neighbour_indices, PreloadCache, PreloadStats};
use crate::ui::state::transform::TransformState;
use crate::ui::viewer::keyboard::{shortcut_for, Key, Shortcut};
use crate::ui::viewer::settings::ViewerSettings;
use crate::ui::viewer::subcomponents::navigation::{Direction, NavigationOutcome};
use crate::ui::viewer::subcomponents::{
    fullscreen, loading, navigation, overlay, panels, viewport,
};
use std::time::Duration;

/// Inputs to a viewer session.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Next,
    Previous,
    Close,
    ZoomIn,
    ZoomOut,
    /// Absolute scale, clamped.
    SetScale(f32),
    Rotate,
    ToggleInfo,
    ToggleLike,
    ToggleMobileInfo,
    ToggleFullscreen,
    /// The platform reported a fullscreen change.
    FullscreenChanged(bool),
    /// The display load for `ticket` finished.
    ImageLoaded(LoadTicket),
    /// The display load for `ticket` failed.
    ImageFailed { ticket: LoadTicket, reason: String },
    PreloadCompleted(String),
    PreloadFailed { url: String, reason: String },
    Pointer(PointerEvent),
    /// Wheel scroll; positive `delta_y` scrolls down.
    Wheel { delta_y: f32 },
    Pinch(PinchEvent),
    KeyPressed(Key),
    Resized(ViewportSignals),
    OrientationChanged(ViewportSignals),
    TimerFired(TimerId),
    /// Show the chrome and restart the hide timer.
    ShowUi,
    /// Host-side loading flag; keeps the spinner up while set.
    SetHostLoading(bool),
    /// Host-side chrome switch.
    SetHostShowUi(bool),
}

/// Work the host must perform on behalf of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScheduleTimer { id: TimerId, delay: Duration },
    CancelTimer(TimerId),
    ListenKeyboard(bool),
    /// Load `url` for display. `warm` is true if it was preloaded.
    LoadImage {
        ticket: LoadTicket,
        url: String,
        warm: bool,
    },
    /// Warm these URLs, nearest first.
    Preload(Vec<String>),
    RequestFullscreen,
    ExitFullscreen,
    NotifyClose,
    NotifyNavigated { direction: Direction, index: usize },
    NotifyImageLoaded { index: usize },
    NotifyImageError { index: usize, reason: String },
    UiVisibilityChanged(bool),
    DeviceChanged(DeviceProfile),
}

/// Read-only view of the session for rendering.
// Allow excessive bools: read-only UI snapshot with orthogonal visibility flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSnapshot<'a> {
    pub photo: &'a PhotoRecord,
    pub index: usize,
    pub total: usize,
    pub position_label: String,
    pub progress: f32,
    pub can_prev: bool,
    pub can_next: bool,
    pub scale: Scale,
    pub zoom_percent: u32,
    pub rotation: RotationAngle,
    pub css_transform: String,
    pub image_loaded: bool,
    pub load_error: Option<&'a str>,
    pub spinner_visible: bool,
    pub ui_visible: bool,
    pub chrome_visible: bool,
    pub extended_info_visible: bool,
    pub mobile_info_visible: bool,
    pub info_open: bool,
    pub liked: bool,
    pub is_fullscreen: bool,
    pub device: DeviceProfile,
    pub size_label: String,
}

/// One open image viewer.
#[derive(Debug)]
pub struct ViewerSession {
    sequence: PhotoSequence,
    settings: ViewerSettings,
    navigation: navigation::State,
    transform: TransformState,
    overlay: overlay::State,
    loading: loading::State,
    fullscreen: fullscreen::State,
    viewport: viewport::State,
    panels: panels::State,
    gestures: GestureTracker,
    preload: PreloadCache,
    host_loading: bool,
    host_show_ui: bool,
    closed: bool,
    next_timer: u64,
    next_ticket: u64,
}

impl ViewerSession {
    /// Opens a session on `sequence` at `start_index`, clamped into range.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::EmptySequence`] if there is nothing to show.
    pub fn open(
        sequence: PhotoSequence,
        start_index: usize,
        settings: ViewerSettings,
        signals: ViewportSignals,
    ) -> Result<(Self, Vec<Effect>), ViewerError> {
        if sequence.is_empty() {
            return Err(ViewerError::EmptySequence);
        }

        let navigation = navigation::State::new(sequence.len(), start_index);
        let viewport = viewport::State::new(
            signals,
            settings.mobile_max_width,
            settings.orientation_debounce,
        );
        let preload = PreloadCache::new(settings.preload);

        let mut session = Self {
            sequence,
            settings,
            navigation,
            transform: TransformState::default(),
            overlay: overlay::State::hidden(),
            loading: loading::State::default(),
            fullscreen: fullscreen::State::default(),
            viewport,
            panels: panels::State::default(),
            gestures: GestureTracker::default(),
            preload,
            host_loading: false,
            host_show_ui: true,
            closed: false,
            next_timer: 0,
            next_ticket: 0,
        };

        log::info!(
            "viewer opened at {} of {} (requested {start_index}, mobile: {})",
            session.navigation.current() + 1,
            session.navigation.len(),
            session.viewport.profile.is_mobile
        );

        let mut effects = vec![Effect::ListenKeyboard(true)];
        if !session.viewport.profile.is_mobile {
            effects.extend(session.show_ui_temporarily());
        }
        effects.extend(session.load_current());
        Ok((session, effects))
    }

    /// Handles one input and returns the effects to execute.
    pub fn handle(&mut self, message: Message) -> Vec<Effect> {
        if self.closed {
            log::debug!("ignoring {message:?} after close");
            return Vec::new();
        }

        match message {
            Message::Next => self.next().1,
            Message::Previous => self.prev().1,
            Message::Close => self.close(),
            Message::ZoomIn => self.zoom_in(),
            Message::ZoomOut => self.zoom_out(),
            Message::SetScale(value) => self.set_scale(value),
            Message::Rotate => self.rotate(),
            Message::ToggleInfo => self.toggle_info(),
            Message::ToggleLike => self.toggle_like(),
            Message::ToggleMobileInfo => {
                self.panels.handle(panels::Message::ToggleMobileInfo);
                Vec::new()
            }
            Message::ToggleFullscreen => self.toggle_fullscreen(),
            Message::FullscreenChanged(active) => {
                if let fullscreen::Effect::Changed(active) =
                    self.fullscreen.handle(fullscreen::Message::Changed(active))
                {
                    log::debug!("fullscreen is now {active}");
                }
                Vec::new()
            }
            Message::ImageLoaded(ticket) => self.on_image_load_signal(ticket),
            Message::ImageFailed { ticket, reason } => self.on_image_error(ticket, reason),
            Message::PreloadCompleted(url) => {
                self.preload.complete(&url);
                Vec::new()
            }
            Message::PreloadFailed { url, reason } => {
                log::debug!("preload of {url} failed: {reason}");
                self.preload.fail(&url);
                Vec::new()
            }
            Message::Pointer(event) => self.register_gesture(event),
            Message::Wheel { delta_y } => self.on_wheel(delta_y),
            Message::Pinch(event) => {
                if let Some(scale) = self.gestures.pinch(event, self.transform.scale) {
                    self.transform.scale = scale;
                }
                Vec::new()
            }
            Message::KeyPressed(key) => self.on_key(key),
            Message::Resized(signals) => {
                let effect = self.viewport.handle(viewport::Message::Resized(signals));
                self.apply_viewport(effect)
            }
            Message::OrientationChanged(signals) => {
                let timer = self.allocate_timer();
                let effect = self
                    .viewport
                    .handle(viewport::Message::OrientationChanged { signals, timer });
                self.apply_viewport(effect)
            }
            Message::TimerFired(id) => self.on_timer(id),
            Message::ShowUi => self.show_ui_temporarily(),
            Message::SetHostLoading(loading) => {
                self.host_loading = loading;
                Vec::new()
            }
            Message::SetHostShowUi(show) => {
                self.host_show_ui = show;
                Vec::new()
            }
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Moves to the next photo.
    pub fn next(&mut self) -> (NavigationOutcome, Vec<Effect>) {
        self.navigate(Direction::Next)
    }

    /// Moves to the previous photo.
    pub fn prev(&mut self) -> (NavigationOutcome, Vec<Effect>) {
        self.navigate(Direction::Previous)
    }

    fn navigate(&mut self, direction: Direction) -> (NavigationOutcome, Vec<Effect>) {
        if self.closed {
            return (NavigationOutcome::Closed, Vec::new());
        }
        let outcome = self.navigation.navigate(direction);
        let NavigationOutcome::Moved { from, to } = outcome else {
            log::debug!("cannot navigate {direction:?} from {}", self.navigation.current());
            return (outcome, Vec::new());
        };

        log::debug!("navigated {direction:?} from {from} to {to}");
        self.transform.reset();
        self.gestures.reset();
        self.panels.handle(panels::Message::PhotoChanged);

        let mut effects = vec![Effect::NotifyNavigated {
            direction,
            index: to,
        }];
        effects.extend(self.load_current());
        (outcome, effects)
    }

    /// Ends the session. Later messages are ignored.
    pub fn close(&mut self) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        self.closed = true;
        self.gestures.reset();

        let mut effects = Vec::new();
        if let overlay::Effect::Cancelled(id) = self.overlay.handle(overlay::Message::CancelPending) {
            effects.push(Effect::CancelTimer(id));
        }
        if let viewport::Effect::Cancelled(id) =
            self.viewport.handle(viewport::Message::CancelPending)
        {
            effects.push(Effect::CancelTimer(id));
        }
        effects.push(Effect::ListenKeyboard(false));
        effects.push(Effect::NotifyClose);
        log::info!("viewer closed at {}", self.navigation.current() + 1);
        effects
    }

    pub fn zoom_in(&mut self) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        self.transform.zoom_in(self.settings.zoom_factor);
        Vec::new()
    }

    pub fn zoom_out(&mut self) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        self.transform.zoom_out(self.settings.zoom_factor);
        Vec::new()
    }

    pub fn set_scale(&mut self, value: f32) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        self.transform.set_scale(value);
        Vec::new()
    }

    pub fn rotate(&mut self) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        self.transform.rotate();
        Vec::new()
    }

    pub fn toggle_info(&mut self) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        self.panels.handle(panels::Message::ToggleInfo);
        Vec::new()
    }

    pub fn toggle_like(&mut self) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        self.panels.handle(panels::Message::ToggleLike);
        Vec::new()
    }

    /// Asks the platform to enter or leave fullscreen.
    pub fn toggle_fullscreen(&mut self) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        match self.fullscreen.handle(fullscreen::Message::Toggle) {
            fullscreen::Effect::Request => vec![Effect::RequestFullscreen],
            fullscreen::Effect::Exit => vec![Effect::ExitFullscreen],
            fullscreen::Effect::None | fullscreen::Effect::Changed(_) => Vec::new(),
        }
    }

    /// Handles the load signal of a display request.
    pub fn on_image_load_signal(&mut self, ticket: LoadTicket) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        match self.loading.handle(loading::Message::Loaded(ticket)) {
            loading::Effect::Loaded => {
                let index = self.navigation.current();
                if let Some(photo) = self.sequence.get(index) {
                    let url = self.settings.url_strategy.select(photo);
                    self.preload.insert(url);
                }
                vec![Effect::NotifyImageLoaded { index }]
            }
            loading::Effect::Stale => {
                log::debug!("ignoring stale load signal {ticket}");
                Vec::new()
            }
            loading::Effect::None | loading::Effect::Failed(_) => Vec::new(),
        }
    }

    fn on_image_error(&mut self, ticket: LoadTicket, reason: String) -> Vec<Effect> {
        match self
            .loading
            .handle(loading::Message::Failed { ticket, reason })
        {
            loading::Effect::Failed(reason) => {
                let index = self.navigation.current();
                log::warn!("image {} failed to load: {reason}", index + 1);
                vec![Effect::NotifyImageError { index, reason }]
            }
            loading::Effect::Stale => {
                log::debug!("ignoring stale load failure {ticket}");
                Vec::new()
            }
            loading::Effect::None | loading::Effect::Loaded => Vec::new(),
        }
    }

    /// Feeds a pointer event through the gesture recognizer.
    pub fn register_gesture(&mut self, event: PointerEvent) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        let mut effects = Vec::new();
        let is_mobile = self.viewport.profile.is_mobile;
        if event.phase == PointerPhase::Move && event.kind != PointerKind::Touch && !is_mobile {
            effects.extend(self.show_ui_temporarily());
        }

        match self.gestures.pointer(event, &self.settings.gestures) {
            GestureOutcome::Swipe(SwipeDirection::Right) => {
                effects.extend(self.navigate(Direction::Previous).1);
            }
            GestureOutcome::Swipe(SwipeDirection::Left) => {
                effects.extend(self.navigate(Direction::Next).1);
            }
            GestureOutcome::Tap if is_mobile => effects.extend(self.show_ui_temporarily()),
            GestureOutcome::Tap | GestureOutcome::None => {}
        }
        effects
    }

    fn on_wheel(&mut self, delta_y: f32) -> Vec<Effect> {
        if self.viewport.profile.is_mobile {
            return Vec::new();
        }
        if let Some(factor) = self.settings.gestures.wheel_factor(delta_y) {
            self.transform.multiply(factor);
        }
        Vec::new()
    }

    fn on_key(&mut self, key: Key) -> Vec<Effect> {
        let Some(shortcut) = shortcut_for(key) else {
            return Vec::new();
        };
        match shortcut {
            Shortcut::Close => self.close(),
            Shortcut::Previous => self.prev().1,
            Shortcut::Next => self.next().1,
            Shortcut::ToggleInfo => self.toggle_info(),
            Shortcut::ZoomIn => self.zoom_in(),
            Shortcut::ZoomOut => self.zoom_out(),
            Shortcut::Rotate => self.rotate(),
        }
    }

    /// Shows the chrome and (re)arms the hide timer for the device class.
    pub fn show_ui_temporarily(&mut self) -> Vec<Effect> {
        if self.closed {
            return Vec::new();
        }
        let timer = self.allocate_timer();
        let delay = self.settings.hide_delay(self.viewport.profile.is_mobile);
        match self.overlay.handle(overlay::Message::Show { timer, delay }) {
            overlay::Effect::Armed {
                cancel,
                timer,
                delay,
                shown,
            } => {
                let mut effects = Vec::with_capacity(3);
                if let Some(previous) = cancel {
                    effects.push(Effect::CancelTimer(previous));
                }
                effects.push(Effect::ScheduleTimer {
                    id: timer,
                    delay: delay.as_duration(),
                });
                if shown {
                    log::debug!("chrome shown");
                    effects.push(Effect::UiVisibilityChanged(true));
                }
                effects
            }
            _ => Vec::new(),
        }
    }

    fn hide_ui(&mut self) -> Vec<Effect> {
        match self.overlay.handle(overlay::Message::HideNow) {
            overlay::Effect::Hidden { cancel, changed } => {
                let mut effects = Vec::new();
                if let Some(id) = cancel {
                    effects.push(Effect::CancelTimer(id));
                }
                if changed {
                    effects.push(Effect::UiVisibilityChanged(false));
                }
                effects
            }
            _ => Vec::new(),
        }
    }

    fn on_timer(&mut self, id: TimerId) -> Vec<Effect> {
        match self.overlay.handle(overlay::Message::TimerFired(id)) {
            overlay::Effect::Hidden { changed, .. } => {
                log::debug!("chrome hidden by {id}");
                return if changed {
                    vec![Effect::UiVisibilityChanged(false)]
                } else {
                    Vec::new()
                };
            }
            overlay::Effect::None => {}
            _ => return Vec::new(),
        }

        if self.viewport.pending_orientation() == Some(id) {
            let effect = self.viewport.handle(viewport::Message::TimerFired(id));
            return self.apply_viewport(effect);
        }

        log::debug!("ignoring stale {id}");
        Vec::new()
    }

    fn apply_viewport(&mut self, effect: viewport::Effect) -> Vec<Effect> {
        match effect {
            viewport::Effect::None => Vec::new(),
            viewport::Effect::Debounce {
                cancel,
                timer,
                delay,
            } => {
                let mut effects = Vec::with_capacity(2);
                if let Some(previous) = cancel {
                    effects.push(Effect::CancelTimer(previous));
                }
                effects.push(Effect::ScheduleTimer { id: timer, delay });
                effects
            }
            viewport::Effect::Cancelled(id) => vec![Effect::CancelTimer(id)],
            viewport::Effect::ProfileChanged { previous, current } => {
                log::debug!("device profile changed: {previous:?} -> {current:?}");
                let mut effects = vec![Effect::DeviceChanged(current)];
                if previous.is_mobile != current.is_mobile {
                    if current.is_mobile {
                        effects.extend(self.hide_ui());
                    } else {
                        effects.extend(self.show_ui_temporarily());
                    }
                }
                effects
            }
        }
    }

    /// Starts the display load of the current photo and warms its neighbours.
    fn load_current(&mut self) -> Vec<Effect> {
        let index = self.navigation.current();
        let Some(photo) = self.sequence.get(index) else {
            return Vec::new();
        };
        let strategy = self.settings.url_strategy;
        let url = strategy.select(photo).to_string();

        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        self.loading.handle(loading::Message::Start(ticket));
        let warm = self.preload.lookup(&url);

        let candidates: Vec<&str> =
            neighbour_indices(index, self.sequence.len(), self.preload.depth())
                .into_iter()
                .filter_map(|i| self.sequence.get(i))
                .map(|neighbour| strategy.select(neighbour))
                .filter(|candidate| *candidate != url)
                .collect();
        let planned = self.preload.plan(candidates);

        let mut effects = vec![Effect::LoadImage { ticket, url, warm }];
        if !planned.is_empty() {
            effects.push(Effect::Preload(planned));
        }
        effects
    }

    fn allocate_timer(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigation.current()
    }

    #[must_use]
    pub fn current_photo(&self) -> &PhotoRecord {
        // The sequence is non-empty and the index is kept in range.
        &self.sequence.as_slice()[self.navigation.current()]
    }

    #[must_use]
    pub fn photo(&self, index: usize) -> Option<&PhotoRecord> {
        self.sequence.get(index)
    }

    #[must_use]
    pub fn sequence(&self) -> &PhotoSequence {
        &self.sequence
    }

    #[must_use]
    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    #[must_use]
    pub fn transform(&self) -> TransformState {
        self.transform
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.navigation.can_prev()
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.navigation.can_next()
    }

    #[must_use]
    pub fn is_ui_visible(&self) -> bool {
        self.overlay.visible
    }

    #[must_use]
    pub fn pending_hide_timer(&self) -> Option<TimerId> {
        self.overlay.pending_hide()
    }

    #[must_use]
    pub fn is_image_loaded(&self) -> bool {
        self.loading.image_loaded
    }

    #[must_use]
    pub fn current_ticket(&self) -> Option<LoadTicket> {
        self.loading.current_ticket()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_fullscreen
    }

    #[must_use]
    pub fn is_info_open(&self) -> bool {
        self.panels.info_open
    }

    #[must_use]
    pub fn is_liked(&self) -> bool {
        self.panels.liked
    }

    #[must_use]
    pub fn is_mobile_info_expanded(&self) -> bool {
        self.panels.mobile_info_expanded
    }

    #[must_use]
    pub fn device(&self) -> DeviceProfile {
        self.viewport.profile
    }

    #[must_use]
    pub fn preload_stats(&self) -> PreloadStats {
        self.preload.stats()
    }

    #[must_use]
    pub fn is_preloaded(&self, url: &str) -> bool {
        self.preload.contains(url)
    }

    /// Everything a renderer needs, computed from the current state.
    #[must_use]
    pub fn snapshot(&self) -> ViewerSnapshot<'_> {
        let device = self.viewport.profile;
        let ui_visible = self.overlay.visible;
        let photo = self.current_photo();
        ViewerSnapshot {
            photo,
            index: self.navigation.current(),
            total: self.navigation.len(),
            position_label: self.navigation.position_label(),
            progress: self.navigation.progress(),
            can_prev: self.navigation.can_prev(),
            can_next: self.navigation.can_next(),
            scale: self.transform.scale,
            zoom_percent: self.transform.scale.percent(),
            rotation: self.transform.rotation,
            css_transform: self.transform.to_css(),
            image_loaded: self.loading.image_loaded,
            load_error: self.loading.error.as_deref(),
            spinner_visible: self.loading.spinner_visible(self.host_loading),
            ui_visible,
            chrome_visible: self.host_show_ui && (ui_visible || !device.is_mobile),
            extended_info_visible: self.panels.info_open && ui_visible && !device.is_mobile,
            mobile_info_visible: self.panels.mobile_info_expanded && device.is_mobile,
            info_open: self.panels.info_open,
            liked: self.panels.liked,
            is_fullscreen: self.fullscreen.is_fullscreen,
            device,
            size_label: photo.size_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::newtypes::scale_bounds;
    use crate::test_utils::assert_abs_diff_eq;

    fn sequence(count: usize) -> PhotoSequence {
        let photos = (0..count)
            .map(|i| PhotoRecord::new(format!("p{i}"), format!("https://cdn.test/{i}.jpg"), format!("{i}.jpg")))
            .collect();
        PhotoSequence::new(photos).expect("unique ids")
    }

    fn open_desktop(count: usize, start: usize) -> (ViewerSession, Vec<Effect>) {
        ViewerSession::open(
            sequence(count),
            start,
            ViewerSettings::default(),
            ViewportSignals::desktop(),
        )
        .expect("non-empty sequence")
    }

    fn open_mobile(count: usize, start: usize) -> (ViewerSession, Vec<Effect>) {
        ViewerSession::open(
            sequence(count),
            start,
            ViewerSettings::default(),
            ViewportSignals::phone_portrait(),
        )
        .expect("non-empty sequence")
    }

    fn scheduled(effects: &[Effect]) -> Vec<(TimerId, Duration)> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::ScheduleTimer { id, delay } => Some((*id, *delay)),
                _ => None,
            })
            .collect()
    }

    fn ticket_of(effects: &[Effect]) -> LoadTicket {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::LoadImage { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .expect("a load was started")
    }

    #[test]
    fn empty_sequence_cannot_open() {
        let err = ViewerSession::open(
            PhotoSequence::default(),
            0,
            ViewerSettings::default(),
            ViewportSignals::desktop(),
        )
        .unwrap_err();
        assert_eq!(err, ViewerError::EmptySequence);
    }

    #[test]
    fn open_clamps_start_index() {
        let (session, _) = open_desktop(3, 99);
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn desktop_open_shows_chrome_with_desktop_delay() {
        let (session, effects) = open_desktop(3, 0);
        assert_eq!(effects[0], Effect::ListenKeyboard(true));
        assert_eq!(scheduled(&effects), vec![(TimerId(1), Duration::from_millis(3000))]);
        assert!(session.is_ui_visible());
    }

    #[test]
    fn mobile_open_starts_hidden_without_timer() {
        let (session, effects) = open_mobile(3, 0);
        assert!(scheduled(&effects).is_empty());
        assert!(!session.is_ui_visible());
        assert_eq!(session.pending_hide_timer(), None);
    }

    #[test]
    fn open_loads_current_and_preloads_neighbours() {
        let (_, effects) = open_desktop(5, 2);
        assert!(effects.contains(&Effect::LoadImage {
            ticket: LoadTicket(1),
            url: "https://cdn.test/2.jpg".to_string(),
            warm: false,
        }));
        assert!(effects.contains(&Effect::Preload(vec![
            "https://cdn.test/3.jpg".to_string(),
            "https://cdn.test/1.jpg".to_string(),
            "https://cdn.test/4.jpg".to_string(),
            "https://cdn.test/0.jpg".to_string(),
        ])));
    }

    #[test]
    fn navigation_resets_per_photo_state() {
        let (mut session, effects) = open_desktop(3, 0);
        session.handle(Message::ImageLoaded(ticket_of(&effects)));
        session.handle(Message::ZoomIn);
        session.handle(Message::Rotate);
        session.handle(Message::ToggleMobileInfo);
        session.handle(Message::ToggleLike);

        let (outcome, effects) = session.next();
        assert_eq!(outcome, NavigationOutcome::Moved { from: 0, to: 1 });
        assert!(effects.contains(&Effect::NotifyNavigated {
            direction: Direction::Next,
            index: 1
        }));
        assert!(session.transform().is_identity());
        assert!(!session.is_image_loaded());
        assert!(!session.is_mobile_info_expanded());
        assert!(session.is_liked());
    }

    #[test]
    fn boundary_navigation_is_a_no_op() {
        let (mut session, _) = open_desktop(2, 0);
        session.handle(Message::ZoomIn);
        let (outcome, effects) = session.prev();
        assert_eq!(outcome, NavigationOutcome::AtBoundary);
        assert!(effects.is_empty());
        assert!(!session.transform().is_identity());
    }

    #[test]
    fn stale_load_signal_is_ignored() {
        let (mut session, open_effects) = open_desktop(3, 0);
        let first = ticket_of(&open_effects);
        session.next();
        assert!(session.handle(Message::ImageLoaded(first)).is_empty());
        assert!(!session.is_image_loaded());
    }

    #[test]
    fn load_signal_notifies_once_and_warms_url() {
        let (mut session, effects) = open_desktop(3, 0);
        let ticket = ticket_of(&effects);
        assert_eq!(
            session.handle(Message::ImageLoaded(ticket)),
            vec![Effect::NotifyImageLoaded { index: 0 }]
        );
        assert!(session.handle(Message::ImageLoaded(ticket)).is_empty());
        assert!(session.is_preloaded("https://cdn.test/0.jpg"));
    }

    #[test]
    fn load_failure_is_reported_and_keeps_spinner() {
        let (mut session, effects) = open_desktop(3, 0);
        let effects = session.handle(Message::ImageFailed {
            ticket: ticket_of(&effects),
            reason: "HTTP 404".to_string(),
        });
        assert_eq!(
            effects,
            vec![Effect::NotifyImageError {
                index: 0,
                reason: "HTTP 404".to_string()
            }]
        );
        let snapshot = session.snapshot();
        assert!(snapshot.spinner_visible);
        assert_eq!(snapshot.load_error, Some("HTTP 404"));
        assert!(session.can_next());
    }

    #[test]
    fn show_cancels_previous_hide_timer() {
        let (mut session, _) = open_desktop(3, 0);
        let effects = session.handle(Message::ShowUi);
        assert_eq!(
            effects,
            vec![
                Effect::CancelTimer(TimerId(1)),
                Effect::ScheduleTimer {
                    id: TimerId(2),
                    delay: Duration::from_millis(3000)
                },
            ]
        );
    }

    #[test]
    fn stale_timer_does_not_hide() {
        let (mut session, _) = open_desktop(3, 0);
        session.handle(Message::ShowUi);
        assert!(session.handle(Message::TimerFired(TimerId(1))).is_empty());
        assert!(session.is_ui_visible());
        assert_eq!(
            session.handle(Message::TimerFired(TimerId(2))),
            vec![Effect::UiVisibilityChanged(false)]
        );
        assert!(!session.is_ui_visible());
    }

    #[test]
    fn close_cancels_timers_and_detaches_keyboard() {
        let (mut session, _) = open_desktop(3, 0);
        let effects = session.handle(Message::Close);
        assert_eq!(
            effects,
            vec![
                Effect::CancelTimer(TimerId(1)),
                Effect::ListenKeyboard(false),
                Effect::NotifyClose,
            ]
        );
        assert!(session.is_closed());
        assert!(session.handle(Message::Next).is_empty());
        assert!(session.handle(Message::Close).is_empty());
        assert_eq!(session.next().0, NavigationOutcome::Closed);
    }

    #[test]
    fn operations_after_close_are_inert() {
        let (mut session, effects) = open_desktop(3, 0);
        let ticket = ticket_of(&effects);
        session.handle(Message::Close);

        let mouse_move = PointerEvent::new(PointerKind::Mouse, PointerPhase::Move, 10.0, 10.0);
        assert!(session.register_gesture(mouse_move).is_empty());
        assert!(session.show_ui_temporarily().is_empty());
        assert!(session.on_image_load_signal(ticket).is_empty());
        assert!(session.zoom_in().is_empty());
        assert!(session.zoom_out().is_empty());
        assert!(session.set_scale(3.0).is_empty());
        assert!(session.rotate().is_empty());
        assert!(session.toggle_info().is_empty());
        assert!(session.toggle_like().is_empty());
        assert!(session.toggle_fullscreen().is_empty());
        assert!(session.close().is_empty());

        assert!(session.transform().is_identity());
        assert!(!session.is_image_loaded());
        assert!(!session.is_info_open());
        assert!(!session.is_liked());
        assert_eq!(session.pending_hide_timer(), None);
    }

    #[test]
    fn close_cancels_pending_orientation_debounce() {
        let (mut session, _) = open_mobile(3, 0);
        let effects =
            session.handle(Message::OrientationChanged(ViewportSignals::new(844.0, 390.0, true)));
        let (timer, _) = scheduled(&effects)[0];

        let effects = session.handle(Message::Close);
        assert_eq!(
            effects,
            vec![
                Effect::CancelTimer(timer),
                Effect::ListenKeyboard(false),
                Effect::NotifyClose,
            ]
        );
        assert!(session.handle(Message::TimerFired(timer)).is_empty());
        assert!(!session.device().is_landscape);
    }

    #[test]
    fn keys_dispatch_to_operations() {
        let (mut session, _) = open_desktop(3, 0);
        session.handle(Message::KeyPressed(Key::ArrowRight));
        assert_eq!(session.current_index(), 1);
        session.handle(Message::KeyPressed(Key::Character('=')));
        assert_abs_diff_eq!(session.transform().scale.value(), 1.2, epsilon = 1e-5);
        session.handle(Message::KeyPressed(Key::Character('R')));
        assert_eq!(session.transform().rotation.degrees(), 90);
        session.handle(Message::KeyPressed(Key::Character('i')));
        assert!(session.is_info_open());
        let effects = session.handle(Message::KeyPressed(Key::Escape));
        assert!(effects.contains(&Effect::NotifyClose));
    }

    #[test]
    fn wheel_zooms_on_desktop_only() {
        let (mut desktop, _) = open_desktop(1, 0);
        desktop.handle(Message::Wheel { delta_y: -100.0 });
        assert_abs_diff_eq!(desktop.transform().scale.value(), 1.1, epsilon = 1e-5);
        desktop.handle(Message::Wheel { delta_y: 0.0 });
        assert_abs_diff_eq!(desktop.transform().scale.value(), 1.1, epsilon = 1e-5);

        let (mut mobile, _) = open_mobile(1, 0);
        mobile.handle(Message::Wheel { delta_y: 100.0 });
        assert!(mobile.transform().scale.is_identity());
    }

    #[test]
    fn set_scale_is_clamped() {
        let (mut session, _) = open_desktop(1, 0);
        session.handle(Message::SetScale(50.0));
        assert_abs_diff_eq!(session.transform().scale.value(), scale_bounds::MAX);
    }

    #[test]
    fn fullscreen_follows_platform_events() {
        let (mut session, _) = open_desktop(1, 0);
        assert_eq!(session.handle(Message::ToggleFullscreen), vec![Effect::RequestFullscreen]);
        assert!(!session.is_fullscreen());
        session.handle(Message::FullscreenChanged(true));
        assert!(session.is_fullscreen());
        assert_eq!(session.handle(Message::ToggleFullscreen), vec![Effect::ExitFullscreen]);
    }

    #[test]
    fn becoming_mobile_hides_chrome() {
        let (mut session, _) = open_desktop(3, 0);
        let effects = session.handle(Message::Resized(ViewportSignals::new(500.0, 800.0, false)));
        assert!(effects.contains(&Effect::CancelTimer(TimerId(1))));
        assert!(effects.contains(&Effect::UiVisibilityChanged(false)));
        assert!(session.device().is_mobile);
    }

    #[test]
    fn orientation_change_is_debounced() {
        let (mut session, _) = open_mobile(3, 0);
        let effects =
            session.handle(Message::OrientationChanged(ViewportSignals::new(844.0, 390.0, true)));
        let timers = scheduled(&effects);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].1, Duration::from_millis(100));
        assert!(!session.device().is_landscape);

        let effects = session.handle(Message::TimerFired(timers[0].0));
        assert!(session.device().is_landscape);
        assert!(effects.contains(&Effect::DeviceChanged(session.device())));
    }

    #[test]
    fn snapshot_combines_host_flags() {
        let (mut session, effects) = open_mobile(2, 0);
        session.handle(Message::ImageLoaded(ticket_of(&effects)));
        let snapshot = session.snapshot();
        assert!(!snapshot.spinner_visible);
        assert!(!snapshot.chrome_visible);
        assert_eq!(snapshot.position_label, "1 / 2");

        session.handle(Message::SetHostLoading(true));
        session.handle(Message::ShowUi);
        let snapshot = session.snapshot();
        assert!(snapshot.spinner_visible);
        assert!(snapshot.chrome_visible);

        session.handle(Message::SetHostShowUi(false));
        assert!(!session.snapshot().chrome_visible);
    }
}
