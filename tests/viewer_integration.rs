// SPDX-License-Identifier: MPL-2.0
//! End-to-end viewer behavior through the driver and fake ports.

use approx::assert_abs_diff_eq;
use gallery_lens::application::port::{
    Fullscreen, FullscreenError, ImageLoader, LoadTicket, ViewerHost,
};
use gallery_lens::domain::photo::{PhotoRecord, PhotoSequence};
use gallery_lens::domain::ui::newtypes::scale_bounds;
use gallery_lens::infrastructure::ManualScheduler;
use gallery_lens::ui::state::{PinchEvent, PinchPhase, PointerEvent, PointerKind, PointerPhase, ViewportSignals};
use gallery_lens::ui::viewer::{Key, Message, Ports, ViewerDriver, ViewerSettings};
use std::time::Duration;

#[derive(Debug, Default)]
struct FakeLoader {
    loads: Vec<(LoadTicket, String)>,
    preloads: Vec<String>,
}

impl ImageLoader for FakeLoader {
    fn load(&mut self, ticket: LoadTicket, url: &str) {
        self.loads.push((ticket, url.to_string()));
    }

    fn preload(&mut self, url: &str) {
        self.preloads.push(url.to_string());
    }
}

#[derive(Debug, Default)]
struct FakeFullscreen;

impl Fullscreen for FakeFullscreen {
    fn request(&mut self) -> Result<(), FullscreenError> {
        Ok(())
    }

    fn exit(&mut self) -> Result<(), FullscreenError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HostEvent {
    Close,
    Prev(usize, String),
    Next(usize, String),
    Loaded(String),
    Error(String, String),
}

#[derive(Debug, Default)]
struct FakeHost {
    events: Vec<HostEvent>,
    keyboard_attaches: usize,
    keyboard_detaches: usize,
}

impl ViewerHost for FakeHost {
    fn on_close(&mut self) {
        self.events.push(HostEvent::Close);
    }

    fn on_prev(&mut self, index: usize, photo: &PhotoRecord) {
        self.events.push(HostEvent::Prev(index, photo.id.as_str().to_string()));
    }

    fn on_next(&mut self, index: usize, photo: &PhotoRecord) {
        self.events.push(HostEvent::Next(index, photo.id.as_str().to_string()));
    }

    fn on_image_loaded(&mut self, _index: usize, photo: &PhotoRecord) {
        self.events.push(HostEvent::Loaded(photo.id.as_str().to_string()));
    }

    fn on_image_error(&mut self, _index: usize, photo: &PhotoRecord, reason: &str) {
        self.events
            .push(HostEvent::Error(photo.id.as_str().to_string(), reason.to_string()));
    }

    fn listen_keyboard(&mut self, active: bool) {
        if active {
            self.keyboard_attaches += 1;
        } else {
            self.keyboard_detaches += 1;
        }
    }
}

type Driver = ViewerDriver<ManualScheduler, FakeLoader, FakeFullscreen, FakeHost>;

fn photos(ids: &[&str]) -> PhotoSequence {
    let records = ids
        .iter()
        .map(|id| PhotoRecord::new(*id, format!("https://cdn.test/{id}.jpg"), format!("{id}.jpg")))
        .collect();
    PhotoSequence::new(records).expect("unique ids")
}

fn open(ids: &[&str], start: usize, signals: ViewportSignals) -> Driver {
    ViewerDriver::open(
        photos(ids),
        start,
        ViewerSettings::default(),
        signals,
        Ports {
            scheduler: ManualScheduler::new(),
            loader: FakeLoader::default(),
            fullscreen: FakeFullscreen,
            host: FakeHost::default(),
        },
    )
    .expect("non-empty sequence")
}

fn last_ticket(driver: &Driver) -> LoadTicket {
    driver.loader().loads.last().expect("a load was started").0
}

fn touch(phase: PointerPhase, x: f32, y: f32) -> Message {
    Message::Pointer(PointerEvent::new(PointerKind::Touch, phase, x, y))
}

#[test]
fn scale_stays_clamped_under_any_input() {
    let mut driver = open(&["a"], 0, ViewportSignals::desktop());
    for _ in 0..50 {
        driver.send(Message::ZoomIn);
    }
    assert_abs_diff_eq!(driver.session().transform().scale.value(), scale_bounds::MAX);

    for _ in 0..100 {
        driver.send(Message::Wheel { delta_y: 120.0 });
    }
    assert_abs_diff_eq!(driver.session().transform().scale.value(), scale_bounds::MIN);

    for value in [0.0, -3.0, f32::NAN, f32::INFINITY, 1e9] {
        driver.send(Message::SetScale(value));
        let scale = driver.session().transform().scale.value();
        assert!((scale_bounds::MIN..=scale_bounds::MAX).contains(&scale), "{value} -> {scale}");
    }
}

#[test]
fn navigation_never_leaves_the_sequence() {
    let mut driver = open(&["a", "b", "c"], 7, ViewportSignals::desktop());
    assert_eq!(driver.session().current_index(), 2);

    driver.send(Message::Next);
    assert_eq!(driver.session().current_index(), 2);
    assert!(driver.host().events.is_empty());

    for _ in 0..5 {
        driver.send(Message::KeyPressed(Key::ArrowLeft));
    }
    assert_eq!(driver.session().current_index(), 0);
    assert!(!driver.session().can_prev());
    assert_eq!(
        driver.host().events,
        vec![
            HostEvent::Prev(1, "b".to_string()),
            HostEvent::Prev(0, "a".to_string())
        ]
    );
}

#[test]
fn switching_photos_resets_transform_and_load_state() {
    let mut driver = open(&["a", "b"], 0, ViewportSignals::desktop());
    driver.send(Message::ImageLoaded(last_ticket(&driver)));
    driver.send(Message::ZoomIn);
    driver.send(Message::Rotate);
    assert!(driver.session().is_image_loaded());

    driver.send(Message::Next);
    let session = driver.session();
    assert!(session.transform().is_identity());
    assert!(!session.is_image_loaded());
    assert!(session.snapshot().spinner_visible);
}

#[test]
fn neighbours_are_requested_once() {
    let mut driver = open(&["a", "b", "c", "d", "e"], 2, ViewportSignals::desktop());
    driver.send(Message::Next);
    driver.send(Message::Previous);
    driver.send(Message::Next);

    let mut preloads = driver.loader().preloads.clone();
    let requested = preloads.len();
    preloads.sort();
    preloads.dedup();
    assert_eq!(preloads.len(), requested);
    assert_eq!(requested, 5);
}

#[test]
fn preloaded_photo_is_served_warm() {
    let mut driver = open(&["a", "b", "c"], 0, ViewportSignals::desktop());
    let url = "https://cdn.test/b.jpg".to_string();
    assert!(driver.loader().preloads.contains(&url));
    driver.send(Message::PreloadCompleted(url.clone()));
    driver.send(Message::PreloadCompleted(url.clone()));
    driver.send(Message::Next);

    let stats = driver.session().preload_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.insertions, 1);
    assert_eq!(driver.loader().loads.last().map(|(_, u)| u.clone()), Some(url));
    assert!(driver.session().is_image_loaded());
    assert!(!driver.session().snapshot().spinner_visible);
    assert_eq!(driver.host().events.last(), Some(&HostEvent::Loaded("b".to_string())));
}

#[test]
fn hide_timer_fires_once_after_last_show() {
    let mut driver = open(&["a"], 0, ViewportSignals::desktop());
    for _ in 0..4 {
        driver.advance(Duration::from_millis(1000));
        driver.send(Message::ShowUi);
    }
    assert_eq!(driver.scheduler().pending_count(), 1);

    driver.advance(Duration::from_millis(2999));
    assert!(driver.session().is_ui_visible());
    driver.advance(Duration::from_millis(1));
    assert!(!driver.session().is_ui_visible());
    assert_eq!(driver.scheduler().pending_count(), 0);
}

#[test]
fn mouse_movement_keeps_desktop_chrome_up() {
    let mut driver = open(&["a"], 0, ViewportSignals::desktop());
    driver.advance(Duration::from_millis(2500));
    driver.send(Message::Pointer(PointerEvent::new(
        PointerKind::Mouse,
        PointerPhase::Move,
        10.0,
        10.0,
    )));
    driver.advance(Duration::from_millis(2900));
    assert!(driver.session().is_ui_visible());
    driver.advance(Duration::from_millis(100));
    assert!(!driver.session().is_ui_visible());
}

#[test]
fn late_load_signal_for_previous_photo_is_ignored() {
    let mut driver = open(&["a", "b"], 0, ViewportSignals::desktop());
    let first = last_ticket(&driver);
    driver.send(Message::Next);
    driver.send(Message::ImageLoaded(first));
    driver.send(Message::ImageFailed {
        ticket: first,
        reason: "late".to_string(),
    });
    assert!(!driver.session().is_image_loaded());
    assert!(driver
        .host()
        .events
        .iter()
        .all(|event| !matches!(event, HostEvent::Loaded(_) | HostEvent::Error(..))));
}

#[test]
fn three_photo_walkthrough() {
    let mut driver = open(&["a", "b", "c"], 0, ViewportSignals::desktop());
    assert_eq!(driver.host().keyboard_attaches, 1);
    assert_eq!(driver.loader().loads[0].1, "https://cdn.test/a.jpg");

    driver.send(Message::ImageLoaded(last_ticket(&driver)));
    driver.send(Message::KeyPressed(Key::ArrowRight));
    driver.send(Message::ImageLoaded(last_ticket(&driver)));
    driver.send(Message::KeyPressed(Key::ArrowRight));
    driver.send(Message::ImageFailed {
        ticket: last_ticket(&driver),
        reason: "HTTP 500".to_string(),
    });
    driver.send(Message::KeyPressed(Key::ArrowRight));
    driver.send(Message::KeyPressed(Key::ArrowLeft));
    driver.send(Message::KeyPressed(Key::Escape));
    driver.send(Message::KeyPressed(Key::ArrowLeft));

    assert_eq!(
        driver.host().events,
        vec![
            HostEvent::Loaded("a".to_string()),
            HostEvent::Next(1, "b".to_string()),
            HostEvent::Loaded("b".to_string()),
            HostEvent::Next(2, "c".to_string()),
            HostEvent::Error("c".to_string(), "HTTP 500".to_string()),
            HostEvent::Prev(1, "b".to_string()),
            HostEvent::Loaded("b".to_string()),
            HostEvent::Close,
        ]
    );
    assert_eq!(driver.host().keyboard_detaches, 1);
    assert_eq!(driver.session().current_index(), 1);
    assert_eq!(driver.scheduler().pending_count(), 0);
}

#[test]
fn rotation_accumulates_and_displays_mod_360() {
    let mut driver = open(&["a"], 0, ViewportSignals::desktop());
    for _ in 0..5 {
        driver.send(Message::KeyPressed(Key::Character('r')));
    }
    let snapshot = driver.session().snapshot();
    assert_eq!(snapshot.rotation.degrees(), 450);
    assert_eq!(snapshot.rotation.display_degrees(), 90);
    assert!(snapshot.css_transform.contains("rotate(450deg)"));
}

#[test]
fn horizontal_swipe_navigates_once() {
    let mut driver = open(&["a", "b", "c"], 0, ViewportSignals::phone_portrait());
    driver.send(touch(PointerPhase::Down, 200.0, 300.0));
    driver.send(touch(PointerPhase::Move, 170.0, 303.0));
    driver.send(touch(PointerPhase::Move, 140.0, 305.0));
    driver.send(touch(PointerPhase::Up, 140.0, 305.0));

    assert_eq!(driver.session().current_index(), 1);
    assert_eq!(driver.host().events, vec![HostEvent::Next(1, "b".to_string())]);

    driver.send(touch(PointerPhase::Down, 100.0, 300.0));
    driver.send(touch(PointerPhase::Move, 160.0, 295.0));
    driver.send(touch(PointerPhase::Up, 160.0, 295.0));
    assert_eq!(driver.session().current_index(), 0);
}

#[test]
fn short_drag_does_not_navigate() {
    let mut driver = open(&["a", "b"], 0, ViewportSignals::phone_portrait());
    driver.send(touch(PointerPhase::Down, 200.0, 300.0));
    driver.send(touch(PointerPhase::Move, 170.0, 300.0));
    driver.send(touch(PointerPhase::Up, 170.0, 300.0));
    assert_eq!(driver.session().current_index(), 0);
    assert!(!driver.session().is_ui_visible());
}

#[test]
fn tap_shows_mobile_chrome_without_navigating() {
    let mut driver = open(&["a", "b"], 0, ViewportSignals::phone_portrait());
    assert!(!driver.session().is_ui_visible());
    assert_eq!(driver.scheduler().pending_count(), 0);

    driver.send(touch(PointerPhase::Down, 100.0, 100.0));
    driver.send(touch(PointerPhase::Move, 104.0, 103.0));
    driver.send(touch(PointerPhase::Up, 104.0, 103.0));

    assert!(driver.session().is_ui_visible());
    assert_eq!(driver.session().current_index(), 0);
    assert!(driver.host().events.is_empty());
    let timer = driver.session().pending_hide_timer().expect("hide armed");
    assert_eq!(
        driver.scheduler().deadline(timer),
        Some(Duration::from_millis(4000))
    );
}

#[test]
fn pinch_scales_from_baseline() {
    let mut driver = open(&["a"], 0, ViewportSignals::phone_portrait());
    driver.send(Message::SetScale(2.0));
    for (phase, distance) in [
        (PinchPhase::Start, 100.0),
        (PinchPhase::Update, 150.0),
        (PinchPhase::Update, 50.0),
        (PinchPhase::End, 50.0),
    ] {
        driver.send(Message::Pinch(PinchEvent { phase, distance }));
    }
    assert_abs_diff_eq!(driver.session().transform().scale.value(), 1.0, epsilon = 1e-5);
}

#[test]
fn rotating_the_phone_updates_profile_after_debounce() {
    let mut driver = open(&["a", "b"], 1, ViewportSignals::phone_portrait());
    driver.send(Message::ZoomIn);
    driver.send(Message::OrientationChanged(ViewportSignals::new(844.0, 390.0, true)));
    driver.advance(Duration::from_millis(50));
    assert!(!driver.session().device().is_landscape);
    driver.advance(Duration::from_millis(50));
    assert!(driver.session().device().is_landscape);
    assert_eq!(driver.session().current_index(), 1);
    assert!(!driver.session().transform().is_identity());
}
