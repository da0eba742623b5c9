// SPDX-License-Identifier: MPL-2.0
//! Command-line replay tool.
//!
//! Loads a saved listing, prints the first gallery page, then opens the viewer
//! and replays a key script against it on a virtual clock.

use gallery_lens::application::gallery::GalleryState;
use gallery_lens::application::port::{
    Fullscreen, FullscreenError, ImageLoader, LoadTicket, PhotoSource,
};
use gallery_lens::application::port::ViewerHost;
use gallery_lens::config::{self, Config, SourceKind};
use gallery_lens::domain::photo::PhotoRecord;
use gallery_lens::infrastructure::{ListingFileSource, ListingFormat, ManualScheduler};
use gallery_lens::ui::state::ViewportSignals;
use gallery_lens::ui::viewer::{Key, Message, Ports, ViewerDriver, ViewerSettings};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

const USAGE: &str = "\
usage: gallery-lens [--config-dir DIR] [--start N] [--mobile] [--script KEYS] <listing.json>

  --config-dir DIR  read settings.toml from DIR
  --start N         open the viewer at photo N (0-based)
  --mobile          emulate a touch phone in portrait
  --script KEYS     comma-separated keys to replay, e.g. ArrowRight,r,wait:3000,Escape";

struct Args {
    config_dir: Option<PathBuf>,
    start: usize,
    mobile: bool,
    script: Option<String>,
    listing: PathBuf,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let parsed = Args {
        config_dir: args.opt_value_from_str("--config-dir")?,
        start: args.opt_value_from_str("--start")?.unwrap_or(0),
        mobile: args.contains("--mobile"),
        script: args.opt_value_from_str("--script")?,
        listing: args.free_from_str()?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring extra arguments: {rest:?}");
    }
    Ok(parsed)
}

/// Completes every load immediately.
#[derive(Debug, Default)]
struct InstantLoader {
    loads: Vec<LoadTicket>,
    preloads: Vec<String>,
}

impl ImageLoader for InstantLoader {
    fn load(&mut self, ticket: LoadTicket, url: &str) {
        println!("  load    {ticket} {url}");
        self.loads.push(ticket);
    }

    fn preload(&mut self, url: &str) {
        println!("  preload {url}");
        self.preloads.push(url.to_string());
    }
}

struct NoFullscreen;

impl Fullscreen for NoFullscreen {
    fn request(&mut self) -> Result<(), FullscreenError> {
        Err(FullscreenError::Unsupported)
    }

    fn exit(&mut self) -> Result<(), FullscreenError> {
        Err(FullscreenError::Unsupported)
    }
}

struct PrintHost;

impl ViewerHost for PrintHost {
    fn on_close(&mut self) {
        println!("  closed");
    }

    fn on_prev(&mut self, index: usize, photo: &PhotoRecord) {
        println!("  prev -> {} {}", index + 1, photo.title());
    }

    fn on_next(&mut self, index: usize, photo: &PhotoRecord) {
        println!("  next -> {} {}", index + 1, photo.title());
    }

    fn on_image_loaded(&mut self, index: usize, photo: &PhotoRecord) {
        println!("  loaded {} {}", index + 1, photo.title());
    }
}

type CliDriver = ViewerDriver<ManualScheduler, InstantLoader, NoFullscreen, PrintHost>;

fn listing_format(config: &Config) -> ListingFormat {
    ListingFormat::from_config(&config.source).unwrap_or_else(|err| {
        log::warn!("{err}; using local placeholder URLs");
        match config.source.kind {
            SourceKind::ObjectStorage => ListingFormat::ObjectStorage {
                bucket_url: "http://localhost".to_string(),
                bucket: "photos".to_string(),
            },
            SourceKind::FileServer => ListingFormat::FileServer {
                base_url: "http://localhost".to_string(),
                share_id: "public".to_string(),
            },
        }
    })
}

/// Completes the loads the driver has started since the last call.
fn settle(driver: &mut CliDriver) {
    loop {
        let loader = &mut driver.ports_mut().loader;
        let loads = std::mem::take(&mut loader.loads);
        let preloads = std::mem::take(&mut loader.preloads);
        if loads.is_empty() && preloads.is_empty() {
            return;
        }
        for url in preloads {
            driver.send(Message::PreloadCompleted(url));
        }
        for ticket in loads {
            driver.send(Message::ImageLoaded(ticket));
        }
    }
}

fn replay(driver: &mut CliDriver, script: &str) {
    for step in script.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if driver.session().is_closed() {
            break;
        }
        if let Some(ms) = step.strip_prefix("wait:") {
            match ms.parse::<u64>() {
                Ok(ms) => {
                    println!("> wait {ms} ms");
                    driver.advance(Duration::from_millis(ms));
                }
                Err(err) => log::warn!("bad wait step {step:?}: {err}"),
            }
        } else {
            println!("> key {step}");
            driver.send(Message::KeyPressed(Key::from_name(step)));
        }
        settle(driver);

        let snapshot = driver.session().snapshot();
        println!(
            "  [{}] {} zoom {}% rotate {}deg ui {}",
            snapshot.position_label,
            snapshot.photo.title(),
            snapshot.zoom_percent,
            snapshot.rotation.display_degrees(),
            if snapshot.chrome_visible { "on" } else { "off" }
        );
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let (config, warning) = match &args.config_dir {
        Some(dir) => config::load_from_dir(dir),
        None => config::load(),
    };
    if let Some(warning) = warning {
        eprintln!("warning: {warning}");
    }

    let (source, folder) = ListingFileSource::for_file(&args.listing, listing_format(&config));
    let source: Arc<dyn PhotoSource> = Arc::new(source);
    let mut state = GalleryState::default();
    state.load(source, &folder, &config.gallery).await;

    let gallery = match &state {
        GalleryState::Ready(gallery) => gallery,
        GalleryState::Failed(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
        GalleryState::Loading => return ExitCode::FAILURE,
    };

    let pagination = gallery.pagination();
    if let Some((first, last)) = pagination.showing() {
        println!(
            "page {}/{}: showing {first}-{last} of {}",
            pagination.page(),
            pagination.total_pages(),
            pagination.total()
        );
    }
    for (offset, photo) in gallery.page_items().iter().enumerate() {
        println!(
            "{:>4}  {:<32} {:>10}  {}",
            pagination.range().start + offset,
            photo.title(),
            photo.size_label(),
            gallery.tile_url(photo)
        );
    }

    let signals = if args.mobile {
        ViewportSignals::phone_portrait()
    } else {
        ViewportSignals::desktop()
    };
    let ports = Ports {
        scheduler: ManualScheduler::new(),
        loader: InstantLoader::default(),
        fullscreen: NoFullscreen,
        host: PrintHost,
    };

    println!("> open {}", args.start);
    let mut driver = match ViewerDriver::open(
        gallery.sequence().clone(),
        args.start,
        ViewerSettings::from(&config),
        signals,
        ports,
    ) {
        Ok(driver) => driver,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    settle(&mut driver);

    if let Some(script) = &args.script {
        replay(&mut driver, script);
    }

    let stats = driver.session().preload_stats();
    println!(
        "preload: {} warm, {} hits, {} misses ({:.0}% hit rate)",
        stats.warm_count,
        stats.hits,
        stats.misses,
        stats.hit_rate()
    );
    ExitCode::SUCCESS
}
