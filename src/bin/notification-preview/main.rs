#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod colors;
mod constants;
mod ui;

use assets::{load_logo, load_window_icon};
use constants::{
    APP_NAME, INITIAL_BODY, INITIAL_TITLE, LOGO_PATH, LOGO_SIZE, MIN_WINDOW_SIZE, WINDOW_SIZE,
    WARNING_TOAST_SECONDS,
};
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use notification_preview::{Bitmap, ImageFetcher, PreviewContent, PreviewMode, TargetBox, fit_cover};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, mpsc};

/// A fetch that has been started but has not reported back yet.
///
/// Replacing or dropping it drops the receiver, so a superseded fetch has
/// nowhere to deliver its result.
struct PendingFetch {
    rx: mpsc::Receiver<Option<Bitmap>>,
}

/// How a finished fetch changed the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchResolution {
    Loaded,
    /// No image; the user gets a warning and the panes keep the placeholder.
    Failed,
}

/// A fitted picture on the GPU, kept alive for as long as it is displayed.
struct FittedTexture {
    target: TargetBox,
    texture: TextureHandle,
}

/// Icon drawn in each notification header.
pub enum AppIcon {
    /// `logo.png` from the working directory.
    Logo(TextureHandle),
    /// Generated fallback when no logo could be loaded.
    Glyph,
}

/// Main application state for the notification previewer.
pub struct PreviewApp {
    title: String,
    body: String,
    image_url: String,
    /// What the preview panes show, rebuilt on every generate.
    content: PreviewContent,
    pending: Option<PendingFetch>,
    fetcher: ImageFetcher,
    runtime: tokio::runtime::Runtime,
    pictures: HashMap<PreviewMode, FittedTexture>,
    icon: AppIcon,
    toasts: Toasts,
}

impl PreviewApp {
    fn new(cc: &eframe::CreationContext<'_>) -> std::io::Result<Self> {
        let icon = match load_logo(Path::new(LOGO_PATH), LOGO_SIZE) {
            Ok(logo) => {
                let image = ColorImage::from_rgba_unmultiplied(
                    [logo.width as usize, logo.height as usize],
                    &logo.pixels,
                );
                AppIcon::Logo(cc.egui_ctx.load_texture("app-logo", image, TextureOptions::LINEAR))
            }
            Err(err) => {
                log::info!("Using generated app icon: {err}");
                AppIcon::Glyph
            }
        };

        let mut app = Self::with_icon(icon)?;
        app.generate(&cc.egui_ctx);

        Ok(app)
    }

    /// App state with the initial inputs and nothing generated yet.
    fn with_icon(icon: AppIcon) -> std::io::Result<Self> {
        let toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        Ok(Self {
            title: INITIAL_TITLE.to_owned(),
            body: INITIAL_BODY.to_owned(),
            image_url: String::new(),
            content: PreviewContent::default(),
            pending: None,
            fetcher: ImageFetcher::default(),
            runtime: tokio::runtime::Runtime::new()?,
            pictures: HashMap::new(),
            icon,
            toasts,
        })
    }

    /// Rebuilds the preview from the current inputs.
    ///
    /// Text updates right away. A non-empty URL is fetched in the background
    /// and the picture follows once [`Self::poll_fetch`] sees the result.
    fn generate(&mut self, ctx: &egui::Context) {
        self.pictures.clear();
        self.content = PreviewContent {
            title: self.title.clone(),
            body: self.body.trim().to_owned(),
            image: None,
        };

        let url = self.image_url.trim().to_owned();
        if url.is_empty() {
            self.pending = None;
            return;
        }

        let tx = self.begin_fetch();
        let ctx = ctx.clone();
        let fetcher = self.fetcher.clone();

        self.runtime.spawn(async move {
            let image = fetcher.fetch(&url).await;
            // fails when a newer generate or a clear dropped the receiver
            if tx.send(image).is_err() {
                log::debug!("Dropping result of superseded fetch for {url}");
            }
            ctx.request_repaint();
        });
    }

    /// Replaces any pending fetch and returns the sender for the new one.
    fn begin_fetch(&mut self) -> mpsc::Sender<Option<Bitmap>> {
        let (tx, rx) = mpsc::channel();
        self.pending = Some(PendingFetch { rx });
        tx
    }

    fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
        self.image_url.clear();
        self.pending = None;
        self.content = PreviewContent::default();
        self.pictures.clear();
    }

    fn is_fetching(&self) -> bool {
        self.pending.is_some()
    }

    /// Picks up a finished fetch, if any, and warns when it brought no image.
    fn poll_fetch(&mut self) -> Option<FetchResolution> {
        let pending = self.pending.as_ref()?;

        let image = match pending.rx.try_recv() {
            Ok(image) => image,
            Err(mpsc::TryRecvError::Empty) => return None,
            // the fetch task died without reporting
            Err(mpsc::TryRecvError::Disconnected) => None,
        };
        self.pending = None;

        let resolution = self.apply_fetched(image);
        if resolution == FetchResolution::Failed {
            self.toasts.add(Toast {
                kind: ToastKind::Warning,
                text: "Couldn't load the image from that URL.\nPreview will show a placeholder."
                    .into(),
                options: ToastOptions::default()
                    .duration_in_seconds(WARNING_TOAST_SECONDS)
                    .show_icon(true),
                ..Default::default()
            });
        }

        Some(resolution)
    }

    fn apply_fetched(&mut self, image: Option<Bitmap>) -> FetchResolution {
        let resolution = match image {
            Some(_) => FetchResolution::Loaded,
            None => FetchResolution::Failed,
        };
        self.content.image = image;
        self.pictures.clear();
        resolution
    }

    /// Returns the picture for `mode` fitted to `target`, refitting when the box changes.
    fn picture_texture(
        &mut self,
        ctx: &egui::Context,
        mode: PreviewMode,
        target: TargetBox,
    ) -> Option<&TextureHandle> {
        let image = self.content.image.as_ref()?;

        let stale = self
            .pictures
            .get(&mode)
            .is_none_or(|picture| picture.target != target);
        if stale {
            let fitted = fit_cover(image, target)?;
            let color_image = ColorImage::from_rgb(
                [fitted.width() as usize, fitted.height() as usize],
                fitted.pixels(),
            );
            let texture = ctx.load_texture(
                format!("picture-{}", mode.name()),
                color_image,
                TextureOptions::LINEAR,
            );
            self.pictures
                .insert(mode, FittedTexture { target, texture });
        }

        self.pictures.get(&mode).map(|picture| &picture.texture)
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch();

        self.show_status_bar(ctx);
        self.show_input_panel(ctx);
        self.show_preview_panel(ctx);

        self.toasts.show(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size(WINDOW_SIZE)
        .with_min_inner_size(MIN_WINDOW_SIZE);

    match load_window_icon() {
        Ok(icon) => viewport = viewport.with_icon(Arc::new(icon)),
        Err(err) => log::warn!("Window icon unavailable: {err}"),
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(PreviewApp::new(cc)?))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use notification_preview::preview::{COLLAPSED_THUMBNAIL, EXPANDED_PICTURE};
    use notification_preview::{Picture, render_pane};
    use std::time::{Duration, Instant};

    fn app() -> PreviewApp {
        PreviewApp::with_icon(AppIcon::Glyph).unwrap()
    }

    fn red_bitmap() -> Bitmap {
        Bitmap::new(RgbImage::from_pixel(64, 32, Rgb([220, 30, 30])))
    }

    fn wait_for_fetch(app: &mut PreviewApp) -> FetchResolution {
        let deadline = Instant::now() + Duration::from_secs(20);
        loop {
            if let Some(resolution) = app.poll_fetch() {
                return resolution;
            }
            assert!(Instant::now() < deadline, "fetch never reported back");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn unreachable_url_warns_once_and_shows_placeholder() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let mut app = app();
        app.image_url = format!("http://127.0.0.1:{port}/missing.png");
        app.generate(&egui::Context::default());
        assert!(app.is_fetching());
        assert_eq!(app.content.title, INITIAL_TITLE);

        assert_eq!(wait_for_fetch(&mut app), FetchResolution::Failed);
        assert!(!app.is_fetching());
        assert_eq!(app.poll_fetch(), None);

        let pane = render_pane(&app.content, PreviewMode::Expanded, EXPANDED_PICTURE);
        assert_eq!(pane.picture, Picture::Placeholder);
    }

    #[test]
    fn delivered_image_is_shown() {
        let mut app = app();
        let tx = app.begin_fetch();
        assert_eq!(app.poll_fetch(), None);

        tx.send(Some(red_bitmap())).unwrap();
        assert_eq!(app.poll_fetch(), Some(FetchResolution::Loaded));
        assert!(!app.is_fetching());

        let pane = render_pane(&app.content, PreviewMode::Expanded, EXPANDED_PICTURE);
        let fitted = pane.picture.image().unwrap();
        assert_eq!((fitted.width(), fitted.height()), (360, 180));
    }

    #[test]
    fn vanished_fetch_task_counts_as_no_image() {
        let mut app = app();
        drop(app.begin_fetch());

        assert_eq!(app.poll_fetch(), Some(FetchResolution::Failed));
        assert!(app.content.image.is_none());
        assert_eq!(app.poll_fetch(), None);
    }

    #[test]
    fn superseded_fetch_cannot_deliver() {
        let mut app = app();
        let stale = app.begin_fetch();
        let current = app.begin_fetch();

        assert!(stale.send(Some(red_bitmap())).is_err());
        current.send(None).unwrap();
        assert_eq!(app.poll_fetch(), Some(FetchResolution::Failed));
        assert!(app.content.image.is_none());
    }

    #[test]
    fn clear_empties_inputs_and_preview() {
        let mut app = app();
        app.image_url = "https://example.com/a.png".to_owned();
        let tx = app.begin_fetch();
        tx.send(Some(red_bitmap())).unwrap();
        app.poll_fetch();
        assert!(app.content.image.is_some());

        let late = app.begin_fetch();
        app.clear();

        assert!(app.title.is_empty() && app.body.is_empty() && app.image_url.is_empty());
        assert!(!app.is_fetching());
        assert!(late.send(Some(red_bitmap())).is_err());
        assert_eq!(app.content.title, "");
        assert!(app.content.image.is_none());

        let pane = render_pane(&app.content, PreviewMode::Collapsed, COLLAPSED_THUMBNAIL);
        assert_eq!(pane.title, "Title");
        assert_eq!(pane.picture, Picture::Placeholder);
    }
}
