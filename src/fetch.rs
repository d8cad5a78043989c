//! Downloading and decoding the big-picture image.
//!
//! [`ImageFetcher::fetch`] never fails: every problem along the way (network,
//! HTTP status, undecodable payload, missing SVG support) is logged and turned
//! into `None`, which the preview shows as a placeholder.

use crate::Bitmap;
use reqwest::{StatusCode, Url, header};
use std::time::Duration;
use thiserror::Error;

/// How long a single image download may take, connection included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub const USER_AGENT: &str = concat!("notification-preview/", env!("CARGO_PKG_VERSION"));

/// Output width for rasterized SVG images. Height follows the aspect ratio.
pub const SVG_RASTER_WIDTH: u32 = 1200;

/// Errors that can occur while downloading or decoding an image.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("SVG images are not supported without a rasterizer")]
    SvgUnavailable,
    #[cfg(feature = "svg")]
    #[error(transparent)]
    SvgRender(#[from] crate::svg::SvgError),
}

/// Whether vector images can be rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgSupport {
    Rasterize,
    Unavailable,
}

impl Default for SvgSupport {
    fn default() -> Self {
        if cfg!(feature = "svg") {
            Self::Rasterize
        } else {
            Self::Unavailable
        }
    }
}

/// Fetches images over HTTP and decodes them into [`Bitmap`]s.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: reqwest::Client,
    timeout: Duration,
    svg: SvgSupport,
}

impl Default for ImageFetcher {
    fn default() -> Self {
        Self::new(FETCH_TIMEOUT)
    }
}

impl ImageFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
            svg: SvgSupport::default(),
        }
    }

    pub fn with_svg_support(mut self, svg: SvgSupport) -> Self {
        self.svg = svg;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Downloads and decodes `url`, or returns `None` if anything goes wrong.
    ///
    /// A blank URL returns `None` without touching the network.
    pub async fn fetch(&self, url: &str) -> Option<Bitmap> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }

        match self.try_fetch(url).await {
            Ok(bitmap) => {
                log::info!(
                    "Loaded image {url} ({}x{})",
                    bitmap.width(),
                    bitmap.height()
                );
                Some(bitmap)
            }
            Err(err) => {
                log::warn!("Couldn't load image {url}: {err}");
                None
            }
        }
    }

    /// Downloads and decodes `url`, reporting why it failed.
    pub async fn try_fetch(&self, url: &str) -> Result<Bitmap, FetchError> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = response.bytes().await?;

        self.decode_payload(url, content_type.as_deref(), &bytes)
    }

    /// Decodes a downloaded payload.
    ///
    /// Vector payloads only ever go through the rasterizer. If it is missing
    /// or fails, the bytes are not retried as a raster image.
    pub fn decode_payload(
        &self,
        url: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<Bitmap, FetchError> {
        if looks_like_svg(url, content_type) {
            self.rasterize_svg(bytes)
        } else {
            decode_raster(bytes)
        }
    }

    #[cfg_attr(not(feature = "svg"), allow(unused_variables))]
    fn rasterize_svg(&self, data: &[u8]) -> Result<Bitmap, FetchError> {
        match self.svg {
            #[cfg(feature = "svg")]
            SvgSupport::Rasterize => {
                let image = crate::svg::rasterize(data, SVG_RASTER_WIDTH)?;
                Ok(Bitmap::new(image.to_rgb8()))
            }
            _ => Err(FetchError::SvgUnavailable),
        }
    }
}

/// True if the declared content type mentions SVG or the URL path ends in `.svg`.
pub fn looks_like_svg(url: &str, content_type: Option<&str>) -> bool {
    if content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("svg")) {
        return true;
    }

    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_ascii_lowercase(),
        Err(_) => url.to_ascii_lowercase(),
    };
    path.ends_with(".svg")
}

/// Decodes PNG, JPEG or WebP bytes, dropping any alpha channel.
pub fn decode_raster(bytes: &[u8]) -> Result<Bitmap, FetchError> {
    let image = image::load_from_memory(bytes)?;
    Ok(Bitmap::new(image.to_rgb8()))
}
