//! Asynchronous thumbnail fetcher.
//!
//! Spawns a background thread per image URL to download and decode it into
//! an RGBA buffer ready for egui texture creation. Results come back over a
//! channel polled once per frame.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

/// Widest thumbnail kept in memory; larger images are scaled down.
pub const MAX_THUMBNAIL_WIDTH: u32 = 900;

/// Decoded image data (RGBA).
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Error while fetching or decoding a thumbnail
#[derive(Debug)]
pub struct ImageError {
    pub message: String,
    pub phase: &'static str,
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

impl std::error::Error for ImageError {}

type LoadResult = Result<ImageData, ImageError>;

/// Manages background image fetching and decoding.
pub struct ImageLoader {
    pending: HashMap<String, mpsc::Receiver<LoadResult>>,
    loaded: HashMap<String, ImageData>,
    failed: HashSet<String>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
            loaded: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Request an image to be fetched in the background. Repeated requests
    /// for a known URL are ignored, including ones that already failed.
    pub fn request(&mut self, url: &str) {
        if self.loaded.contains_key(url)
            || self.pending.contains_key(url)
            || self.failed.contains(url)
        {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let url_owned = url.to_string();

        std::thread::spawn(move || {
            let result = fetch_and_decode(&url_owned);
            let _ = tx.send(result);
        });

        self.pending.insert(url.to_string(), rx);
    }

    /// Poll for completed downloads. Call every frame.
    pub fn poll(&mut self) {
        let mut completed = Vec::new();
        for (url, rx) in &self.pending {
            match rx.try_recv() {
                Ok(Ok(data)) => {
                    log::debug!("Thumbnail ready: {} ({}x{})", url, data.width, data.height);
                    self.loaded.insert(url.clone(), data);
                    completed.push(url.clone());
                }
                Ok(Err(e)) => {
                    log::warn!("Thumbnail failed: {}: {}", url, e);
                    self.failed.insert(url.clone());
                    completed.push(url.clone());
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.failed.insert(url.clone());
                    completed.push(url.clone());
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }
        for url in completed {
            self.pending.remove(&url);
        }
    }

    /// Hand over every decoded image, leaving the loader's copy behind only
    /// as a "done" marker so the URL is not requested again.
    pub fn take_loaded(&mut self) -> Vec<(String, ImageData)> {
        let mut out = Vec::new();
        for (url, data) in self.loaded.iter_mut() {
            if data.rgba.is_empty() {
                continue;
            }
            let taken = ImageData {
                width: data.width,
                height: data.height,
                rgba: std::mem::take(&mut data.rgba),
            };
            out.push((url.clone(), taken));
        }
        out
    }

    pub fn is_failed(&self, url: &str) -> bool {
        self.failed.contains(url)
    }

    /// Number of images still being fetched.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

fn fetch_and_decode(url: &str) -> LoadResult {
    let resp = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(|e| ImageError {
            message: format!("Client error: {}", e),
            phase: "fetch",
        })?
        .get(url)
        .send()
        .map_err(|e| ImageError {
            message: format!("Request failed: {}", e),
            phase: "fetch",
        })?;

    if !resp.status().is_success() {
        return Err(ImageError {
            message: format!("HTTP {}", resp.status()),
            phase: "fetch",
        });
    }

    let bytes = resp.bytes().map_err(|e| ImageError {
        message: format!("Failed to read body: {}", e),
        phase: "fetch",
    })?;
    decode_and_cap(&bytes, MAX_THUMBNAIL_WIDTH)
}

/// Decode `bytes` and scale down to at most `max_width`, keeping the aspect.
pub fn decode_and_cap(bytes: &[u8], max_width: u32) -> LoadResult {
    let img = image::load_from_memory(bytes).map_err(|e| ImageError {
        message: e.to_string(),
        phase: "decode",
    })?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    let (w, h, pixels) = if w > max_width {
        let ratio = max_width as f32 / w as f32;
        let new_h = ((h as f32 * ratio) as u32).max(1);
        let resized = image::imageops::resize(
            &rgba,
            max_width,
            new_h,
            image::imageops::FilterType::Triangle,
        );
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Ok(ImageData {
        width: w,
        height: h,
        rgba: pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba([106, 227, 255, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn loader_deduplicates() {
        let mut loader = ImageLoader::new();
        loader.request("https://invalid.invalid/img.png");
        loader.request("https://invalid.invalid/img.png"); // should not duplicate
        assert_eq!(loader.pending_count(), 1);
    }

    #[test]
    fn failed_url_is_remembered_and_not_retried() {
        let mut loader = ImageLoader::new();
        loader.request("not a url");
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
        while loader.pending_count() > 0 && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(10));
            loader.poll();
        }
        assert!(loader.is_failed("not a url"));
        assert!(loader.take_loaded().is_empty());

        loader.request("not a url");
        assert_eq!(loader.pending_count(), 0);
    }

    #[test]
    fn wide_images_are_capped() {
        let data = decode_and_cap(&png_bytes(1800, 40), 900).unwrap();
        assert_eq!(data.width, 900);
        assert_eq!(data.height, 20);
        assert_eq!(data.rgba.len(), 900 * 20 * 4);
    }

    #[test]
    fn small_images_untouched() {
        let data = decode_and_cap(&png_bytes(32, 16), 900).unwrap();
        assert_eq!((data.width, data.height), (32, 16));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_and_cap(b"not an image", 900).err().unwrap();
        assert_eq!(err.phase, "decode");
    }
}
