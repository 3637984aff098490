//! QR code rendering pipeline.
//!
//! Renders a payload into a PNG image under the temp directory and hands back a
//! [`QrArtifact`] owning the file. Each invocation writes to a unique path keyed
//! by the caller's request id, so concurrent renders never collide on the same
//! file. The artifact is deleted after the reply that attaches it; deletion is
//! best-effort and only logged on failure.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{ImageBuffer, Rgba};
use qrcode::QrCode;

use crate::error::render::RenderError;

/// Rendering options for a single QR request.
///
/// `dark` is the module (foreground) color and `light` the background color,
/// following the QR encoder convention. Both are hex color strings; they are
/// parsed when the render runs, and an unparsable value fails the render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub dark: String,
    pub light: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 2048,
            height: 2048,
            dark: "#FFF".to_string(),
            light: "#232428".to_string(),
        }
    }
}

/// A generated QR image on disk, owned by the invocation that created it.
#[derive(Debug)]
pub struct QrArtifact {
    path: PathBuf,
}

impl QrArtifact {
    /// Path of the generated PNG file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the file from disk.
    ///
    /// Called unconditionally once the reply has been sent (or has failed).
    /// A deletion failure is logged but not surfaced to the user.
    pub async fn cleanup(self) {
        if let Err(e) = tokio::fs::remove_file(&self.path).await {
            tracing::warn!(
                "Failed to remove QR artifact '{}': {}",
                self.path.display(),
                e
            );
        }
    }
}

/// Service rendering QR codes into the configured temp directory.
pub struct QrRenderService {
    temp_dir: PathBuf,
}

impl QrRenderService {
    /// Creates a render service writing artifacts under `temp_dir`.
    ///
    /// The directory is created lazily before each render.
    pub fn new(temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            temp_dir: temp_dir.into(),
        }
    }

    /// Renders `payload` as a QR code PNG.
    ///
    /// The temp directory is created if missing (idempotent), the colors are
    /// parsed, and the encode runs on the blocking thread pool as a single
    /// suspend point. No retries; an encode failure produces no file.
    ///
    /// # Arguments
    /// - `payload` - Data to encode, typically a link
    /// - `options` - Image dimensions and colors
    /// - `request_id` - Unique id of the invocation, used to scope the filename
    ///
    /// # Returns
    /// - `Ok(QrArtifact)` - PNG written to a unique path in the temp directory
    /// - `Err(RenderError)` - Invalid color, encode failure, or I/O failure
    pub async fn render(
        &self,
        payload: &str,
        options: &RenderOptions,
        request_id: u64,
    ) -> Result<QrArtifact, RenderError> {
        let dark = parse_hex_color(&options.dark)?;
        let light = parse_hex_color(&options.light)?;

        tokio::fs::create_dir_all(&self.temp_dir)
            .await
            .map_err(|source| RenderError::TempDir {
                path: self.temp_dir.clone(),
                source,
            })?;

        let path = self.temp_dir.join(format!("qrcode-{request_id}.png"));

        let task_payload = payload.to_string();
        let task_path = path.clone();
        let (width, height) = (options.width, options.height);

        tokio::task::spawn_blocking(move || {
            encode_to_file(&task_path, &task_payload, dark, light, width, height)
        })
        .await??;

        Ok(QrArtifact { path })
    }
}

/// Encodes the payload and writes the image, sized exactly to the requested
/// dimensions.
fn encode_to_file(
    path: &Path,
    payload: &str,
    dark: Rgba<u8>,
    light: Rgba<u8>,
    width: u32,
    height: u32,
) -> Result<(), RenderError> {
    let code = QrCode::new(payload.as_bytes())?;

    let image: ImageBuffer<Rgba<u8>, Vec<u8>> = code
        .render::<Rgba<u8>>()
        .dark_color(dark)
        .light_color(light)
        .min_dimensions(width, height)
        .build();

    // The module grid rarely divides the target size evenly, so the renderer
    // may overshoot; snap back to the exact requested dimensions.
    let image = if image.dimensions() == (width, height) {
        image
    } else {
        image::imageops::resize(&image, width, height, FilterType::Nearest)
    };

    image.save(path)?;

    Ok(())
}

/// Parses a hex color string into RGBA.
///
/// Accepts `#RGB`, `#RGBA`, `#RRGGBB`, and `#RRGGBBAA`. Three- and four-digit
/// forms expand each digit (`#FFF` -> `#FFFFFF`). Alpha defaults to opaque.
fn parse_hex_color(value: &str) -> Result<Rgba<u8>, RenderError> {
    let invalid = || RenderError::InvalidColor(value.to_string());

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| invalid());
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

    let (r, g, b, a) = match hex.len() {
        3 => (digit(0)? * 17, digit(1)? * 17, digit(2)? * 17, 255),
        4 => (
            digit(0)? * 17,
            digit(1)? * 17,
            digit(2)? * 17,
            digit(3)? * 17,
        ),
        6 => (pair(0)?, pair(2)?, pair(4)?, 255),
        8 => (pair(0)?, pair(2)?, pair(4)?, pair(6)?),
        _ => return Err(invalid()),
    };

    Ok(Rgba([r, g, b, a]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::context::TestContext;

    /// Tests the default render options used when the user supplies no color
    /// overrides.
    ///
    /// Expected: 2048x2048 with white modules on the dark embed-gray background
    #[test]
    fn default_options_match_command_defaults() {
        let options = RenderOptions::default();

        assert_eq!(options.width, 2048);
        assert_eq!(options.height, 2048);
        assert_eq!(options.dark, "#FFF");
        assert_eq!(options.light, "#232428");
    }

    /// Tests hex color parsing across the accepted forms.
    #[test]
    fn parses_hex_color_forms() {
        assert_eq!(parse_hex_color("#FFF").unwrap(), Rgba([255, 255, 255, 255]));
        assert_eq!(parse_hex_color("#232428").unwrap(), Rgba([35, 36, 40, 255]));
        assert_eq!(parse_hex_color("#00000000").unwrap(), Rgba([0, 0, 0, 0]));
        assert_eq!(parse_hex_color("#f00c").unwrap(), Rgba([255, 0, 0, 204]));
    }

    /// Tests rejection of values that are not hex color specifications.
    ///
    /// Expected: Err(RenderError::InvalidColor)
    #[test]
    fn rejects_invalid_color_values() {
        for value in ["red", "fff", "#gggggg", "#12345", "", "#"] {
            assert!(matches!(
                parse_hex_color(value),
                Err(RenderError::InvalidColor(_))
            ));
        }
    }

    /// Tests the full render pipeline with default options.
    ///
    /// Verifies that a PNG is produced at a path scoped by the request id and
    /// that cleanup removes it again.
    ///
    /// Expected: Ok with an existing file, removed after cleanup
    #[tokio::test]
    async fn renders_and_cleans_up_artifact() -> Result<(), RenderError> {
        let test = TestContext::new().unwrap();
        let service = QrRenderService::new(test.temp_dir());

        let artifact = service
            .render("https://example.com", &RenderOptions::default(), 42)
            .await?;

        assert!(artifact.path().exists());
        assert_eq!(
            artifact.path().file_name().unwrap().to_str().unwrap(),
            "qrcode-42.png"
        );

        let path = artifact.path().to_path_buf();
        artifact.cleanup().await;
        assert!(!path.exists());

        Ok(())
    }

    /// Tests that concurrent-style invocations write to distinct paths.
    #[tokio::test]
    async fn uses_unique_path_per_request() -> Result<(), RenderError> {
        let test = TestContext::new().unwrap();
        let service = QrRenderService::new(test.temp_dir());

        let first = service
            .render("https://example.com", &RenderOptions::default(), 1)
            .await?;
        let second = service
            .render("https://example.com", &RenderOptions::default(), 2)
            .await?;

        assert_ne!(first.path(), second.path());

        first.cleanup().await;
        assert!(second.path().exists());
        second.cleanup().await;

        Ok(())
    }

    /// Tests that an invalid color fails the render before any file is written.
    ///
    /// Expected: Err(RenderError::InvalidColor) and an empty temp directory
    #[tokio::test]
    async fn encode_failure_produces_no_file() {
        let test = TestContext::new().unwrap();
        let temp_dir = test.temp_dir();
        let service = QrRenderService::new(&temp_dir);

        let options = RenderOptions {
            dark: "not a color".to_string(),
            ..RenderOptions::default()
        };

        let result = service.render("https://example.com", &options, 7).await;

        assert!(matches!(result, Err(RenderError::InvalidColor(_))));
        assert!(!temp_dir.join("qrcode-7.png").exists());
    }

    /// Tests rendering with a transparent background color.
    #[tokio::test]
    async fn renders_transparent_background() -> Result<(), RenderError> {
        let test = TestContext::new().unwrap();
        let service = QrRenderService::new(test.temp_dir());

        let options = RenderOptions {
            dark: "#ff0000".to_string(),
            light: "#00000000".to_string(),
            ..RenderOptions::default()
        };

        let artifact = service.render("https://example.com", &options, 3).await?;
        assert!(artifact.path().exists());
        artifact.cleanup().await;

        Ok(())
    }
}
