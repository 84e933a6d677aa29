use iced::widget::image::Handle;

/// Largest overlay edge we are willing to upload to the GPU.
const MAX_DIMENSION: u32 = 8192;

pub struct OverlayImagePipeline;

impl OverlayImagePipeline {
    /// Decodes downloaded overlay bytes into an RGBA handle.
    ///
    /// Corrupt or non-image bytes come back as a readable reason.
    pub fn decode(bytes: &[u8]) -> Result<Handle, String> {
        if bytes.is_empty() {
            return Err(String::from("Overlay response was empty"));
        }

        let format = image::guess_format(bytes)
            .map_err(|err| format!("Overlay is not a recognised image: {err}"))?;

        let decoded = image::load_from_memory_with_format(bytes, format)
            .map_err(|err| format!("Failed to decode {format:?} overlay: {err}"))?;

        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(format!("Overlay has no pixels ({width}x{height})"));
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(format!(
                "Overlay is {width}x{height}, larger than the {MAX_DIMENSION}px limit"
            ));
        }

        Ok(Handle::from_rgba(width, height, rgba.into_raw()))
    }
}
