use super::Phase;
use iced::widget::image::Handle;

/// Download state of one overlay image.
#[derive(Debug, Clone, Default)]
pub enum OverlayImage {
    /// The backend did not provide a URL for this phase.
    #[default]
    Missing,
    Pending(String),
    Ready { url: String, handle: Handle },
    Failed { url: String, reason: String },
}

impl OverlayImage {
    pub fn from_url(url: Option<&str>) -> Self {
        match url {
            Some(url) => OverlayImage::Pending(url.to_string()),
            None => OverlayImage::Missing,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            OverlayImage::Missing => None,
            OverlayImage::Pending(url)
            | OverlayImage::Ready { url, .. }
            | OverlayImage::Failed { url, .. } => Some(url),
        }
    }
}

/// Overlays for both phases of the current run.
#[derive(Debug, Clone, Default)]
pub struct Overlays {
    pub ed: OverlayImage,
    pub es: OverlayImage,
}

impl Overlays {
    pub fn get(&self, phase: Phase) -> &OverlayImage {
        match phase {
            Phase::Ed => &self.ed,
            Phase::Es => &self.es,
        }
    }

    pub fn get_mut(&mut self, phase: Phase) -> &mut OverlayImage {
        match phase {
            Phase::Ed => &mut self.ed,
            Phase::Es => &mut self.es,
        }
    }

    /// Phases still waiting for their image, paired with the URL to fetch.
    pub fn pending(&self) -> Vec<(Phase, String)> {
        Phase::ALL
            .into_iter()
            .filter_map(|phase| match self.get(phase) {
                OverlayImage::Pending(url) => Some((phase, url.clone())),
                _ => None,
            })
            .collect()
    }
}
