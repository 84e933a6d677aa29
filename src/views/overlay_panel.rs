use crate::message::Message;
use crate::model::{OverlayImage, Phase};
use iced::widget::text::Wrapping;
use iced::widget::{column, container, text, Image};
use iced::{Alignment, ContentFit, Element, Length};

const EMPTY_PANEL_TEXT: &str = "The segmentation overlay will appear here";

pub fn overlay_panel(phase: Phase, overlay: &OverlayImage) -> Element<'static, Message> {
    let body: Element<'static, Message> = match overlay {
        OverlayImage::Ready { handle, .. } => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        OverlayImage::Pending(_) => text("Loading overlay…").into(),
        OverlayImage::Failed { reason, .. } => text(format!("Overlay unavailable: {reason}"))
            .wrapping(Wrapping::Word)
            .into(),
        OverlayImage::Missing => text(EMPTY_PANEL_TEXT).into(),
    };

    let frame = container(body)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(container::bordered_box);

    let mut panel = column![text(phase.overlay_title()).size(18), frame]
        .spacing(12)
        .height(Length::Fill);

    if let Some(url) = overlay.url() {
        panel = panel.push(text(url.to_string()).size(12).wrapping(Wrapping::Word));
    }

    panel.into()
}
