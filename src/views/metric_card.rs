use crate::message::Message;
use crate::utils::format_metric;
use iced::widget::{column, container, text};
use iced::{Element, Length};

pub fn metric_card(title: &str, value: Option<f64>, unit: &str) -> Element<'static, Message> {
    let content = column![
        text(title.to_uppercase()).size(12),
        text(format_metric(value, unit)).size(26),
    ]
    .spacing(4);

    container(content)
        .padding(16)
        .width(Length::FillPortion(1))
        .style(container::bordered_box)
        .into()
}
