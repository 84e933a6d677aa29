use crate::message::Message;
use crate::model::ViewState;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, pick_list, row, text};
use iced::{Color, Element, Length};

const MODEL_NAME: &str = "ResUNet2D";

pub fn run_panel(state: &ViewState) -> Element<'_, Message> {
    let patients = pick_list(
        state.patient_options(),
        state.selected_option(),
        Message::SelectPatient,
    )
    .placeholder("Select a patient")
    .width(Length::Fill);

    let run_label = if state.is_loading() {
        "Running…"
    } else {
        "Run Segmentation"
    };
    let run_button = button(text(run_label))
        .width(Length::Fill)
        .on_press_maybe(state.can_run().then_some(Message::RunInference));

    let mut panel = column![
        text("Run Panel").size(20),
        text("Patient").size(14),
        patients,
        row![text("Model:").size(14), text(MODEL_NAME).size(14)].spacing(8),
        run_button,
    ]
    .spacing(12);

    if let Some(error) = state.error() {
        panel = panel.push(
            text(error)
                .size(14)
                .color(Color::from_rgb(0.95, 0.45, 0.45))
                .wrapping(Wrapping::Word),
        );
    }

    if let Some(label) = state.result().and_then(|result| result.patient_label.as_deref()) {
        panel = panel.push(text(format!("Showing results for {label}")).size(14));
    }

    panel.into()
}
