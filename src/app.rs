use crate::api::ApiClient;
use crate::components::phase_toggle;
use crate::config::Settings;
use crate::image_pipeline::OverlayImagePipeline;
use crate::message::Message;
use crate::model::{OverlayRequest, RunTicket, ViewState};
use crate::views::{metric_card, overlay_panel, run_panel};
use iced::widget::{column, container, row, text};
use iced::{application, Alignment, Element, Length, Task, Theme};

const APP_TITLE: &str = "Cardiomancer";

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let settings = Settings::from_env();
    log::info!("Using inference service at `{}`", settings.api_base);

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .run_with(move || App::new(settings))
}

pub struct App {
    client: ApiClient,
    state: ViewState,
}

impl App {
    /// Builds the dashboard and kicks off the patient listing.
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let app = Self {
            client: ApiClient::new(settings.api_base.clone()),
            state: ViewState::new(&settings),
        };

        let client = app.client.clone();
        let mount = Task::perform(
            async move { client.list_patients().await },
            Message::PatientsLoaded,
        );

        (app, mount)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PatientsLoaded(result) => {
                self.state.patients_loaded(result);
                Task::none()
            }
            Message::SelectPatient(option) => {
                self.state.select_patient(option.key);
                Task::none()
            }
            Message::RunInference => match self.state.start_run() {
                Some(ticket) => self.run_inference(ticket),
                None => Task::none(),
            },
            Message::InferenceFinished { run, outcome } => {
                let requests = self.state.finish_run(run, outcome);
                Task::batch(requests.into_iter().map(|request| self.fetch_overlay(request)))
            }
            Message::OverlayLoaded {
                run,
                phase,
                outcome,
            } => {
                self.state.overlay_loaded(run, phase, outcome);
                Task::none()
            }
            Message::SetPhase(phase) => {
                self.state.set_phase(phase);
                Task::none()
            }
        }
    }

    fn run_inference(&self, ticket: RunTicket) -> Task<Message> {
        let client = self.client.clone();
        let RunTicket { run, patient_id } = ticket;

        Task::perform(
            async move { client.run_inference(&patient_id).await },
            move |outcome| Message::InferenceFinished { run, outcome },
        )
    }

    fn fetch_overlay(&self, request: OverlayRequest) -> Task<Message> {
        let client = self.client.clone();
        let OverlayRequest { run, phase, url } = request;

        Task::perform(
            async move {
                let bytes = client
                    .fetch_overlay(&url)
                    .await
                    .map_err(|err| err.to_string())?;
                OverlayImagePipeline::decode(&bytes)
            },
            move |outcome| Message::OverlayLoaded {
                run,
                phase,
                outcome,
            },
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("ACDC Cardiac MRI Segmentation").size(24),
            text("2D ResUNet • EDV/ESV/EF • Overlay output").size(14),
        ]
        .spacing(4);

        let result = self.state.result();
        let metrics = row![
            metric_card("EDV", result.and_then(|r| r.edv), "ml"),
            metric_card("ESV", result.and_then(|r| r.esv), "ml"),
            metric_card("EF", result.and_then(|r| r.ef), "%"),
        ]
        .spacing(16)
        .width(Length::Fill);

        let controls = container(run_panel(&self.state))
            .padding(16)
            .width(Length::FillPortion(1));

        let phase = self.state.phase();
        let overlay = column![
            row![text("Segmentation Overlay").size(20), phase_toggle(phase)]
                .spacing(12)
                .align_y(Alignment::Center),
            overlay_panel(phase, self.state.displayed_overlay()),
        ]
        .spacing(12)
        .width(Length::FillPortion(2))
        .height(Length::Fill);

        let content = row![controls, overlay]
            .spacing(16)
            .width(Length::Fill)
            .height(Length::Fill);

        column![header, metrics, content]
            .padding(20)
            .spacing(20)
            .align_x(Alignment::Start)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
