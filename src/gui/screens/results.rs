use std::convert::Infallible;

use image::DynamicImage;
use iced::{
    Element, Length, Task,
    widget::{Column, button, column, container, image::Handle, scrollable, text},
};

use crate::{
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{labeled_frame, layout},
    },
    models::Analysis,
    preview::{RESULT_SIZE, fit_within},
};

pub const TITLE: &str = "Disease Analysis Results";

/// Results of the most recent analysis, ready to display
#[derive(Debug, Clone)]
pub struct ResultsScreen {
    pub annotated: Handle,
    pub findings: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Close,
}

impl ResultsScreen {
    pub fn new(analysis: Analysis) -> Self {
        let findings = analysis.findings().iter().map(|f| f.summary()).collect();
        let description = analysis.description();

        let scaled = fit_within(
            &DynamicImage::ImageRgba8(analysis.annotated),
            RESULT_SIZE,
            RESULT_SIZE,
        );
        let (width, height) = scaled.dimensions();

        Self {
            annotated: Handle::from_rgba(width, height, scaled.into_raw()),
            findings,
            description,
        }
    }
}

impl Screen for ResultsScreen {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let detection = labeled_frame(
            "Detection Result",
            container(iced::widget::image(self.annotated.clone())).center_x(Length::Fill),
        );

        let lines = Column::with_children(
            self.findings
                .iter()
                .map(|line| text(line.as_str()).size(15).into()),
        )
        .spacing(5);

        let info = column![
            labeled_frame("Detection Results", lines),
            labeled_frame(
                "Disease Description",
                scrollable(text(self.description.as_str()).size(15)),
            )
            .height(Length::Fill),
        ]
        .spacing(10);

        let close = button("Close")
            .style(button::danger)
            .padding([8, 24])
            .on_press(ScreenMessage::ParentMessage(ParentMessage::Close));

        column![
            layout(TITLE, detection, info),
            container(close).center_x(Length::Fill).padding(10),
        ]
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
