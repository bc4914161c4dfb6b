use std::sync::Arc;

use iced::{Element, Size, Task};

use super::screens::{Screen, ScreenData, ScreenMessage, loading_page::LoadingPageScreen};
use super::{AppState, Message, run_blocking};
use crate::config::DetectorConfig;
use crate::detection::Detector;

pub const WINDOW_TITLE: &str = "Automated Plant Disease Detection";

pub struct LeafscanApp {
    state: AppState,
    screen: ScreenData,
}

fn unwrap_screen_message(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

impl LeafscanApp {
    pub fn new(config: DetectorConfig) -> (Self, Task<Message>) {
        let load_config = config.clone();
        let load_model = Task::perform(
            run_blocking(move || Detector::load(&load_config).map(Arc::new)),
            Message::ModelLoaded,
        );

        (
            Self {
                state: AppState::new(config),
                screen: ScreenData::LoadingPage(LoadingPageScreen::new("Loading model...")),
            },
            load_model,
        )
    }

    pub fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_screen_message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view(&self.state).map(unwrap_screen_message)
    }
}

/// Open the main window and block until it is closed
pub fn run(config: DetectorConfig) -> iced::Result {
    iced::application(
        move || LeafscanApp::new(config.clone()),
        LeafscanApp::update,
        LeafscanApp::view,
    )
    .title(LeafscanApp::title)
    .window_size(Size::new(800.0, 600.0))
    .run()
}
