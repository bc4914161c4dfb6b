pub mod home;
pub mod loading_page;
pub mod results;

use std::convert::Infallible;

use iced::{Element, Task};
use log::info;

use crate::gui::{AppState, Message, dialogs};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    LoadingPage(loading_page::LoadingPageScreen),
    Home(home::HomeScreen),
    Results(results::ResultsScreen),
}

impl ScreenData {
    /// Replace the current screen; a new analysis replaces the previous results
    pub fn change_to(&mut self, screen: ScreenData) -> Task<ScreenMessage<Self>> {
        *self = screen;
        Task::none()
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::LoadingPage(screen) => {
                screen.view(state).map(|message| -> Message {
                    match message {
                        ScreenMessage::ScreenMessage(never) => match never {},
                        ScreenMessage::ParentMessage(never) => match never {},
                    }
                })
            }
            ScreenData::Home(screen) => screen.view(state).map(Message::Home),
            ScreenData::Results(screen) => screen.view(state).map(Message::Results),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => x.change_to(screen),
            (x, Message::ModelLoaded(result)) => {
                *x = ScreenData::Home(home::HomeScreen);
                match result {
                    Ok(detector) => {
                        info!("Detector ready: {:?}", detector);
                        state.detector = Some(detector);
                        Task::none()
                    }
                    Err(error) => Task::perform(
                        dialogs::show_error(
                            "Model Error".to_string(),
                            format!("Error loading model: {}", error),
                        ),
                        |_| ScreenMessage::ScreenMessage(Message::DialogClosed),
                    ),
                }
            }
            (_, Message::DialogClosed) => Task::none(),
            (
                x,
                Message::Home(ScreenMessage::ParentMessage(home::ParentMessage::Analyzed(screen))),
            ) => {
                state.analyzing = false;
                x.change_to(ScreenData::Results(screen))
            }
            (x, Message::Results(ScreenMessage::ParentMessage(results::ParentMessage::Close))) => {
                x.change_to(ScreenData::Home(home::HomeScreen))
            }
            (ScreenData::Home(page), Message::Home(ScreenMessage::ScreenMessage(msg))) => page
                .update(msg, state)
                .map(Message::Home)
                .map(ScreenMessage::ScreenMessage),
            (ScreenData::Results(page), Message::Results(ScreenMessage::ScreenMessage(msg))) => {
                page.update(msg, state)
                    .map(Message::Results)
                    .map(ScreenMessage::ScreenMessage)
            }
            _ => Task::none(),
        }
    }
}
