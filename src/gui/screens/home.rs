use std::path::PathBuf;

use iced::{
    Element, Length, Task,
    widget::{button, column, container, text},
};
use log::info;
use rfd::AsyncFileDialog;

use crate::gui::{
    AppState, SelectedImage, dialogs, run_blocking,
    screens::{Screen, ScreenMessage, results::ResultsScreen},
    widgets::{BOLD, labeled_frame, layout},
};

pub const TITLE: &str = "Automated Plant Disease Detection";

#[derive(Debug, Clone)]
pub struct HomeScreen;

#[derive(Debug, Clone)]
pub enum HomeMessage {
    Browse,
    ImagePicked(Option<PathBuf>),
    PreviewLoaded(Result<SelectedImage, String>),
    Analyze,
    AnalysisFailed(String),
    None,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Analyzed(ResultsScreen),
}

fn error_dialog(title: &str, description: String) -> Task<ScreenMessage<HomeScreen>> {
    Task::perform(dialogs::show_error(title.to_string(), description), |_| {
        ScreenMessage::ScreenMessage(HomeMessage::None)
    })
}

impl HomeScreen {
    fn status_text(state: &AppState) -> String {
        let model = match &state.detector {
            Some(_) => format!("Model: {}", state.config.model.display()),
            None => "Model: not loaded".to_string(),
        };
        let image = match &state.selected {
            Some(selected) => format!("Image: {}", selected.file_name()),
            None => "Image: none selected".to_string(),
        };
        format!("{}\n{}", model, image)
    }
}

impl Screen for HomeScreen {
    type Message = HomeMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let browse = button("Browse Image")
            .style(button::primary)
            .on_press_maybe(
                (!state.is_busy()).then_some(ScreenMessage::ScreenMessage(HomeMessage::Browse)),
            );

        let preview: Element<'a, ScreenMessage<Self>> = match &state.selected {
            Some(selected) => iced::widget::image(selected.preview.clone()).into(),
            None => text("No image selected").into(),
        };

        let analyze_label = if state.analyzing {
            "Analyzing..."
        } else {
            "Analyze Disease"
        };
        let analyze_text = text(analyze_label).font(BOLD).size(16);
        let analyze = button(container(analyze_text).center_x(Length::Fill))
            .style(button::success)
            .width(Length::Fill)
            .padding(10)
            .on_press_maybe(
                state
                    .can_analyze()
                    .then_some(ScreenMessage::ScreenMessage(HomeMessage::Analyze)),
            );

        let left = column![
            labeled_frame("Select Image", container(browse).center_x(Length::Fill)),
            labeled_frame(
                "Image Preview",
                container(preview)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
            )
            .height(Length::Fill),
            analyze,
        ]
        .spacing(10);

        let right = labeled_frame("Status", text(Self::status_text(state)));

        layout(TITLE, left, right)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            HomeMessage::Browse => {
                if state.is_busy() {
                    return Task::none();
                }
                // The dialog has no parent window, so Analyze stays off until it resolves
                state.loading_preview = true;
                Task::perform(
                    AsyncFileDialog::new()
                        .set_title("Select Image")
                        .add_filter("Image files", dialogs::IMAGE_EXTENSIONS)
                        .pick_file(),
                    |handle| {
                        ScreenMessage::ScreenMessage(HomeMessage::ImagePicked(
                            handle.map(|file| file.path().to_path_buf()),
                        ))
                    },
                )
            }
            HomeMessage::ImagePicked(None) => {
                state.loading_preview = false;
                Task::none()
            }
            HomeMessage::ImagePicked(Some(path)) => {
                state.loading_preview = true;
                Task::perform(run_blocking(move || SelectedImage::load(path)), |result| {
                    ScreenMessage::ScreenMessage(HomeMessage::PreviewLoaded(result))
                })
            }
            HomeMessage::PreviewLoaded(result) => {
                state.loading_preview = false;
                match result {
                    Ok(selected) => {
                        info!("Selected {}", selected.path.display());
                        // Replaces any previously selected image
                        state.selected = Some(selected);
                        Task::none()
                    }
                    Err(error) => {
                        error_dialog("Image Error", format!("Error opening image: {}", error))
                    }
                }
            }
            HomeMessage::Analyze => {
                if state.is_busy() {
                    return Task::none();
                }
                let selected_path = state.selected.as_ref().map(|s| s.path.clone());
                let (Some(path), Some(detector)) = (selected_path, state.detector.clone()) else {
                    return error_dialog(
                        "Error",
                        "Please select an image and ensure model is loaded".to_string(),
                    );
                };

                state.analyzing = true;
                info!("Analyzing {}", path.display());
                Task::perform(
                    run_blocking(move || Ok(ResultsScreen::new(detector.analyze(&path)?))),
                    |result| match result {
                        Ok(results) => {
                            ScreenMessage::ParentMessage(ParentMessage::Analyzed(results))
                        }
                        Err(error) => {
                            ScreenMessage::ScreenMessage(HomeMessage::AnalysisFailed(error))
                        }
                    },
                )
            }
            HomeMessage::AnalysisFailed(error) => {
                state.analyzing = false;
                error_dialog(
                    "Analysis Error",
                    format!("Error during image analysis: {}", error),
                )
            }
            HomeMessage::None => Task::none(),
        }
    }
}
