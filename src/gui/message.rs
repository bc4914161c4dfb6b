use std::sync::Arc;

use crate::detection::Detector;
use crate::gui::screens::{
    ScreenData, ScreenMessage, home::HomeScreen, results::ResultsScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    Home(ScreenMessage<HomeScreen>),
    Results(ScreenMessage<ResultsScreen>),
    ChangeScreen(ScreenData),
    ModelLoaded(Result<Arc<Detector>, String>),
    DialogClosed,
}
