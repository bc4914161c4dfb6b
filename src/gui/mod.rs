mod app;
pub mod dialogs;
mod message;
pub mod screens;
mod state;
pub mod widgets;

pub use app::{LeafscanApp, run};
pub use message::Message;
pub use state::{AppState, SelectedImage};

/// Run `f` on the blocking thread pool, flattening errors into display strings
pub async fn run_blocking<T, F>(f: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(format!("{:#}", e)),
        Err(e) => Err(format!("Worker task failed: {}", e)),
    }
}
