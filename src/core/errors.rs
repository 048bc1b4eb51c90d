use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to start window: {0}")]
    Window(String),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(Box::new(error))
    }
}

impl From<eframe::Error> for AppError {
    fn from(error: eframe::Error) -> Self {
        AppError::Window(error.to_string())
    }
}
