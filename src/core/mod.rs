pub mod errors;
pub mod timer;

pub use errors::AppError;
pub use timer::{
    Ticker,
    Timeout,
};
