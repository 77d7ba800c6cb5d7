mod app;

pub use app::AppError;
