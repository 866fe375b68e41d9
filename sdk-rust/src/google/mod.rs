mod api;
mod model;

pub use model::{GoogleModel, GoogleModelOptions, DEFAULT_MODEL};
