pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Coordinate, PhotoLocation};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, TransformResult};
pub use crate::utils::error::Result;
