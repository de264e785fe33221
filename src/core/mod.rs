pub mod codec;
pub mod engine;
pub mod judge;
pub mod pipeline;
pub mod reverse;

pub use crate::domain::model::Sequence;
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
