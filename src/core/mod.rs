pub mod actions;
pub mod bindings;
pub mod engine;
pub mod fetch;
pub mod highlight;
pub mod hydrate;
pub mod pipeline;

pub use crate::domain::model::{HydratedPage, Profile, Section};
pub use crate::domain::ports::{ConfigProvider, ProfileSource, SitePipeline, Storage};
pub use crate::utils::error::Result;
