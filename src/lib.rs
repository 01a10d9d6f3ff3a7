pub mod config;
pub mod core;
pub mod dom;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, TomlConfig};

pub use crate::core::{
    bindings::Bindings,
    engine::{RunReport, SiteEngine},
    fetch::{AnyProfileSource, HttpProfileSource, StorageProfileSource},
    highlight::split_highlights,
    hydrate::{apply_profile, HydrationSummary},
    pipeline::PortfolioPipeline,
};
pub use crate::domain::model::{ContactAction, Fragment, Profile, ResumeAction, Section};
pub use crate::dom::{Dom, HtmlDocument, MemoryDom, NodeId};
pub use crate::utils::error::{FetchError, Result, SiteError};
