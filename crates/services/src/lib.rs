#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod presentation;
pub mod progress_store;

pub use blackbox_core::Clock;

pub use app_services::AppServices;
pub use error::AppServicesError;
pub use presentation::{Navigation, PresentationService, PresentationSnapshot};
pub use progress_store::ProgressStore;
