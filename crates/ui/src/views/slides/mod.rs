mod bayard;
mod grain_noise;
mod hardware_lab;
mod portfolio;
mod title;

pub use bayard::BayardSlide;
pub use grain_noise::GrainNoiseSlide;
pub use hardware_lab::HardwareLabSlide;
pub use portfolio::PortfolioSlide;
pub use title::TitleSlide;
