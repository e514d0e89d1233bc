use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[cfg(feature = "ssr")]
    #[error("couldn't load leptos configuration: {0}")]
    Config(#[from] leptos::config::errors::LeptosConfigError),
    #[cfg(feature = "ssr")]
    #[error("server io error: {0}")]
    Io(#[from] std::io::Error),
}
