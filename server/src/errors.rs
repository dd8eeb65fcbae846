use std::net::SocketAddr;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not load the site configuration: {error}")]
    Configuration { error: String },

    #[error("Could not bind `{addr}': {error}")]
    Bind {
        error: std::io::Error,
        addr: SocketAddr,
    },

    #[error("Could not serve requests: {error}")]
    Serve { error: std::io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
