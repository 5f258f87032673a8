#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown layout strategy: {name:?} (expected one of: hierarchical, force, radial)")]
    UnknownStrategy { name: String },

    #[error("invalid layout option `{name}`: {value}")]
    InvalidOption { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
