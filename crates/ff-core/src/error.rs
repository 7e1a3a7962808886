use thiserror::Error;

pub type FfResult<T> = Result<T, FfError>;

#[derive(Error, Debug)]
pub enum FfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },
}
