pub mod error_code;
mod config_error;
mod factcheck_error;
mod transport_error;

pub use config_error::ConfigError;
pub use error_code::FactcheckErrorCode;
pub use factcheck_error::{FactcheckError, FactcheckResult};
pub use transport_error::TransportError;
