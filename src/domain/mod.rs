//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::SendRequest;
pub use response::SendOutcome;
pub use validation::ValidationError;
pub use value::{
    GatewayUrl, KnownStatusCode, MessageText, Password, Recipients, StatusCode, Username,
};
