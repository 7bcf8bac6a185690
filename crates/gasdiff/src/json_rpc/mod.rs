mod id_stepper;
mod is_rpc_request;
mod json_rpc_client;
mod rpc_request;
mod rpc_response;
mod transport;

pub use id_stepper::*;
pub use is_rpc_request::*;
pub use json_rpc_client::*;
pub use rpc_request::*;
pub use rpc_response::*;
pub use transport::*;
