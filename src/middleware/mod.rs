//! Response middleware.

pub mod process_time;
pub mod service_headers;

pub use process_time::ProcessTime;
pub use service_headers::service_headers;
