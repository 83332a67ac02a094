pub mod panic;
pub mod tracing;

pub use self::panic::{catch_panic_layer, handle_panic};
pub use self::tracing::{REQUEST_ID_HEADER, http_trace_layer, request_id_middleware};
