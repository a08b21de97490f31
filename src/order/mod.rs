//! Order submission: the request built from the construction, the external
//! order service seam, and the driver that surfaces the request to the
//! constructor slice as lifecycle events.

mod error;
mod gateway;
mod submit;

pub use error::{GatewayError, OrderError};
pub use gateway::{CannedOrderGateway, OrderGateway, OrderRequest};
pub use submit::{submit_order, CANCELLED_MESSAGE};
