//! Data loading for views.
//!
//! - [`use_fetch`] - Cached, generation-guarded loading as signals
//! - [`DataStatus`] - Loading/error line with retry

mod hook;
mod status;

pub use hook::use_fetch;
pub use status::DataStatus;
