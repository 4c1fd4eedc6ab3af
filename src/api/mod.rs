pub mod handlers;
pub mod router;
pub mod types;

pub use handlers::ApiError;
pub use router::{create_router, AppState};
