pub mod menu;
pub mod utility;

mod router;
pub use router::get_router;
