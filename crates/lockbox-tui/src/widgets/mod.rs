//! Custom widgets for the landing page

pub mod modal_overlay;
mod nav_bar;
pub mod page;
mod status_bar;
mod toast_stack;
mod tour_modal;

pub use nav_bar::{NavBar, NAV_HEIGHT, NAV_HEIGHT_COMPACT};
pub use page::build_page;
pub use status_bar::StatusBar;
pub use toast_stack::ToastStack;
pub use tour_modal::TourModal;
