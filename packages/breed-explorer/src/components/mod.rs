mod details_content;
mod nav_link;
mod navbar;
mod status;

pub use details_content::DetailsContent;
pub use nav_link::{link_class, NavLink, ACTIVE_CLASS, EXACT_ACTIVE_CLASS};
pub use navbar::Navbar;
pub use status::{ErrorMessage, Loading};
