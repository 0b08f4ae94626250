mod details;
mod home;
mod not_found;

pub use details::Details;
pub use home::Home;
pub use not_found::NotFound;
