#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod breed;
mod client;
mod config;
mod error;
mod request;
mod transport;

pub use breed::{Breed, BreedImage, BreedTarget, Measure};
pub use client::BreedClient;
pub use config::{ApiConfig, API_KEY_HEADER, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use request::{breed_request, list_request};
pub use transport::{ReqwestTransport, Transport};
