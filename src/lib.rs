//! pixabay-rs: a small client for the Pixabay image and video search API
//!
//! Each search sends one GET request with the full filter set and returns the
//! decoded JSON body unchanged. Non-200 responses become [`PixabayError::Api`]
//! carrying the raw response text.
//!
//! ```no_run
//! use pixabay_rs::{ImageSearch, ImageType, PixabayClient};
//!
//! # async fn run() -> Result<(), pixabay_rs::PixabayError> {
//! let client = PixabayClient::new("your-api-key")?;
//! let result = client
//!     .search_images(&ImageSearch::new().query("red fox").image_type(ImageType::Photo))
//!     .await?;
//! println!("{}", result["totalHits"]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod network;
pub mod search;

pub use config::Settings;
pub use error::PixabayError;
pub use search::{
    ImageSearch, ImageType, Order, Orientation, PixabayClient, ResponseGroup, VideoSearch,
    VideoType,
};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
