//! Search module
//!
//! The Pixabay client and the filter sets it sends.

mod client;
pub mod params;

pub use client::PixabayClient;
pub use params::{
    ImageSearch, ImageType, Order, Orientation, ResponseGroup, VideoSearch, VideoType,
};
