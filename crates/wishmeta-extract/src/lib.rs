pub mod client;
pub mod document;
pub mod error;
pub mod fields;
pub mod pipeline;
pub mod price;
pub mod resolve;

pub use client::{FetchedPage, PageClient};
pub use document::Document;
pub use error::ExtractError;
pub use pipeline::MetadataPipeline;
pub use price::normalize_price;
