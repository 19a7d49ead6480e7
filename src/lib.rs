pub mod config;
pub mod extractor;
pub mod findings;
pub mod render;
pub mod server;

// Re-export main types for convenient access
pub use extractor::{analyze, Extractor};
pub use findings::{Findings, Platform, SocialMedia};

// Re-export presentation and transport entry points
pub use config::ServerConfig;
pub use render::render_text;
pub use server::{router, serve, ContentAnalyzer};
