pub mod server;

pub use server::FeedBridge;
