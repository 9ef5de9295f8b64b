pub mod client;

pub use client::RdwClient;
