pub mod catalog;
pub mod config;
pub mod link;
pub mod render;
pub mod task;
pub mod view;

#[cfg(feature = "remote-images")]
pub mod net;
