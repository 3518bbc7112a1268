//! Background loading of project thumbnails.

pub mod image;
