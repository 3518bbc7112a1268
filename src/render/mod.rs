//! Frame-driven animation state: the particle background, count-up
//! counters and reveal-on-scroll tracking.

pub mod counter;
pub mod particles;
pub mod reveal;
