pub mod touch;

pub use touch::{Swipe, TouchState};
