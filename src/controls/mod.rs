//! User controls: value sliders and the view toggle.

mod slider;
mod toggle;

pub use slider::{Slider, SliderValueMapper};
pub use toggle::ViewMode;
