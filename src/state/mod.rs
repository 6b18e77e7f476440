pub mod input;
pub mod wheel;

pub use input::WheelInput;
pub use wheel::{SlotTransform, WheelAction, WheelState};
