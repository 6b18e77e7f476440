// Keyboard / click input mapped onto selection-index changes

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelInput {
    Left,
    Right,
    /// Click on the slot at this catalog index.
    Select(usize),
}

impl WheelInput {
    /// Only the two arrow keys drive the wheel; everything else is ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(WheelInput::Left),
            "ArrowRight" => Some(WheelInput::Right),
            _ => None,
        }
    }

    pub fn next_index(self, current: usize, count: usize) -> usize {
        assert!(current < count, "selection {current} outside wheel of {count}");
        match self {
            WheelInput::Left => (current + count - 1) % count,
            WheelInput::Right => (current + 1) % count,
            WheelInput::Select(i) => {
                assert!(i < count, "clicked slot {i} outside wheel of {count}");
                i
            }
        }
    }
}
