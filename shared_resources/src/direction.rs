use super::call::Call;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    Down,
    Stop,
    Up,
}

impl Direction {
    pub fn to_call(self) -> Option<Call> {
        match self {
            Direction::Up => Some(Call::HallUp),
            Direction::Down => Some(Call::HallDown),
            Direction::Stop => None,
        }
    }

    /// Direction of travel from one floor to another, `Stop` when equal.
    pub fn towards(from: u8, to: u8) -> Direction {
        if to > from {
            Direction::Up
        } else if to < from {
            Direction::Down
        } else {
            Direction::Stop
        }
    }

    pub fn as_string(self) -> String {
        match self {
            Direction::Down => String::from("down"),
            Direction::Stop => String::from("stop"),
            Direction::Up => String::from("up"),
        }
    }
}
