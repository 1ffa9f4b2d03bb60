use super::direction::Direction;

/// Events a cab reports back to the dispatcher.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy)]
pub enum CabEvent {
    Idle { cab: usize },
    PassingFloor { cab: usize, floor: u8, direction: Direction },
    StoppedAtFloor { cab: usize, floor: u8 },
}

impl CabEvent {
    pub fn cab(&self) -> usize {
        match *self {
            CabEvent::Idle { cab } => cab,
            CabEvent::PassingFloor { cab, .. } => cab,
            CabEvent::StoppedAtFloor { cab, .. } => cab,
        }
    }
}

/// Periodic snapshot of one cab, sent every tick by its motion engine.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy)]
pub struct CabStatus {
    pub cab: usize,
    pub floor: u8,
    pub direction: Direction,
    pub destinations: u8,
}

/// Go-to-floor command from the dispatcher to one cab.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy)]
pub struct Command {
    pub cab: usize,
    pub floor: u8,
}
