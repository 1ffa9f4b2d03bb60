#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Call {
    HallUp,
    HallDown,
    Cab,
}
