use super::call::Call;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy)]
pub struct Request {
    pub floor: u8,
    pub call: Call,
}
