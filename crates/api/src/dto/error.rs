use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: &'static str,
}
