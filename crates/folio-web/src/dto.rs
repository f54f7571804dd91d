use serde::{Deserialize, Serialize};

pub const CONTACT_ACK_MESSAGE: &str = "Message received! I will get back to you soon.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

impl ContactAck {
    #[must_use]
    pub fn received() -> Self {
        Self {
            success: true,
            message: CONTACT_ACK_MESSAGE.to_string(),
        }
    }
}
