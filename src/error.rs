#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unknown phy {0}")]
    UnknownPhy(String),
    #[error("Unknown register number {address:#04x}")]
    UnknownRegister { address: u8 },
    #[error("Unknown register name '{0}'")]
    UnknownRegisterName(String),
    #[error("Invalid field table for register {address:#04x}: {reason}")]
    InvalidTable { address: u8, reason: String },
}
