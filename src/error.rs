use thiserror::Error;

pub type Result<T> = std::result::Result<T, RustTapesError>;

#[derive(Error, Debug)]
pub enum RustTapesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unsupported platform: {0}")]
    Unsupported(String),

    #[error("element address {0} is not present in the library inventory")]
    UnknownAddress(u16),

    #[error("cartridge '{0}' is not available in the library")]
    CartridgeNotFound(String),

    #[error("cartridge '{0}' is held by another robot")]
    CartridgeInWrongRobot(String),

    #[error("no empty slot is available in the library")]
    NoFreeSlot,

    #[error("unknown medium: density code 0x{density_code:02X}, medium type 0x{medium_type:02X}")]
    UnknownMedium {
        density_code: u8,
        medium_type: u8,
    },

    #[error("invalid partition geometry: {0}")]
    InvalidPartitionGeometry(String),

    #[error("no size unit in 0..=11 can represent the requested partition sizes")]
    NoValidScaleFound,

    #[error("partition layout consistency fault: {0}")]
    LayoutConsistencyFault(String),

    #[error("parameter validation error: {0}")]
    ParameterValidation(String),

    #[error("generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl RustTapesError {
    pub fn transport<T: Into<String>>(msg: T) -> Self {
        Self::Transport(msg.into())
    }

    pub fn unsupported<T: Into<String>>(msg: T) -> Self {
        Self::Unsupported(msg.into())
    }

    pub fn invalid_partition_geometry<T: Into<String>>(msg: T) -> Self {
        Self::InvalidPartitionGeometry(msg.into())
    }

    pub fn layout_consistency_fault<T: Into<String>>(msg: T) -> Self {
        Self::LayoutConsistencyFault(msg.into())
    }

    pub fn parameter_validation<T: Into<String>>(msg: T) -> Self {
        Self::ParameterValidation(msg.into())
    }
}
