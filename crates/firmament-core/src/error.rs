use thiserror::Error;

/// Status codes surfaced through a getter instead of being raised.
/// Values match the integer codes hosts may already persist or compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum ErrorCode {
    #[default]
    Ok = 0,
    /// The sky was constructed without a dome to paint.
    GeometryNull = -6,
}

impl ErrorCode {
    /// Integer value of the code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a code by integer value.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            -6 => Some(Self::GeometryNull),
            _ => None,
        }
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }

    /// Human-readable description.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::GeometryNull => "Sky Failed To Init: Geometry NULL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describe an integer error code. Unknown values get a fixed fallback string.
pub fn error_code_to_string(code: i32) -> &'static str {
    ErrorCode::from_code(code).map_or("ERROR CODE UNRECOGNIZED", ErrorCode::as_str)
}

/// Errors from fallible generation and decoding steps.
#[derive(Debug, Error)]
pub enum FirmamentError {
    #[error("Dome needs at least {min} {axis} segments, got {actual}")]
    TooFewSegments {
        axis: &'static str,
        min: u32,
        actual: u32,
    },

    #[error("Dome with {0} vertices exceeds 16-bit index range")]
    TooManyVertices(usize),

    #[error("Failed to decode texture: {0}")]
    TextureDecode(String),

    #[error("Texture buffer is {actual} bytes, expected {expected}")]
    TextureSizeMismatch { expected: usize, actual: usize },
}
