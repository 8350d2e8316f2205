#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Message(String),
    InvalidDimensions { width: u32, height: u32 },
    ChunkTooLarge(usize),
    BadSignature,
    Truncated,
    CrcMismatch {
        chunk: String,
        stored: u32,
        computed: u32,
    },
    MissingChunk(&'static str),
    TrailingData(usize),
    InvalidHeader(String),
    PixelDataLength { expected: usize, actual: usize },
    Font(String),
}

impl Error {
    pub fn new(message: String) -> Self {
        Self::Message(message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Message(message) => write!(f, "{message}"),
            Error::InvalidDimensions { width, height } => {
                write!(f, "Image dimensions must be between 1 and 2^31-1: {width}x{height}")
            }
            Error::ChunkTooLarge(length) => {
                write!(f, "Chunk data exceeds the maximum PNG chunk length: {length} bytes")
            }
            Error::BadSignature => write!(f, "The data does not start with the PNG signature"),
            Error::Truncated => write!(f, "The PNG stream ends in the middle of a chunk"),
            Error::CrcMismatch {
                chunk,
                stored,
                computed,
            } => write!(
                f,
                "CRC mismatch in {chunk} chunk: stored {stored:#010x}, computed {computed:#010x}"
            ),
            Error::MissingChunk(chunk) => write!(f, "The PNG stream has no {chunk} chunk"),
            Error::TrailingData(length) => {
                write!(f, "Found {length} bytes after the IEND chunk")
            }
            Error::InvalidHeader(message) => write!(f, "Invalid IHDR chunk: {message}"),
            Error::PixelDataLength { expected, actual } if actual > expected => write!(
                f,
                "Decompressed pixel data is longer than the expected {expected} bytes"
            ),
            Error::PixelDataLength { expected, actual } => write!(
                f,
                "Decompressed pixel data has {actual} bytes, expected {expected}"
            ),
            Error::Font(message) => write!(f, "Unable to parse font: {message}"),
        }
    }
}

impl std::error::Error for Error {}
