use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Requested more bytes than remain after the cursor.
    #[error("out of bounds: requested {requested} bytes at offset {offset}, {available} available")]
    OutOfBounds {
        offset: usize,
        requested: usize,
        available: usize,
    },
}
