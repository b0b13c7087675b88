use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtosError {
    #[error("Error in decoding message: {0}")]
    DecodeError(#[from] prost::DecodeError),

    #[error("Null clock field in block-scoped data")]
    NullClock,

    #[error("Null last valid block in undo signal")]
    NullLastValidBlock,

    #[error("Null map output field in block-scoped data")]
    NullMapOutput,
}
