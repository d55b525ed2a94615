use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("grid dimensions must be non-zero, got {cols}x{rows}")]
    EmptyGrid { cols: u32, rows: u32 },
    #[error("grid of {cols}x{rows} cells is too large to address")]
    TooLarge { cols: u32, rows: u32 },
}
