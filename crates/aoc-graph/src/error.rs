#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph has a cycle: only {sorted} of {total} vertices could be ordered")]
    Cycle { sorted: usize, total: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
