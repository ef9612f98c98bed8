/// Configuration errors reported before any windowing happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("item height must be greater than zero")]
    ZeroItemHeight,
}
