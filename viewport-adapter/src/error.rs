/// Errors reported when a binder cannot be created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error(transparent)]
    Options(#[from] viewport::Error),
    #[error("resize poll interval must be greater than zero")]
    ZeroPollInterval,
}
