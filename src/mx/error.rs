use thiserror::Error;

/// The only failure the MX layer surfaces instead of classifying: the live
/// resolver could not be constructed at all. Every DNS-level error folds
/// into a [`ResolutionOutcome`](super::ResolutionOutcome).
#[derive(Debug, Error)]
pub enum MxError {
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: std::io::Error,
    },
}

impl MxError {
    pub(crate) fn resolver_init(source: std::io::Error) -> Self {
        Self::ResolverInit { source }
    }
}
