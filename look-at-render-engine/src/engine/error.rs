use thiserror::Error;

/// Errors raised while loading or binding follower models
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FollowerError {
    /// The remote model could not be fetched or parsed
    #[error("failed to load model for follower {id} from {url}: {reason}")]
    AssetLoadFailure {
        id: String,
        url: String,
        reason: String,
    },

    /// A follower's model slot is write-once
    #[error("follower {id} is already bound to a model")]
    AlreadyBound { id: String },
}
