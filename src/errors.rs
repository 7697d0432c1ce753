//! Error handling for the election simulator

/// Result type alias for the election simulator
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the election simulator
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The voter already has a recorded ballot
    #[error("Voter '{voter_id}' has already voted.")]
    AlreadyVoted { voter_id: String },

    /// The voter was never registered
    #[error("Voter '{voter_id}' is not registered.")]
    UnregisteredVoter { voter_id: String },

    /// The candidate was never registered
    #[error("Candidate '{candidate_id}' is not registered.")]
    UnregisteredCandidate { candidate_id: String },

    /// A log structure selector outside the three known options
    #[error("Invalid data structure option. Vote not cast.")]
    UnknownStructure { input: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Terminal I/O errors raised by the shell
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl Error {
    /// Create an already-voted rejection
    pub fn already_voted(voter_id: impl Into<String>) -> Self {
        Self::AlreadyVoted {
            voter_id: voter_id.into(),
        }
    }

    /// Create an unregistered-voter rejection
    pub fn unregistered_voter(voter_id: impl Into<String>) -> Self {
        Self::UnregisteredVoter {
            voter_id: voter_id.into(),
        }
    }

    /// Create an unregistered-candidate rejection
    pub fn unregistered_candidate(candidate_id: impl Into<String>) -> Self {
        Self::UnregisteredCandidate {
            candidate_id: candidate_id.into(),
        }
    }

    /// Create an unknown-structure error
    pub fn unknown_structure(input: impl Into<String>) -> Self {
        Self::UnknownStructure {
            input: input.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this is an expected rejection of a cast vote.
    ///
    /// Rejections leave the registry untouched and are reported to the user;
    /// everything else is an operational failure.
    pub fn is_vote_rejection(&self) -> bool {
        matches!(
            self,
            Self::AlreadyVoted { .. }
                | Self::UnregisteredVoter { .. }
                | Self::UnregisteredCandidate { .. }
        )
    }
}

#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::Error::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::config(format!($fmt, $($arg)*))
    };
}
