// Path: crates/types/src/error/mod.rs
//! Core error types for the IOI parameter store.

use crate::params::ParamKind;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors related to the underlying key-value stores.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The requested key was not found in the state.
    #[error("Key not found in state")]
    KeyNotFound,
    /// An error occurred in the state backend.
    #[error("State backend error: {0}")]
    Backend(String),
    /// An error occurred while writing to the state.
    #[error("State write error: {0}")]
    WriteError(String),
    /// The provided value was invalid.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    /// The operation was denied due to insufficient permissions on a state key.
    #[error("Permission denied for state key: {0}")]
    PermissionDenied(String),
}

impl ErrorCode for StateError {
    fn code(&self) -> &'static str {
        match self {
            Self::KeyNotFound => "STATE_KEY_NOT_FOUND",
            Self::Backend(_) => "STATE_BACKEND_ERROR",
            Self::WriteError(_) => "STATE_WRITE_ERROR",
            Self::InvalidValue(_) => "STATE_INVALID_VALUE",
            Self::PermissionDenied(_) => "STATE_PERMISSION_DENIED",
        }
    }
}

/// Errors raised while wiring key tables and subspaces. These halt initialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// A parameter key was empty.
    #[error("Parameter key must not be empty")]
    EmptyKey,
    /// A parameter key contained a byte outside `[0-9A-Za-z]`.
    #[error("Parameter key '{0}' is not alphanumeric")]
    InvalidKey(String),
    /// A parameter key was registered twice in the same key table.
    #[error("Duplicate parameter key '{0}'")]
    DuplicateKey(String),
    /// A key table was attached to a subspace that already has one.
    #[error("Subspace '{0}' already has a key table")]
    KeyTableAlreadySet(String),
    /// A subspace was requested with an empty name.
    #[error("Subspace name must not be empty")]
    EmptySubspaceName,
    /// A subspace name contained the key separator `/`.
    #[error("Subspace name '{0}' must not contain '/'")]
    InvalidSubspaceName(String),
    /// A subspace with this name was already allocated.
    #[error("Subspace '{0}' already exists")]
    DuplicateSubspace(String),
}

impl ErrorCode for RegistrationError {
    fn code(&self) -> &'static str {
        match self {
            Self::EmptyKey => "REGISTRATION_EMPTY_KEY",
            Self::InvalidKey(_) => "REGISTRATION_INVALID_KEY",
            Self::DuplicateKey(_) => "REGISTRATION_DUPLICATE_KEY",
            Self::KeyTableAlreadySet(_) => "REGISTRATION_KEY_TABLE_ALREADY_SET",
            Self::EmptySubspaceName => "REGISTRATION_EMPTY_SUBSPACE_NAME",
            Self::InvalidSubspaceName(_) => "REGISTRATION_INVALID_SUBSPACE_NAME",
            Self::DuplicateSubspace(_) => "REGISTRATION_DUPLICATE_SUBSPACE",
        }
    }
}

/// Errors returned by subspace reads and writes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// A registration precondition was violated.
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),
    /// The key is not part of the subspace's key table. Indicates a wiring bug.
    #[error("Parameter '{key}' is not registered in subspace '{subspace}'")]
    UnregisteredKey {
        /// The subspace that was accessed.
        subspace: String,
        /// The unregistered key.
        key: String,
    },
    /// The caller's value type differs from the registered prototype. Indicates a wiring bug.
    #[error("Type mismatch for parameter '{key}': registered {expected}, got {got}")]
    TypeMismatch {
        /// The offending key.
        key: String,
        /// The kind registered in the key table.
        expected: ParamKind,
        /// The kind supplied by the caller.
        got: ParamKind,
    },
    /// A required parameter has no stored value.
    #[error("Parameter '{key}' has no value in subspace '{subspace}'")]
    NotFound {
        /// The subspace that was accessed.
        subspace: String,
        /// The missing key.
        key: String,
    },
    /// The subspace was used before a key table was attached.
    #[error("Subspace '{0}' has no key table")]
    MissingKeyTable(String),
    /// Raw bytes could not be decoded into the parameter's type.
    #[error("Failed to decode parameter '{key}': {reason}")]
    Decode {
        /// The key being decoded.
        key: String,
        /// The codec's description of the failure.
        reason: String,
    },
    /// A value could not be encoded. The prototype must always be encodable.
    #[error("Failed to encode parameter '{key}': {reason}")]
    Encode {
        /// The key being encoded.
        key: String,
        /// The codec's description of the failure.
        reason: String,
    },
    /// The registered validator rejected the value.
    #[error("Invalid value for parameter '{key}': {reason}")]
    Validation {
        /// The key being validated.
        key: String,
        /// The validator's rejection message.
        reason: String,
    },
    /// An error from the underlying store.
    #[error("State error: {0}")]
    State(#[from] StateError),
}

impl ErrorCode for ParamError {
    fn code(&self) -> &'static str {
        match self {
            Self::Registration(e) => e.code(),
            Self::UnregisteredKey { .. } => "PARAMS_UNREGISTERED_KEY",
            Self::TypeMismatch { .. } => "PARAMS_TYPE_MISMATCH",
            Self::NotFound { .. } => "PARAMS_NOT_FOUND",
            Self::MissingKeyTable(_) => "PARAMS_MISSING_KEY_TABLE",
            Self::Decode { .. } => "PARAMS_DECODE_ERROR",
            Self::Encode { .. } => "PARAMS_ENCODE_ERROR",
            Self::Validation { .. } => "PARAMS_VALIDATION_FAILED",
            Self::State(_) => "PARAMS_STATE_ERROR",
        }
    }
}

impl ParamError {
    /// Returns true for errors that indicate a bug in module wiring rather than
    /// bad runtime input. The host treats these as fatal to the execution context.
    pub fn is_programmer_error(&self) -> bool {
        matches!(
            self,
            Self::UnregisteredKey { .. }
                | Self::TypeMismatch { .. }
                | Self::MissingKeyTable(_)
                | Self::Encode { .. }
        )
    }
}

/// Errors raised while validating or applying a parameter change proposal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProposalError {
    /// The proposal title was empty.
    #[error("Proposal title cannot be blank")]
    EmptyTitle,
    /// The proposal title exceeded the configured bound.
    #[error("Proposal title is longer than max length of {max} (got {got})")]
    TitleTooLong {
        /// The configured maximum.
        max: usize,
        /// The actual length.
        got: usize,
    },
    /// The proposal description was empty.
    #[error("Proposal description cannot be blank")]
    EmptyDescription,
    /// The proposal description exceeded the configured bound.
    #[error("Proposal description is longer than max length of {max} (got {got})")]
    DescriptionTooLong {
        /// The configured maximum.
        max: usize,
        /// The actual length.
        got: usize,
    },
    /// The proposal carried no changes.
    #[error("Proposal must contain at least one parameter change")]
    EmptyChanges,
    /// A change had an empty subspace.
    #[error("Parameter change #{0} has an empty subspace")]
    EmptySubspace(usize),
    /// A change had an empty key.
    #[error("Parameter change #{0} has an empty key")]
    EmptyKey(usize),
    /// A change had an empty value.
    #[error("Parameter change #{0} has an empty value")]
    EmptyValue(usize),
    /// A change referenced a subspace the keeper does not know.
    #[error("Unknown subspace '{0}'")]
    UnknownSubspace(String),
    /// Applying a change failed; the whole proposal is rolled back.
    #[error("Failed to set parameter '{key}' in subspace '{subspace}': {source}")]
    SettingParameter {
        /// The subspace of the failing change.
        subspace: String,
        /// The key of the failing change.
        key: String,
        /// The underlying subspace error.
        #[source]
        source: ParamError,
    },
    /// The binary proposal envelope could not be decoded.
    #[error("Failed to decode proposal: {0}")]
    Decode(String),
    /// An error from the underlying store while committing the proposal.
    #[error("State error: {0}")]
    State(#[from] StateError),
}

impl ErrorCode for ProposalError {
    fn code(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "PROPOSAL_EMPTY_TITLE",
            Self::TitleTooLong { .. } => "PROPOSAL_TITLE_TOO_LONG",
            Self::EmptyDescription => "PROPOSAL_EMPTY_DESCRIPTION",
            Self::DescriptionTooLong { .. } => "PROPOSAL_DESCRIPTION_TOO_LONG",
            Self::EmptyChanges => "PROPOSAL_EMPTY_CHANGES",
            Self::EmptySubspace(_) => "PROPOSAL_EMPTY_SUBSPACE",
            Self::EmptyKey(_) => "PROPOSAL_EMPTY_KEY",
            Self::EmptyValue(_) => "PROPOSAL_EMPTY_VALUE",
            Self::UnknownSubspace(_) => "PROPOSAL_UNKNOWN_SUBSPACE",
            Self::SettingParameter { .. } => "PROPOSAL_SETTING_PARAMETER",
            Self::Decode(_) => "PROPOSAL_DECODE_ERROR",
            Self::State(_) => "PROPOSAL_STATE_ERROR",
        }
    }
}

/// Coarse status classes that an outer RPC layer maps to gRPC / HTTP codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// The request was malformed (gRPC `InvalidArgument`, HTTP 400).
    InvalidArgument,
    /// The addressed resource does not exist (gRPC `NotFound`, HTTP 404).
    NotFound,
    /// The server failed while serving a valid request (gRPC `Internal`, HTTP 500).
    Internal,
}

/// Errors returned by the read-only query surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A required request field was empty or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The request referenced a subspace the keeper does not know.
    #[error("Unknown subspace '{0}'")]
    UnknownSubspace(String),
    /// A stored value could not be rendered.
    #[error("Stored value is not valid UTF-8: {0}")]
    InvalidValue(String),
    /// An error from the underlying store.
    #[error("State error: {0}")]
    State(#[from] StateError),
}

impl QueryError {
    /// Returns the status class for this error.
    pub fn status(&self) -> QueryStatus {
        match self {
            Self::InvalidArgument(_) => QueryStatus::InvalidArgument,
            Self::UnknownSubspace(_) => QueryStatus::NotFound,
            Self::InvalidValue(_) | Self::State(_) => QueryStatus::Internal,
        }
    }
}

impl ErrorCode for QueryError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "QUERY_INVALID_ARGUMENT",
            Self::UnknownSubspace(_) => "QUERY_UNKNOWN_SUBSPACE",
            Self::InvalidValue(_) => "QUERY_INVALID_VALUE",
            Self::State(_) => "QUERY_STATE_ERROR",
        }
    }
}

impl From<ParamError> for QueryError {
    fn from(e: ParamError) -> Self {
        match e {
            ParamError::State(s) => QueryError::State(s),
            other => QueryError::InvalidArgument(other.to_string()),
        }
    }
}

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration file could not be read.
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    /// A field held a semantically invalid value.
    #[error("Configuration Error: {0}")]
    Invalid(String),
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "CONFIG_PARSE_ERROR",
            Self::Io(_) => "CONFIG_IO_ERROR",
            Self::Invalid(_) => "CONFIG_INVALID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_parameter_keeps_source() {
        let err = ProposalError::SettingParameter {
            subspace: "staking".into(),
            key: "MaxValidators".into(),
            source: ParamError::Validation {
                key: "MaxValidators".into(),
                reason: "must be positive".into(),
            },
        };
        assert_eq!(err.code(), "PROPOSAL_SETTING_PARAMETER");
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("must be positive"));
    }

    #[test]
    fn test_registration_codes_pass_through() {
        let err = ParamError::from(RegistrationError::DuplicateKey("Foo".into()));
        assert_eq!(err.code(), "REGISTRATION_DUPLICATE_KEY");
        assert!(!err.is_programmer_error());
    }

    #[test]
    fn test_query_status_mapping() {
        assert_eq!(
            QueryError::InvalidArgument("empty".into()).status(),
            QueryStatus::InvalidArgument
        );
        assert_eq!(
            QueryError::UnknownSubspace("x".into()).status(),
            QueryStatus::NotFound
        );
        assert_eq!(
            QueryError::State(StateError::Backend("io".into())).status(),
            QueryStatus::Internal
        );
    }
}
