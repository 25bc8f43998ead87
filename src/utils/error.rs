use thiserror::Error;

/// Which kind of owner an entity belongs to, used in membership messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Course,
    Repository,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Course => write!(f, "course"),
            Scope::Repository => write!(f, "repository"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MembershipViolation {
    #[error("the {entity} already belongs to another {owner}")]
    AlreadyOwned { entity: &'static str, owner: Scope },

    #[error("this {owner} already contains the {entity}")]
    AlreadyMember { entity: &'static str, owner: Scope },

    #[error("this {owner} does not contain the {entity}")]
    NotAMember { entity: &'static str, owner: Scope },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{field} is required")]
    NullArgument { field: String },

    #[error("{message}")]
    InvalidRange { field: String, message: String },

    #[error("another {entity} named '{name}' already exists in the {scope}")]
    DuplicateName {
        entity: &'static str,
        scope: Scope,
        name: String,
    },

    #[error("invalid membership change: {0}")]
    InvalidMembership(MembershipViolation),

    #[error("invalid guard bounds: {message}")]
    InvalidBounds { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

/// Coarse classification of a [`CatalogError`] for callers that translate
/// failures into their own presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NullArgument,
    InvalidRange,
    DuplicateName,
    InvalidMembership,
    InvalidBounds,
    Config,
    Storage,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NullArgument { .. } => ErrorKind::NullArgument,
            CatalogError::InvalidRange { .. } => ErrorKind::InvalidRange,
            CatalogError::DuplicateName { .. } => ErrorKind::DuplicateName,
            CatalogError::InvalidMembership(_) => ErrorKind::InvalidMembership,
            CatalogError::InvalidBounds { .. } => ErrorKind::InvalidBounds,
            CatalogError::IoError(_)
            | CatalogError::ConfigParseError(_)
            | CatalogError::ConfigError { .. } => ErrorKind::Config,
            CatalogError::StorageError { .. } => ErrorKind::Storage,
        }
    }

    /// True for failures caused by the value a caller supplied, as opposed to
    /// environment or programming errors.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NullArgument
                | ErrorKind::InvalidRange
                | ErrorKind::DuplicateName
                | ErrorKind::InvalidMembership
        )
    }

    pub(crate) fn invalid_range(field: &str, message: impl Into<String>) -> Self {
        CatalogError::InvalidRange {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<MembershipViolation> for CatalogError {
    fn from(violation: MembershipViolation) -> Self {
        CatalogError::InvalidMembership(violation)
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
