//! Canonical error facility for Hearth
//!
//! Every fallible operation in the workspace reports a `HearthError`. The
//! kind taxonomy maps to stable `ERR_*` codes usable programmatically and in
//! structured logs.

/// Result type alias using HearthError
pub type Result<T> = std::result::Result<T, HearthError>;

/// Canonical error kind taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HearthErrorKind {
    // Validation
    /// Caller-supplied value is malformed (e.g. an unparsable player UUID)
    InvalidInput,
    /// Home name is empty, too long, or contains disallowed characters
    InvalidName,
    /// Limit value lies outside `[1, ceiling]`
    InvalidLimit,
    /// A player's per-player limit is already exhausted
    LimitReached,

    // Lookup
    /// No record for the requested key
    NotFound,
    /// A stored world name no longer resolves on the host
    WorldNotLoaded,

    // Storage
    ConstraintViolation,
    Persistence,
    Serialization,
    Io,

    // Configuration
    Config,

    // Internal
    Internal,
}

impl HearthErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            HearthErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            HearthErrorKind::InvalidName => "ERR_INVALID_NAME",
            HearthErrorKind::InvalidLimit => "ERR_INVALID_LIMIT",
            HearthErrorKind::LimitReached => "ERR_LIMIT_REACHED",
            HearthErrorKind::NotFound => "ERR_NOT_FOUND",
            HearthErrorKind::WorldNotLoaded => "ERR_WORLD_NOT_LOADED",
            HearthErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            HearthErrorKind::Persistence => "ERR_PERSISTENCE",
            HearthErrorKind::Serialization => "ERR_SERIALIZATION",
            HearthErrorKind::Io => "ERR_IO",
            HearthErrorKind::Config => "ERR_CONFIG",
            HearthErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a kind for classification plus optional context fields for
/// debugging. Context is attached with the builder methods.
#[derive(Debug, Clone)]
pub struct HearthError {
    kind: HearthErrorKind,
    op: Option<String>,
    player: Option<String>,
    home: Option<String>,
    message: String,
    source: Option<Box<HearthError>>,
}

impl HearthError {
    /// Create a new error with the specified kind
    pub fn new(kind: HearthErrorKind) -> Self {
        Self {
            kind,
            op: None,
            player: None,
            home: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add player identity context
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }

    /// Add home name context
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: HearthError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> HearthErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the player context, if any
    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    /// Get the home name context, if any
    pub fn home(&self) -> Option<&str> {
        self.home.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&HearthError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for HearthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(player) = &self.player {
            write!(f, " (player: {})", player)?;
        }
        if let Some(home) = &self.home {
            write!(f, " (home: {})", home)?;
        }
        Ok(())
    }
}

impl std::error::Error for HearthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
