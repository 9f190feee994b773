use formorder_core_types::FieldKey;
use thiserror::Error;

/// Result type alias using FormOrderError
pub type Result<T> = std::result::Result<T, FormOrderError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    AlreadyExists,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification kind plus the context needed to find the
/// offending configuration: the operation, the field type and the key.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    field_type: Option<String>,
    key: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            field_type: None,
            key: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add field type context
    pub fn with_field_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    /// Add descriptor key context
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
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

    /// Get the field type context, if any
    pub fn field_type(&self) -> Option<&str> {
        self.field_type.as_deref()
    }

    /// Get the key context, if any
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field_type) = &self.field_type {
            write!(f, " (field_type: {})", field_type)?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key: {})", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for field ordering operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormOrderError {
    // ===== Input Errors =====
    /// Base descriptor set lists the same key twice
    #[error("Duplicate descriptor key in base set: {key}")]
    DuplicateBaseKey { key: FieldKey },

    /// Canonical order lists the same key twice
    #[error("Duplicate key in canonical order: {key}")]
    DuplicateOrderKey { key: FieldKey },

    // ===== Registry Errors =====
    /// A field type was registered more than once
    #[error("Field type already registered: {field_type}")]
    DuplicateFieldType { field_type: String },

    /// No layout is registered for the field type
    #[error("Unknown field type: {field_type}")]
    UnknownFieldType { field_type: String },

    // ===== Layout File Errors =====
    /// Layout file declares a schema version this build does not read
    #[error("Unsupported schema_version: {version}. Expected 0")]
    UnsupportedSchemaVersion { version: u32 },

    /// Layout file is well-formed but semantically invalid
    #[error("Invalid layout: {reason}")]
    InvalidLayout { reason: String },

    /// YAML or JSON decoding failed
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Reading a layout or descriptor file failed
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    // ===== Generic Errors =====
    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FormOrderError {
    /// Classification kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            FormOrderError::DuplicateBaseKey { .. }
            | FormOrderError::DuplicateOrderKey { .. }
            | FormOrderError::UnsupportedSchemaVersion { .. }
            | FormOrderError::InvalidLayout { .. } => ExErrorKind::InvalidInput,
            FormOrderError::DuplicateFieldType { .. } => ExErrorKind::AlreadyExists,
            FormOrderError::UnknownFieldType { .. } => ExErrorKind::NotFound,
            FormOrderError::Parse { .. } => ExErrorKind::Serialization,
            FormOrderError::Io { .. } => ExErrorKind::Io,
            FormOrderError::Internal { .. } => ExErrorKind::Internal,
        }
    }
}

/// Conversion from FormOrderError to ExError
impl From<FormOrderError> for ExError {
    fn from(err: FormOrderError) -> Self {
        let kind = err.kind();
        match err {
            FormOrderError::DuplicateBaseKey { key } => ExError::new(kind)
                .with_op("rearrange")
                .with_key(key.into_string())
                .with_message("Duplicate descriptor key in base set"),

            FormOrderError::DuplicateOrderKey { key } => ExError::new(kind)
                .with_op("canonical_order")
                .with_key(key.into_string())
                .with_message("Duplicate key in canonical order"),

            FormOrderError::DuplicateFieldType { field_type } => ExError::new(kind)
                .with_op("registry_build")
                .with_field_type(field_type)
                .with_message("Field type already registered"),

            FormOrderError::UnknownFieldType { field_type } => ExError::new(kind)
                .with_op("registry_lookup")
                .with_field_type(field_type)
                .with_message("Unknown field type"),

            FormOrderError::UnsupportedSchemaVersion { version } => ExError::new(kind)
                .with_op("layout_parse")
                .with_message(format!("Unsupported schema_version: {}", version)),

            FormOrderError::InvalidLayout { reason } => ExError::new(kind)
                .with_op("layout_parse")
                .with_message(reason),

            FormOrderError::Parse { message } => ExError::new(kind)
                .with_op("layout_parse")
                .with_message(message),

            FormOrderError::Io { path, message } => ExError::new(kind)
                .with_op("read_file")
                .with_message(format!("{}: {}", path, message)),

            FormOrderError::Internal { message } => ExError::new(kind).with_message(message),
        }
    }
}
