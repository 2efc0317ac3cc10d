use thiserror::Error;

/// Result type alias using EnumCheckError
pub type Result<T> = std::result::Result<T, EnumCheckError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Malformed enumeration descriptor or other caller input
    InvalidInput,
    /// Random selection from an enumeration with no declared values
    EmptyDomain,
    /// Descriptor or diff (de)serialization failed
    Serialization,
    /// Shared random source could not be acquired
    Concurrency,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::EmptyDomain => "ERR_EMPTY_DOMAIN",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context
/// for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    enum_type: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            enum_type: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add enumeration type context
    pub fn with_enum_type(mut self, enum_type: impl Into<String>) -> Self {
        self.enum_type = Some(enum_type.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
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

    /// Get the enumeration type context, if any
    pub fn enum_type(&self) -> Option<&str> {
        self.enum_type.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        if let Some(enum_type) = &self.enum_type {
            write!(f, " (enum_type: {})", enum_type)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for enumcheck operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnumCheckError {
    /// Random selection requested from an enumeration with no values
    #[error("Enumeration {enum_type} declares no values")]
    EmptyDomain { enum_type: String },

    /// A random source returned an index outside the requested range
    #[error("Random source returned index {index} for {len} values of {enum_type}")]
    IndexOutOfRange {
        enum_type: String,
        index: usize,
        len: usize,
    },

    /// The shared random source could not be locked
    #[error("Random source unavailable: {reason}")]
    RandomSourceUnavailable { reason: String },

    /// A descriptor failed validation
    #[error("Invalid enum descriptor: {reason}")]
    InvalidDescriptor { reason: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<EnumCheckError> for ExError {
    fn from(err: EnumCheckError) -> Self {
        match err {
            EnumCheckError::EmptyDomain { enum_type } => ExError::new(ExErrorKind::EmptyDomain)
                .with_op("random_value")
                .with_enum_type(enum_type)
                .with_message("Enumeration declares no values"),

            EnumCheckError::IndexOutOfRange {
                enum_type,
                index,
                len,
            } => ExError::new(ExErrorKind::Internal)
                .with_op("random_value")
                .with_enum_type(enum_type)
                .with_message(format!("Index {} out of range for {} values", index, len)),

            EnumCheckError::RandomSourceUnavailable { reason } => {
                ExError::new(ExErrorKind::Concurrency)
                    .with_message(format!("Random source unavailable: {}", reason))
            }

            EnumCheckError::InvalidDescriptor { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Invalid enum descriptor: {}", reason)),

            EnumCheckError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to EnumCheckError
impl From<serde_json::Error> for EnumCheckError {
    fn from(err: serde_json::Error) -> Self {
        EnumCheckError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::EmptyDomain, "ERR_EMPTY_DOMAIN"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
            (ExErrorKind::Concurrency, "ERR_CONCURRENCY"),
            (ExErrorKind::Internal, "ERR_INTERNAL"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_code_op_and_type() {
        let err = ExError::new(ExErrorKind::EmptyDomain)
            .with_op("random_value")
            .with_enum_type("Namespace.Empty")
            .with_message("Enumeration declares no values");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_EMPTY_DOMAIN]"));
        assert!(rendered.contains("'random_value'"));
        assert!(rendered.contains("Namespace.Empty"));
    }

    #[test]
    fn test_source_chain() {
        let inner = ExError::new(ExErrorKind::Concurrency);
        let outer = ExError::new(ExErrorKind::Internal).with_source(inner);
        assert_eq!(
            outer.source_error().map(ExError::kind),
            Some(ExErrorKind::Concurrency)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }

    #[test]
    fn test_serde_json_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: EnumCheckError = parse_err.into();
        assert!(matches!(err, EnumCheckError::Serialization { .. }));
    }
}
