// Checker resource limits module
//
// Provides configurable resource limits to prevent:
// - Stack overflow from deeply nested scopes
// - Oversized diagnostic messages
// - Denial of service from pathological AST fixtures
//
// All limits have sensible defaults and can be overridden via project.toml

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Checker safety limits with permissive defaults.
#[derive(Debug, Clone)]
pub struct CheckerLimits {
    /// Maximum nested `enter_scope` depth before the checker refuses to
    /// descend further (defensive guard against pathological fixtures).
    pub max_scope_depth: usize,
    /// Byte cap applied to every diagnostic message (the spec's 255-byte
    /// `snprintf` truncation, made overridable).
    pub max_diagnostic_message_len: usize,
    /// Loose ceiling on fixture size for the CLI harness, standing in for
    /// the limit the out-of-scope lexer/parser would normally enforce.
    pub max_ast_nodes: usize,
}

// Default limits (permissive for developer productivity)
impl Default for CheckerLimits {
    fn default() -> Self {
        Self {
            max_scope_depth: 256,
            max_diagnostic_message_len: 255,
            max_ast_nodes: 1_000_000,
        }
    }
}

impl CheckerLimits {
    /// Create with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Load limits from project.toml, falling back to defaults
    ///
    /// Returns error only if TOML is malformed or invalid, not if the file
    /// is simply missing.
    pub fn from_project_toml<P: AsRef<Path>>(path: P) -> Result<Self, LimitError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| LimitError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let config: ProjectConfig = toml::from_str(&content).map_err(|e| LimitError {
            message: format!("Failed to parse {}: {}", path.display(), e),
        })?;

        let mut limits = Self::default();

        if let Some(limits_config) = config.limits {
            if let Some(v) = limits_config.max_scope_depth {
                limits.max_scope_depth = v;
            }
            if let Some(v) = limits_config.max_diagnostic_message_len {
                limits.max_diagnostic_message_len = v;
            }
            if let Some(v) = limits_config.max_ast_nodes {
                limits.max_ast_nodes = v;
            }
        }

        limits.validate()?;
        Ok(limits)
    }

    /// Validate that all limits are reasonable (positive, not absurdly large)
    pub fn validate(&self) -> Result<(), LimitError> {
        if self.max_scope_depth == 0 || self.max_scope_depth > 10_000 {
            return Err(LimitError::invalid("max_scope_depth", self.max_scope_depth));
        }

        if self.max_diagnostic_message_len == 0 || self.max_diagnostic_message_len > 10_000 {
            return Err(LimitError::invalid(
                "max_diagnostic_message_len",
                self.max_diagnostic_message_len,
            ));
        }

        if self.max_ast_nodes == 0 || self.max_ast_nodes > 10_000_000 {
            return Err(LimitError::invalid("max_ast_nodes", self.max_ast_nodes));
        }

        Ok(())
    }
}

/// TOML configuration structures for deserialization
#[derive(Debug, Deserialize)]
struct ProjectConfig {
    limits: Option<LimitsConfig>,
}

#[derive(Debug, Deserialize)]
struct LimitsConfig {
    max_scope_depth: Option<usize>,
    max_diagnostic_message_len: Option<usize>,
    max_ast_nodes: Option<usize>,
}

/// Error type for limit validation and loading
#[derive(Debug, Clone)]
pub struct LimitError {
    pub message: String,
}

impl LimitError {
    fn invalid(name: &str, value: usize) -> Self {
        Self {
            message: format!(
                "Invalid limit '{}': {} (must be positive and reasonable)",
                name, value
            ),
        }
    }
}

impl std::fmt::Display for LimitError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Limit error: {}", self.message)
    }
}

impl std::error::Error for LimitError {}
