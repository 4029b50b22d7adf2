//! Render configuration.
//!
//! [`RenderConfig`] holds the limits the built-in handlers apply. Every field
//! has a default matching the long-standing behavior, so configuration files
//! only need to name what they change:
//!
//! ```yaml
//! page_size: 25
//! inspector_depth: 3
//! ```
//!
//! ```rust
//! use cellout::RenderConfig;
//!
//! let config = RenderConfig::from_yaml("page_size: 25\n").unwrap();
//! assert_eq!(config.page_size, 25);
//! assert_eq!(config.array_threshold, 500);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Arrays with at least this many elements are rendered head and tail only.
pub const ARRAY_TRUNCATION_THRESHOLD: usize = 500;

/// Elements shown from the start of a truncated array.
pub const ARRAY_HEAD: usize = 100;

/// Elements shown from the end of a truncated array.
pub const ARRAY_TAIL: usize = 100;

/// Maximum rows per table page.
pub const PAGE_SIZE: usize = 10;

/// Page sizes offered by table pagination controls.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];

/// Rows and columns shown in a matrix preview.
pub const MATRIX_PREVIEW: usize = 10;

/// Limits applied by the built-in handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Arrays at least this long are truncated.
    pub array_threshold: usize,
    /// Leading elements kept when truncating.
    pub array_head: usize,
    /// Trailing elements kept when truncating.
    pub array_tail: usize,
    /// Maximum rows per table page.
    pub page_size: usize,
    /// Page sizes offered by the pagination controls.
    pub page_size_options: Vec<usize>,
    /// Matrix rows shown in the preview grid.
    pub matrix_preview_rows: usize,
    /// Matrix columns shown in the preview grid.
    pub matrix_preview_cols: usize,
    /// Display width a matrix cell is truncated to.
    pub matrix_cell_width: usize,
    /// Nesting depth the inspector expands before collapsing to a summary.
    pub inspector_depth: usize,
    /// Entries the inspector lists per object before eliding the rest.
    pub inspector_max_props: usize,
    /// Render strings and numbers as plain spans instead of inspecting them.
    pub scalar_spans: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            array_threshold: ARRAY_TRUNCATION_THRESHOLD,
            array_head: ARRAY_HEAD,
            array_tail: ARRAY_TAIL,
            page_size: PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            matrix_preview_rows: MATRIX_PREVIEW,
            matrix_preview_cols: MATRIX_PREVIEW,
            matrix_cell_width: 12,
            inspector_depth: 2,
            inspector_max_props: 10,
            scalar_spans: false,
        }
    }
}

impl RenderConfig {
    /// Parses and validates a YAML configuration.
    pub fn from_yaml(source: &str) -> Result<Self, RenderError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(source: &str) -> Result<Self, RenderError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the limits are usable.
    ///
    /// Head and tail must fit inside the threshold so the two windows of a
    /// truncated array never overlap.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.page_size == 0 {
            return Err(RenderError::Config("page_size must be at least 1".into()));
        }
        let window = self
            .array_head
            .checked_add(self.array_tail)
            .filter(|&window| window <= self.array_threshold);
        if window.is_none() {
            return Err(RenderError::Config(format!(
                "array_head ({}) + array_tail ({}) exceeds array_threshold ({})",
                self.array_head, self.array_tail, self.array_threshold
            )));
        }
        if self.matrix_preview_rows == 0 || self.matrix_preview_cols == 0 {
            return Err(RenderError::Config(
                "matrix preview must be at least 1 × 1".into(),
            ));
        }
        if self.matrix_cell_width < 2 {
            return Err(RenderError::Config(
                "matrix_cell_width must be at least 2".into(),
            ));
        }
        if self.inspector_max_props == 0 {
            return Err(RenderError::Config(
                "inspector_max_props must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
