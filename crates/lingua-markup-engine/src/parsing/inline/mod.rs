//! # Inline Markup Scanning
//!
//! A single left-to-right pass over a line payload with three states:
//! plain, inside `**bold**`, inside `[stressed]`.
//!
//! ## Modules
//!
//! - **`kinds`**: inline delimiters (`Emphasis`, `Stress`)
//! - **`cursor`**: `Cursor` for char-by-char scanning
//! - **`scanner`**: `scan_inline()` and the restricted `scan_pronunciation()`
//!
//! ## Degradation
//!
//! An opener with no closer before the end of the payload is kept as literal
//! text together with everything after it. Empty spans (`****`, `[]`) vanish.

pub mod cursor;
pub mod kinds;
pub mod scanner;

pub use scanner::{scan_inline, scan_pronunciation};
