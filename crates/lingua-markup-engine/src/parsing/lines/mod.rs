//! # Line Classification
//!
//! Each raw line is classified on its own, without reference to its
//! neighbours. The result borrows from the line and lives for one parse pass.
//!
//! ## Modules
//!
//! - **`kinds`**: line constructs with owned markers (Header, Bullet, Dialogue, ...)
//! - **`classify`**: `LineClassifier` produces a `LineClass` per line
//!
//! ## Precedence
//!
//! Checked in a fixed order, first match wins:
//! Blank, Header, Bullet, Dialogue, TranslationPair, Pronunciation, Plain.
//! Bullet before Dialogue settles `- ` lines as bullets.

pub mod classify;
pub mod kinds;

pub use classify::{LineClass, LineClassifier};
pub use kinds::Separator;
