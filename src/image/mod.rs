//! Image reference resolution.
//!
//! # Modules
//!
//! - [`candidates`]: expand one path into ordered candidate URLs
//! - [`attempt`]: sequential load-attempt state machine
//! - [`loader`]: filesystem loader and modern-format check
//! - [`resolver`]: memoized resolution used by the renderer
//! - [`sizes`]: responsive `sizes` presets
//!
//! ```text
//! "/images/hero.jpg"
//!         │
//!         ▼
//!   ┌────────────┐
//!   │ candidates │ ──► [hero.webp, hero.jpg, hero.jpeg, hero.png]
//!   └─────┬──────┘
//!         │
//!         ▼
//!   ┌─────────┐
//!   │ attempt │ ──► Trying(0) → Trying(1) → Succeeded(1) | Exhausted
//!   └─────┬───┘
//!         │
//!         ▼
//!   src = hero.jpg   (or the placeholder)
//! ```

pub mod attempt;
pub mod candidates;
pub mod loader;
pub mod resolver;
pub mod sizes;

pub use attempt::{AttemptState, LoadAttempt};
pub use candidates::MODERN_EXT;
pub use loader::{FsLoader, ImageLoader, LoadError, modern_available};
pub use resolver::{ImageResolver, assets_root};
pub use sizes::SizePreset;
