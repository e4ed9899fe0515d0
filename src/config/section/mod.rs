//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module  | TOML Section                | Purpose                        |
//! |---------|-----------------------------|--------------------------------|
//! | `build` | `[build]`, `[build.images]` | Output, assets, image fallback |
//! | `serve` | `[serve]`                   | Development server             |
//! | `site`  | `[site]`                    | Site info                      |

mod build;
mod serve;
mod site;

pub use build::{BuildSectionConfig, ImagesConfig};
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
