//! Responsive `sizes` attribute presets.

/// Named `sizes` value for an `<img>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePreset {
    Thumbnail,
    Card,
    Hero,
}

impl SizePreset {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thumbnail => "(max-width: 640px) 100px, 150px",
            Self::Card => "(max-width: 640px) 100%, (max-width: 1024px) 50%, 33%",
            Self::Hero => "100vw",
        }
    }

    /// Hero images load eagerly, everything else lazily.
    pub const fn loading(self) -> &'static str {
        match self {
            Self::Hero => "eager",
            _ => "lazy",
        }
    }
}
