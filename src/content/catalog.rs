//! Embedded site content.
//!
//! All records are TOML files compiled into the binary and parsed once at
//! startup. Nothing is created, changed or removed at runtime.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::writing::WritingRecord;
use crate::utils::date::Date;

const WRITINGS: &str = include_str!("data/writings.toml");
const BOOKS: &str = include_str!("data/books.toml");
const EVENTS: &str = include_str!("data/events.toml");
const JOURNEY: &str = include_str!("data/journey.toml");
const SPEAKER: &str = include_str!("data/speaker.toml");
const IMPACT: &str = include_str!("data/impact.toml");
const HOME: &str = include_str!("data/home.toml");

/// Problems with the embedded content.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse embedded `{0}`")]
    Parse(&'static str, #[source] toml::de::Error),

    #[error("duplicate writing id `{0}`")]
    DuplicateId(String),

    #[error("writing `{id}` has an invalid date: {reason}")]
    InvalidDate { id: String, reason: String },
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub description: String,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub buy_link: Option<String>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    pub published_year: u16,
}

/// Closed set of gallery image categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryCategory {
    Workshop,
    Conference,
    Award,
    Community,
    Media,
}

impl GalleryCategory {
    pub const ALL: [Self; 5] = [
        Self::Workshop,
        Self::Conference,
        Self::Award,
        Self::Community,
        Self::Media,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Workshop => "workshop",
            Self::Conference => "conference",
            Self::Award => "award",
            Self::Community => "community",
            Self::Media => "media",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Workshop => "Workshops",
            Self::Conference => "Conferences",
            Self::Award => "Awards",
            Self::Community => "Community",
            Self::Media => "Media",
        }
    }
}

/// Gallery view filter: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryFilter {
    #[default]
    All,
    Only(GalleryCategory),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub category: GalleryCategory,
    #[serde(default)]
    pub date: Option<String>,
}

impl Highlight {
    pub fn shown_for(&self, persona: Persona) -> bool {
        self.persona == Persona::Both || self.persona == persona
    }
}

impl GalleryImage {
    pub fn matches(&self, filter: GalleryFilter) -> bool {
        match filter {
            GalleryFilter::All => true,
            GalleryFilter::Only(category) => self.category == category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub year: u16,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub organization: String,
    pub role: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakingTopic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Keynote,
    Panel,
    Workshop,
    GuestLecture,
}

impl EventKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Keynote => "Keynote",
            Self::Panel => "Panel",
            Self::Workshop => "Workshop",
            Self::GuestLecture => "Guest Lecture",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakingEvent {
    pub id: String,
    pub event_name: String,
    pub venue: String,
    pub date: String,
    pub kind: EventKind,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactArea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub initiatives: Vec<String>,
}

/// Headline number shown on journey, speaker and impact pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactImage {
    pub id: String,
    pub src: String,
    pub alt: String,
    /// Id of an [`ImpactArea`].
    pub area: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroCopy {
    pub headline: String,
    pub subtitle: String,
}

/// Landing hero, one variant per persona.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub builder: HeroCopy,
    pub writer: HeroCopy,
}

/// Which side of the landing page a highlight belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Both,
    Builder,
    Writer,
}

impl Persona {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Builder => "builder",
            Self::Writer => "writer",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub id: String,
    pub persona: Persona,
    pub title: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Home {
    /// Hero background rotation; the first one is shown without scripts.
    pub images: Vec<String>,
    pub hero: Hero,
    pub highlights: Vec<Highlight>,
    pub social: Vec<SocialLink>,
}

// ============================================================================
// File shapes
// ============================================================================

#[derive(Deserialize)]
struct WritingsFile {
    writings: Vec<WritingRecord>,
}

#[derive(Deserialize)]
struct BooksFile {
    books: Vec<Book>,
}

#[derive(Deserialize)]
struct EventsFile {
    gallery: Vec<GalleryImage>,
    awards: Vec<Award>,
}

#[derive(Deserialize)]
struct JourneyFile {
    milestones: Vec<Milestone>,
    stats: Vec<Stat>,
}

#[derive(Deserialize)]
struct SpeakerFile {
    topics: Vec<SpeakingTopic>,
    events: Vec<SpeakingEvent>,
    stats: Vec<Stat>,
}

#[derive(Deserialize)]
struct ImpactFile {
    areas: Vec<ImpactArea>,
    stats: Vec<Stat>,
    images: Vec<ImpactImage>,
}

fn parse<T: serde::de::DeserializeOwned>(name: &'static str, src: &str) -> Result<T, CatalogError> {
    toml::from_str(src).map_err(|e| CatalogError::Parse(name, e))
}

// ============================================================================
// Catalog
// ============================================================================

/// Every piece of content on the site.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub home: Home,
    pub writings: Vec<WritingRecord>,
    pub books: Vec<Book>,
    pub gallery: Vec<GalleryImage>,
    pub awards: Vec<Award>,
    pub milestones: Vec<Milestone>,
    pub journey_stats: Vec<Stat>,
    pub topics: Vec<SpeakingTopic>,
    pub events: Vec<SpeakingEvent>,
    pub speaker_stats: Vec<Stat>,
    pub impact_areas: Vec<ImpactArea>,
    pub impact_stats: Vec<Stat>,
    pub impact_images: Vec<ImpactImage>,
}

impl Catalog {
    /// Parse and validate the embedded content.
    pub fn load() -> Result<Self, CatalogError> {
        let home: Home = parse("home.toml", HOME)?;
        let WritingsFile { writings } = parse("writings.toml", WRITINGS)?;
        let BooksFile { books } = parse("books.toml", BOOKS)?;
        let EventsFile { gallery, awards } = parse("events.toml", EVENTS)?;
        let journey: JourneyFile = parse("journey.toml", JOURNEY)?;
        let speaker: SpeakerFile = parse("speaker.toml", SPEAKER)?;
        let impact: ImpactFile = parse("impact.toml", IMPACT)?;

        let catalog = Self {
            home,
            writings,
            books,
            gallery,
            awards,
            milestones: journey.milestones,
            journey_stats: journey.stats,
            topics: speaker.topics,
            events: speaker.events,
            speaker_stats: speaker.stats,
            impact_areas: impact.areas,
            impact_stats: impact.stats,
            impact_images: impact.images,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = FxHashSet::default();
        for writing in &self.writings {
            if !seen.insert(writing.id.as_str()) {
                return Err(CatalogError::DuplicateId(writing.id.clone()));
            }
            Date::parse(&writing.date).map_err(|e| CatalogError::InvalidDate {
                id: writing.id.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    pub fn writing(&self, id: &str) -> Option<&WritingRecord> {
        self.writings.iter().find(|w| w.id == id)
    }

    /// Up to `limit` other writings from the same category, in catalog order.
    pub fn related(&self, writing: &WritingRecord, limit: usize) -> Vec<&WritingRecord> {
        self.writings
            .iter()
            .filter(|w| w.id != writing.id && w.category == writing.category)
            .take(limit)
            .collect()
    }

    pub fn featured(&self) -> impl Iterator<Item = &WritingRecord> {
        self.writings.iter().filter(|w| w.featured)
    }

    pub fn gallery(&self, filter: GalleryFilter) -> impl Iterator<Item = &GalleryImage> {
        self.gallery.iter().filter(move |img| img.matches(filter))
    }

    pub fn impact_images_for<'a>(&'a self, area: &'a str) -> impl Iterator<Item = &'a ImpactImage> {
        self.impact_images.iter().filter(move |img| img.area == area)
    }

    /// Every image URL referenced by the content, in first-seen order.
    pub fn image_urls(&self) -> Vec<&str> {
        let books = self.books.iter().filter_map(|b| b.cover_image.as_deref());
        let gallery = self.gallery.iter().map(|g| g.src.as_str());
        let awards = self.awards.iter().filter_map(|a| a.image.as_deref());
        let events = self.events.iter().filter_map(|e| e.image.as_deref());
        let impact = self.impact_images.iter().map(|i| i.src.as_str());
        let home = self.home.images.iter().map(String::as_str);

        let mut seen = FxHashSet::default();
        home.chain(books)
            .chain(gallery)
            .chain(awards)
            .chain(events)
            .chain(impact)
            .filter(|url| seen.insert(*url))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    #[test]
    fn test_embedded_content_loads() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.writings.is_empty());
        assert!(!catalog.books.is_empty());
        assert!(!catalog.awards.is_empty());
        assert_eq!(catalog.home.social.len(), 4);
        let builder = catalog.home.highlights.iter().filter(|h| h.shown_for(Persona::Builder));
        assert_eq!(builder.count(), 3);
        for category in Category::ALL {
            assert!(
                catalog.writings.iter().any(|w| w.category == category),
                "no writings in {}",
                category.id()
            );
        }
    }

    #[test]
    fn test_related_excludes_self_and_limits() {
        let catalog = Catalog::load().unwrap();
        let writing = catalog.writing("poem-1").unwrap();
        let related = catalog.related(writing, 3);
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|w| w.id != "poem-1"));
        assert!(related.iter().all(|w| w.category == Category::Poems));
        assert_eq!(related[0].id, "poem-2");
    }

    #[test]
    fn test_unknown_writing() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.writing("poem-999").is_none());
    }

    #[test]
    fn test_gallery_filter() {
        let catalog = Catalog::load().unwrap();
        let all = catalog.gallery(GalleryFilter::All).count();
        assert_eq!(all, catalog.gallery.len());

        let awards: Vec<_> = catalog
            .gallery(GalleryFilter::Only(GalleryCategory::Award))
            .collect();
        assert!(!awards.is_empty());
        assert!(awards.iter().all(|img| img.category == GalleryCategory::Award));
    }

    #[test]
    fn test_impact_images_belong_to_areas() {
        let catalog = Catalog::load().unwrap();
        for image in &catalog.impact_images {
            assert!(catalog.impact_areas.iter().any(|a| a.id == image.area), "{}", image.id);
        }
        assert_eq!(catalog.impact_images_for("youth").count(), 2);
    }

    #[test]
    fn test_image_urls_deduplicated() {
        let catalog = Catalog::load().unwrap();
        let urls = catalog.image_urls();
        assert_eq!(urls.iter().filter(|u| **u == "/placeholder.svg").count(), 1);
        assert!(urls.contains(&"/images/speaking2.jpeg"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut catalog = Catalog::load().unwrap();
        let copy = catalog.writings[0].clone();
        catalog.writings.push(copy);
        assert!(matches!(catalog.validate(), Err(CatalogError::DuplicateId(_))));
    }

    #[test]
    fn test_bad_date_rejected() {
        let mut catalog = Catalog::load().unwrap();
        catalog.writings[0].date = "2024-02-30".into();
        assert!(matches!(catalog.validate(), Err(CatalogError::InvalidDate { .. })));
    }
}
