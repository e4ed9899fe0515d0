//! Writings list filtering.
//!
//! Three conjunctive predicates per record:
//!
//! | Dimension | Empty means      | Otherwise                                  |
//! |-----------|------------------|--------------------------------------------|
//! | category  | (always applied) | record category equals the requested one   |
//! | query     | match all        | case-insensitive substring of title/excerpt |
//! | tags      | match all        | record carries at least one selected tag   |
//!
//! Every call is a full scan of the collection; the collection is small and
//! fixed at build time.

use rustc_hash::FxHashSet;

use super::writing::{Category, Tag, WritingRecord};

/// Visible subset of `records`, in original order.
///
/// An unknown `category` id yields an empty result.
pub fn filter<'a>(
    records: &'a [WritingRecord],
    category: &str,
    query: &str,
    selected_tags: &FxHashSet<Tag>,
) -> Vec<&'a WritingRecord> {
    let Some(category) = Category::from_id(category) else {
        return Vec::new();
    };
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|w| w.category == category)
        .filter(|w| needle.is_empty() || matches_query(w, &needle))
        .filter(|w| selected_tags.is_empty() || selected_tags.iter().any(|t| w.has_tag(*t)))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_query(writing: &WritingRecord, needle: &str) -> bool {
    writing.title.to_lowercase().contains(needle) || writing.excerpt.to_lowercase().contains(needle)
}

/// Filter state owned by a writings list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub tags: FxHashSet<Tag>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select `tag` if unselected, unselect it otherwise.
    pub fn toggle_tag(&mut self, tag: Tag) {
        if !self.tags.remove(&tag) {
            self.tags.insert(tag);
        }
    }

    pub fn is_selected(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.tags.clear();
    }

    /// Criteria from a query string: `q` is the search text, each `tag`
    /// selects one tag. Unknown tags and keys are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut criteria = Self::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "q" => criteria.set_query(value.into_owned()),
                "tag" => criteria.tags.extend(Tag::from_id(&value)),
                _ => {}
            }
        }
        criteria
    }

    /// Inverse of [`Self::from_query`], with a leading `?`. Tags follow the
    /// vocabulary order. Empty for the default criteria.
    pub fn to_query(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        if !self.query.is_empty() {
            query.append_pair("q", &self.query);
        }
        for tag in Tag::ALL.into_iter().filter(|t| self.is_selected(*t)) {
            query.append_pair("tag", tag.id());
        }
        match query.finish() {
            q if q.is_empty() => q,
            q => format!("?{q}"),
        }
    }

    pub fn apply<'a>(
        &self,
        records: &'a [WritingRecord],
        category: &str,
    ) -> Vec<&'a WritingRecord> {
        filter(records, category, &self.query, &self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    fn tags(list: &[Tag]) -> FxHashSet<Tag> {
        list.iter().copied().collect()
    }

    fn titles(found: &[&WritingRecord]) -> Vec<String> {
        found.iter().map(|w| w.title.clone()).collect()
    }

    #[test]
    fn test_category_only_keeps_order() {
        let catalog = Catalog::load().unwrap();
        let found = filter(&catalog.writings, "poems", "", &tags(&[]));

        let expected: Vec<_> = catalog
            .writings
            .iter()
            .filter(|w| w.category == Category::Poems)
            .map(|w| w.title.clone())
            .collect();
        assert!(!expected.is_empty());
        assert_eq!(titles(&found), expected);
    }

    #[test]
    fn test_query_matches_title_case_insensitive() {
        let catalog = Catalog::load().unwrap();
        let found = filter(&catalog.writings, "poems", "road", &tags(&[]));
        assert_eq!(titles(&found), vec!["The Road Less Traveled"]);

        let found = filter(&catalog.writings, "poems", "ROAD", &tags(&[]));
        assert_eq!(titles(&found), vec!["The Road Less Traveled"]);
    }

    #[test]
    fn test_query_matches_excerpt() {
        let catalog = Catalog::load().unwrap();
        let found = filter(&catalog.writings, "poems", "neem tree", &tags(&[]));
        assert_eq!(titles(&found), vec!["Village Dreams"]);
    }

    #[test]
    fn test_tag_filter() {
        let catalog = Catalog::load().unwrap();
        let found = filter(&catalog.writings, "poems", "", &tags(&[Tag::Motivation]));

        let ids: Vec<_> = found.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["poem-1", "poem-3"]);
        assert!(!titles(&found).contains(&"Roots and Wings".to_string()));
    }

    #[test]
    fn test_tags_are_or_within_dimension() {
        let catalog = Catalog::load().unwrap();
        let love = filter(&catalog.writings, "poems", "", &tags(&[Tag::Love])).len();
        let society = filter(&catalog.writings, "poems", "", &tags(&[Tag::Society])).len();
        let either = filter(&catalog.writings, "poems", "", &tags(&[Tag::Love, Tag::Society]));
        assert!(either.len() >= love.max(society));
        assert!(either.iter().all(|w| w.has_tag(Tag::Love) || w.has_tag(Tag::Society)));
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = Catalog::load().unwrap();
        assert!(filter(&catalog.writings, "stories", "zzz-no-match", &tags(&[])).is_empty());
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = Catalog::load().unwrap();
        assert!(filter(&catalog.writings, "essays", "", &tags(&[])).is_empty());
        assert!(filter(&catalog.writings, "", "", &tags(&[])).is_empty());
    }

    #[test]
    fn test_all_dimensions_conjunctive() {
        let catalog = Catalog::load().unwrap();
        // "Roots and Wings" is tagged love but does not mention "road".
        let found = filter(&catalog.writings, "poems", "road", &tags(&[Tag::Love]));
        assert!(found.is_empty());
    }

    #[test]
    fn test_criteria_toggle() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_tag(Tag::Hope);
        assert!(criteria.is_selected(Tag::Hope));
        criteria.toggle_tag(Tag::Hope);
        assert!(!criteria.is_selected(Tag::Hope));

        criteria.set_query("road");
        criteria.toggle_tag(Tag::Youth);
        criteria.clear();
        assert_eq!(criteria, FilterCriteria::new());
    }

    #[test]
    fn test_criteria_apply() {
        let catalog = Catalog::load().unwrap();
        let criteria = FilterCriteria::new().with_query("road");
        assert_eq!(titles(&criteria.apply(&catalog.writings, "poems")), vec!["The Road Less Traveled"]);
    }

    #[test]
    fn test_from_query() {
        let criteria = FilterCriteria::from_query("q=road+less&tag=hope&tag=self-growth&tag=bogus&x=1");
        assert_eq!(criteria.query, "road less");
        assert_eq!(criteria.tags, tags(&[Tag::Hope, Tag::SelfGrowth]));

        assert_eq!(FilterCriteria::from_query(""), FilterCriteria::default());
        assert_eq!(FilterCriteria::from_query("q="), FilterCriteria::default());
    }

    #[test]
    fn test_to_query() {
        assert_eq!(FilterCriteria::new().to_query(), "");

        let criteria = FilterCriteria::new()
            .with_query("road & co")
            .with_tags([Tag::Hope, Tag::Motivation]);
        assert_eq!(criteria.to_query(), "?q=road+%26+co&tag=motivation&tag=hope");
        assert_eq!(FilterCriteria::from_query(&criteria.to_query()[1..]), criteria);
    }
}
