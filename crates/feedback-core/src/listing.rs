//! Suggestions Listing
//!
//! Category filter and sort order for the suggestions page, plus the
//! per-column counts shown in the sidebar.

use std::fmt;

use crate::model::{Category, FeedbackItem, Status};
use crate::projection::{project, ROADMAP_STATUSES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    MostUpvotes,
    LeastUpvotes,
    MostComments,
    LeastComments,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::MostUpvotes,
        SortOrder::LeastUpvotes,
        SortOrder::MostComments,
        SortOrder::LeastComments,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::MostUpvotes => "Most Upvotes",
            SortOrder::LeastUpvotes => "Least Upvotes",
            SortOrder::MostComments => "Most Comments",
            SortOrder::LeastComments => "Least Comments",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    fn sort(&self, items: &mut [FeedbackItem]) {
        match self {
            SortOrder::MostUpvotes => items.sort_by(|a, b| b.upvotes.cmp(&a.upvotes)),
            SortOrder::LeastUpvotes => items.sort_by_key(|i| i.upvotes),
            SortOrder::MostComments => items.sort_by(|a, b| b.comment_count().cmp(&a.comment_count())),
            SortOrder::LeastComments => items.sort_by_key(FeedbackItem::comment_count),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Sidebar order
    pub const ALL: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Ui),
        CategoryFilter::Only(Category::Ux),
        CategoryFilter::Only(Category::Enhancement),
        CategoryFilter::Only(Category::Bug),
        CategoryFilter::Only(Category::Feature),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn matches(&self, item: &FeedbackItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

/// Items for the suggestions page: filtered by category, stably sorted
pub fn suggestions(items: &[FeedbackItem], filter: CategoryFilter, order: SortOrder) -> Vec<FeedbackItem> {
    let mut visible: Vec<FeedbackItem> = items.iter().filter(|i| filter.matches(i)).cloned().collect();
    order.sort(&mut visible);
    visible
}

/// `(status, count)` for each roadmap column
pub fn roadmap_counts(items: &[FeedbackItem]) -> [(Status, usize); 3] {
    let columns = project(items);
    ROADMAP_STATUSES.map(|status| (status, columns.count(status)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{make_comment, make_item};

    fn sample() -> Vec<FeedbackItem> {
        let mut a = make_item("a", Status::Suggestion);
        a.upvotes = 10;
        a.category = Category::Ui;
        a.comments = Some(vec![make_comment("c1")]);
        let mut b = make_item("b", Status::Planned);
        b.upvotes = 50;
        b.category = Category::Bug;
        let mut c = make_item("c", Status::Live);
        c.upvotes = 10;
        c.category = Category::Ui;
        c.comments = Some(vec![make_comment("c2"), make_comment("c3")]);
        vec![a, b, c]
    }

    fn ids(items: &[FeedbackItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_sort_orders() {
        let items = sample();
        assert_eq!(ids(&suggestions(&items, CategoryFilter::All, SortOrder::MostUpvotes)), vec!["b", "a", "c"]);
        assert_eq!(ids(&suggestions(&items, CategoryFilter::All, SortOrder::LeastUpvotes)), vec!["a", "c", "b"]);
        assert_eq!(ids(&suggestions(&items, CategoryFilter::All, SortOrder::MostComments)), vec!["c", "a", "b"]);
        assert_eq!(ids(&suggestions(&items, CategoryFilter::All, SortOrder::LeastComments)), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_category_filter() {
        let items = sample();
        let ui = suggestions(&items, CategoryFilter::Only(Category::Ui), SortOrder::MostUpvotes);
        assert_eq!(ids(&ui), vec!["a", "c"]);
        assert!(suggestions(&items, CategoryFilter::Only(Category::Feature), SortOrder::default()).is_empty());
    }

    #[test]
    fn test_roadmap_counts() {
        let counts = roadmap_counts(&sample());
        assert_eq!(counts, [(Status::Planned, 1), (Status::InProgress, 0), (Status::Live, 1)]);
    }

    #[test]
    fn test_sort_labels_round_trip() {
        assert_eq!(SortOrder::from_label("Least Comments"), Some(SortOrder::LeastComments));
        assert_eq!(SortOrder::from_label("Newest"), None);
    }
}
