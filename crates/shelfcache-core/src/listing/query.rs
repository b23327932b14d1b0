use crate::models::InventoryItem;
use crate::utils::{cmp_ignore_case, contains_ignore_case};

/// Category value that bypasses the category filter.
pub const ALL_CATEGORIES: &str = "all";

// Sorting options for the inventory listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Sheet order
    #[default]
    Default,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Default => "default",
            SortBy::NameAsc => "name-asc",
            SortBy::NameDesc => "name-desc",
            SortBy::PriceAsc => "price-asc",
            SortBy::PriceDesc => "price-desc",
        }
    }

    /// Parse a sort selector value; anything unknown leaves the list unsorted.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "name-asc" => SortBy::NameAsc,
            "name-desc" => SortBy::NameDesc,
            "price-asc" => SortBy::PriceAsc,
            "price-desc" => SortBy::PriceDesc,
            _ => SortBy::Default,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Default => "Featured",
            SortBy::NameAsc => "Name A-Z",
            SortBy::NameDesc => "Name Z-A",
            SortBy::PriceAsc => "Price low-high",
            SortBy::PriceDesc => "Price high-low",
        }
    }

    /// Get the next sort option (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            SortBy::Default => SortBy::NameAsc,
            SortBy::NameAsc => SortBy::NameDesc,
            SortBy::NameDesc => SortBy::PriceAsc,
            SortBy::PriceAsc => SortBy::PriceDesc,
            SortBy::PriceDesc => SortBy::Default,
        }
    }
}

/// Parse a price bound typed by the user. Blank or non-numeric input means
/// the bound is absent.
pub fn parse_bound(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text.strip_prefix('$').unwrap_or(text);
    let digits: String = text.chars().filter(|c| *c != ',').collect();
    digits.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Everything that decides which inventory items are listed, and in what order.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryQuery {
    pub category: String,
    pub search: String,
    pub sort: SortBy,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl Default for InventoryQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            sort: SortBy::Default,
            price_min: None,
            price_max: None,
        }
    }
}

impl InventoryQuery {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    fn is_all_categories(&self) -> bool {
        let category = self.category.trim();
        category.is_empty() || category.eq_ignore_ascii_case(ALL_CATEGORIES)
    }

    pub fn matches_category(&self, item: &InventoryItem) -> bool {
        self.is_all_categories() || item.category == self.category.trim().to_lowercase()
    }

    /// `term` must already be lowercase; empty matches everything.
    fn matches_term(item: &InventoryItem, term: &str) -> bool {
        term.is_empty()
            || contains_ignore_case(&item.name, term)
            || contains_ignore_case(&item.price, term)
    }

    pub fn matches_search(&self, item: &InventoryItem) -> bool {
        Self::matches_term(item, &self.search.to_lowercase())
    }

    pub fn matches_price(&self, item: &InventoryItem) -> bool {
        self.price_min.map_or(true, |min| item.price_value >= min)
            && self.price_max.map_or(true, |max| item.price_value <= max)
    }

    /// Filter by category, then search, then price bounds, then sort.
    /// The sort is stable, so ties keep sheet order.
    pub fn apply<'a>(&self, items: &'a [InventoryItem]) -> Vec<&'a InventoryItem> {
        let term = self.search.to_lowercase();
        let mut matched: Vec<&InventoryItem> = items
            .iter()
            .filter(|item| self.matches_category(item))
            .filter(|item| Self::matches_term(item, &term))
            .filter(|item| self.matches_price(item))
            .collect();

        match self.sort {
            SortBy::Default => {}
            SortBy::NameAsc => matched.sort_by(|a, b| cmp_ignore_case(&a.name, &b.name)),
            SortBy::NameDesc => matched.sort_by(|a, b| cmp_ignore_case(&b.name, &a.name)),
            SortBy::PriceAsc => matched.sort_by(|a, b| a.price_value.total_cmp(&b.price_value)),
            SortBy::PriceDesc => matched.sort_by(|a, b| b.price_value.total_cmp(&a.price_value)),
        }
        matched
    }
}
