//! Home page controller.

use std::sync::Mutex;

use crate::domain::{KnownCategory, ServerEntry};
use crate::routes::{DirectoryHints, Route};
use crate::services::CatalogReader;

use super::{ViewState, lock};

/// Data shown on the home page once both reads have completed.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeData {
    pub featured: Vec<ServerEntry>,
    pub sponsored: Vec<ServerEntry>,
}

/// A "Browse by Category" tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTile {
    pub category: KnownCategory,
    pub tagline: &'static str,
    pub route: Route,
}

/// Home page: featured and sponsored lists, loaded concurrently.
pub struct HomeView {
    reader: CatalogReader,
    featured: Mutex<Option<Vec<ServerEntry>>>,
    sponsored: Mutex<Option<Vec<ServerEntry>>>,
}

impl HomeView {
    pub fn new(reader: CatalogReader) -> Self {
        Self {
            reader,
            featured: Mutex::new(None),
            sponsored: Mutex::new(None),
        }
    }

    /// Issue both reads concurrently. Each writes only its own slot.
    pub async fn enter(&self) {
        tokio::join!(self.load_featured(), self.load_sponsored());
    }

    async fn load_featured(&self) {
        let featured = self.reader.list_featured().await;
        *lock(&self.featured) = Some(featured);
    }

    async fn load_sponsored(&self) {
        let sponsored = self.reader.list_sponsored().await;
        *lock(&self.sponsored) = Some(sponsored);
    }

    /// `Ready` once both lists have arrived (possibly empty).
    pub fn state(&self) -> ViewState<HomeData> {
        let featured = lock(&self.featured).clone();
        let sponsored = lock(&self.sponsored).clone();
        match (featured, sponsored) {
            (Some(featured), Some(sponsored)) => ViewState::Ready(HomeData {
                featured,
                sponsored,
            }),
            _ => ViewState::Loading,
        }
    }

    /// Category tiles linking into the directory.
    pub fn category_tiles() -> Vec<CategoryTile> {
        KnownCategory::ALL
            .into_iter()
            .map(|category| CategoryTile {
                category,
                tagline: category.tagline(),
                route: Route::Directory(DirectoryHints::category(category)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use crate::testing::FakeCatalog;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_home_loads_featured_and_sponsored() {
        let mut featured = fixtures::server("1", "Featured");
        featured.is_featured = true;
        let mut both = fixtures::server("2", "Both");
        both.is_featured = true;
        both.is_sponsored = true;
        let catalog = Arc::new(FakeCatalog::with_entries(vec![
            featured,
            both,
            fixtures::server("3", "Plain"),
        ]));
        let view = HomeView::new(CatalogReader::new(catalog.clone()));

        assert!(view.state().is_loading());
        view.enter().await;

        let data = view.state().ready().cloned().unwrap();
        assert_eq!(data.featured.len(), 2);
        assert_eq!(data.sponsored.len(), 1);
        assert_eq!(data.sponsored[0].id, "2");
        assert_eq!(catalog.call_count("featured_servers"), 1);
        assert_eq!(catalog.call_count("sponsored_servers"), 1);
    }

    #[tokio::test]
    async fn test_home_is_ready_and_empty_when_api_fails() {
        let view = HomeView::new(CatalogReader::new(Arc::new(FakeCatalog::failing())));
        view.enter().await;
        let data = view.state().ready().cloned().unwrap();
        assert!(data.featured.is_empty());
        assert!(data.sponsored.is_empty());
    }

    #[test]
    fn test_category_tiles_link_to_directory() {
        let tiles = HomeView::category_tiles();
        assert_eq!(tiles.len(), 8);
        assert_eq!(
            tiles[0].route.to_string(),
            "/directory?category=SEO+Analytics"
        );
        assert_eq!(tiles[0].tagline, "Optimize your search rankings");
    }
}
