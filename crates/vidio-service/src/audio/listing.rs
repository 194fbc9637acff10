//! Paginated audio listing.

use std::sync::Arc;

use vidio_core::result::AppResult;
use vidio_core::types::pagination::{PageRequest, PageResponse};
use vidio_database::AudioFileRepo;
use vidio_entity::audio::AudioFile;

/// Records shown per listing page.
pub const AUDIO_PAGE_SIZE: u64 = 5;

/// Lists audio records in fixed-size pages, ordered by id.
#[derive(Debug, Clone)]
pub struct ListingService {
    audio_files: Arc<dyn AudioFileRepo>,
}

impl ListingService {
    /// Creates a new listing service.
    pub fn new(audio_files: Arc<dyn AudioFileRepo>) -> Self {
        Self { audio_files }
    }

    /// Fetch one page. A page past the end yields the last page; an empty
    /// catalogue yields a single empty page.
    pub async fn list(&self, requested: PageRequest) -> AppResult<PageResponse<AudioFile>> {
        let total = self.audio_files.count().await?;
        let page = requested.clamp_to(total);
        let items = self.audio_files.find_page(&page).await?;
        Ok(PageResponse::new(items, page.page, page.page_size, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::seed_store;

    fn page(raw: Option<&str>) -> PageRequest {
        PageRequest::parse(raw, AUDIO_PAGE_SIZE)
    }

    fn ids(resp: &PageResponse<AudioFile>) -> Vec<i64> {
        resp.items.iter().map(|f| f.id).collect()
    }

    #[tokio::test]
    async fn test_twelve_records_make_three_pages() {
        let store = seed_store(12).await;
        let service = ListingService::new(Arc::new(store));

        let first = service.list(page(None)).await.unwrap();
        assert_eq!(ids(&first), vec![1, 2, 3, 4, 5]);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next);

        let last = service.list(page(Some("3"))).await.unwrap();
        assert_eq!(ids(&last), vec![11, 12]);
        assert!(!last.has_next);
        assert!(last.has_previous);
    }

    #[tokio::test]
    async fn test_out_of_range_pages_are_clamped() {
        let store = seed_store(12).await;
        let service = ListingService::new(Arc::new(store));

        let beyond = service.list(page(Some("9"))).await.unwrap();
        assert_eq!(beyond.page, 3);
        assert_eq!(ids(&beyond), vec![11, 12]);

        let huge = service
            .list(page(Some("123456789012345678901234567890")))
            .await
            .unwrap();
        assert_eq!(huge.page, 3);

        for raw in ["abc", "-1", "0", ""] {
            let resp = service.list(page(Some(raw))).await.unwrap();
            assert_eq!(resp.page, 1, "{raw}");
            assert_eq!(ids(&resp), vec![1, 2, 3, 4, 5]);
        }
    }

    #[tokio::test]
    async fn test_empty_catalogue_has_one_empty_page() {
        let store = seed_store(0).await;
        let service = ListingService::new(Arc::new(store));

        let resp = service.list(page(Some("4"))).await.unwrap();
        assert_eq!(resp.page, 1);
        assert_eq!(resp.total_pages, 1);
        assert!(resp.items.is_empty());
    }
}
