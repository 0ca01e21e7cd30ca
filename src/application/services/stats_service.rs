//! Visit analytics aggregation.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{ShortLink, Visit};
use crate::domain::repositories::{LinkRepository, LinkStats, VisitRepository};
use crate::error::AppError;

/// How many recent visits a stats response carries.
pub const RECENT_VISITS_CAP: usize = 10;

/// Placeholder bucket for visits without a referrer.
pub const DIRECT_REFERRER: &str = "Direct";

/// Ordered browser markers; the first substring match wins.
const BROWSER_MARKERS: &[&str] = &["Chrome", "Firefox", "Safari", "Edge"];

/// Bucket for unrecognized or absent user agents.
const OTHER_BROWSER: &str = "Other";

/// Aggregated analytics for one short link.
#[derive(Debug, Clone)]
pub struct LinkAnalytics {
    pub link: ShortLink,
    pub click_count: i64,
    pub referrers: HashMap<String, i64>,
    pub browsers: HashMap<String, i64>,
    pub recent_visits: Vec<Visit>,
}

/// Service computing per-link analytics and paginated listings.
pub struct StatsService<L: LinkRepository, V: VisitRepository> {
    link_repository: Arc<L>,
    visit_repository: Arc<V>,
}

impl<L: LinkRepository, V: VisitRepository> StatsService<L, V> {
    /// Creates a new statistics service.
    pub fn new(link_repository: Arc<L>, visit_repository: Arc<V>) -> Self {
        Self {
            link_repository,
            visit_repository,
        }
    }

    /// Aggregates analytics for a short code.
    ///
    /// Counts visits, buckets referrers (absent → "Direct") and browser
    /// families, and returns up to [`RECENT_VISITS_CAP`] most recent visits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn stats_for(&self, short_code: &str) -> Result<LinkAnalytics, AppError> {
        let link = self
            .link_repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "code": short_code }))
            })?;

        let visits = self.visit_repository.list_for_link(link.id).await?;

        let mut referrers: HashMap<String, i64> = HashMap::new();
        let mut browsers: HashMap<String, i64> = HashMap::new();

        for visit in &visits {
            let referrer = visit.referrer.as_deref().unwrap_or(DIRECT_REFERRER);
            *referrers.entry(referrer.to_string()).or_insert(0) += 1;

            let family = browser_family(visit.user_agent.as_deref());
            *browsers.entry(family.to_string()).or_insert(0) += 1;
        }

        let recent_visits = self
            .visit_repository
            .recent_for_link(link.id, RECENT_VISITS_CAP as i64)
            .await?;

        Ok(LinkAnalytics {
            click_count: visits.len() as i64,
            link,
            referrers,
            browsers,
            recent_visits,
        })
    }

    /// Lists links newest-first with their click counts, plus the total
    /// number of links for pagination metadata.
    pub async fn list_links(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<(Vec<LinkStats>, i64), AppError> {
        let items = self.visit_repository.link_stats(skip, limit).await?;
        let total = self.link_repository.count().await?;

        Ok((items, total))
    }
}

/// Buckets a user agent into a coarse browser family.
///
/// The marker order is fixed and the first match wins, so Chromium-derived
/// agents that mention several engines land in "Chrome".
fn browser_family(user_agent: Option<&str>) -> &'static str {
    match user_agent {
        Some(ua) => BROWSER_MARKERS
            .iter()
            .find(|marker| ua.contains(**marker))
            .copied()
            .unwrap_or(OTHER_BROWSER),
        None => OTHER_BROWSER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Visit;
    use crate::domain::repositories::{MockLinkRepository, MockVisitRepository};
    use chrono::{Duration, Utc};

    fn test_link(id: i64, code: &str) -> ShortLink {
        ShortLink::new(
            id,
            "https://example.com".to_string(),
            code.to_string(),
            Utc::now(),
            None,
            true,
        )
    }

    fn visit(id: i64, referrer: Option<&str>, user_agent: Option<&str>) -> Visit {
        Visit::new(
            id,
            1,
            Utc::now() + Duration::seconds(id),
            referrer.map(String::from),
            user_agent.map(String::from),
            None,
        )
    }

    #[test]
    fn test_browser_family_chrome() {
        assert_eq!(
            browser_family(Some("Mozilla/5.0 (X11; Linux) Chrome/120.0 Safari/537.36")),
            "Chrome"
        );
    }

    #[test]
    fn test_browser_family_firefox() {
        assert_eq!(
            browser_family(Some("Mozilla/5.0 (X11; Linux; rv:120.0) Gecko/20100101 Firefox/120.0")),
            "Firefox"
        );
    }

    #[test]
    fn test_browser_family_safari() {
        assert_eq!(
            browser_family(Some("Mozilla/5.0 (Macintosh) AppleWebKit/605 Version/17 Safari/605")),
            "Safari"
        );
    }

    #[test]
    fn test_browser_family_edge() {
        assert_eq!(browser_family(Some("Mozilla/5.0 Edge/18.19041")), "Edge");
    }

    #[test]
    fn test_browser_family_first_match_wins() {
        // Contains both Chrome and Safari markers; Chrome comes first.
        assert_eq!(
            browser_family(Some("Mozilla/5.0 Chrome/120.0 Safari/537.36")),
            "Chrome"
        );
    }

    #[test]
    fn test_browser_family_unknown_and_absent() {
        assert_eq!(browser_family(Some("curl/8.5.0")), "Other");
        assert_eq!(browser_family(None), "Other");
    }

    #[tokio::test]
    async fn test_stats_for_aggregates_referrers_and_browsers() {
        let mut mock_links = MockLinkRepository::new();
        let mut mock_visits = MockVisitRepository::new();

        let found = test_link(1, "abc");
        mock_links
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        mock_visits.expect_list_for_link().times(1).returning(|_| {
            Ok(vec![
                visit(1, Some("https://a.com"), Some("Chrome/120")),
                visit(2, Some("https://b.com"), Some("Firefox/119")),
                visit(3, None, None),
                visit(4, Some("https://a.com"), Some("curl/8.5.0")),
            ])
        });
        mock_visits
            .expect_recent_for_link()
            .times(1)
            .returning(|_, _| Ok(vec![visit(4, Some("https://a.com"), Some("curl/8.5.0"))]));

        let service = StatsService::new(Arc::new(mock_links), Arc::new(mock_visits));

        let stats = service.stats_for("abc").await.unwrap();

        assert_eq!(stats.click_count, 4);
        assert_eq!(stats.referrers.get("https://a.com"), Some(&2));
        assert_eq!(stats.referrers.get("https://b.com"), Some(&1));
        assert_eq!(stats.referrers.get(DIRECT_REFERRER), Some(&1));
        assert_eq!(stats.browsers.get("Chrome"), Some(&1));
        assert_eq!(stats.browsers.get("Firefox"), Some(&1));
        assert_eq!(stats.browsers.get("Other"), Some(&2));
    }

    #[tokio::test]
    async fn test_stats_for_requests_capped_recent_window() {
        let mut mock_links = MockLinkRepository::new();
        let mut mock_visits = MockVisitRepository::new();

        let found = test_link(1, "abc");
        mock_links
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        mock_visits
            .expect_list_for_link()
            .times(1)
            .returning(|_| Ok((1..=13).map(|i| visit(i, None, None)).collect()));
        mock_visits
            .expect_recent_for_link()
            .withf(|link_id, limit| *link_id == 1 && *limit == RECENT_VISITS_CAP as i64)
            .times(1)
            .returning(|_, limit| {
                Ok((1..=13)
                    .rev()
                    .take(limit as usize)
                    .map(|i| visit(i, None, None))
                    .collect())
            });

        let service = StatsService::new(Arc::new(mock_links), Arc::new(mock_visits));

        let stats = service.stats_for("abc").await.unwrap();

        assert_eq!(stats.click_count, 13);
        assert_eq!(stats.recent_visits.len(), RECENT_VISITS_CAP);
        assert_eq!(stats.recent_visits.first().unwrap().id, 13);
        assert_eq!(stats.recent_visits.last().unwrap().id, 4);
    }

    #[tokio::test]
    async fn test_stats_for_unknown_code() {
        let mut mock_links = MockLinkRepository::new();
        let mock_visits = MockVisitRepository::new();

        mock_links
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = StatsService::new(Arc::new(mock_links), Arc::new(mock_visits));

        let result = service.stats_for("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_stats_for_empty_visits() {
        let mut mock_links = MockLinkRepository::new();
        let mut mock_visits = MockVisitRepository::new();

        let found = test_link(1, "quiet");
        mock_links
            .expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));
        mock_visits
            .expect_list_for_link()
            .times(1)
            .returning(|_| Ok(vec![]));
        mock_visits
            .expect_recent_for_link()
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = StatsService::new(Arc::new(mock_links), Arc::new(mock_visits));

        let stats = service.stats_for("quiet").await.unwrap();

        assert_eq!(stats.click_count, 0);
        assert!(stats.referrers.is_empty());
        assert!(stats.browsers.is_empty());
        assert!(stats.recent_visits.is_empty());
    }

    #[tokio::test]
    async fn test_list_links_returns_items_and_total() {
        let mut mock_links = MockLinkRepository::new();
        let mut mock_visits = MockVisitRepository::new();

        mock_visits
            .expect_link_stats()
            .withf(|skip, limit| *skip == 0 && *limit == 50)
            .times(1)
            .returning(|_, _| {
                Ok(vec![LinkStats {
                    link_id: 1,
                    original_url: "https://example.com".to_string(),
                    short_code: "abc".to_string(),
                    created_at: Utc::now(),
                    expires_at: None,
                    active: true,
                    click_count: 3,
                }])
            });
        mock_links.expect_count().times(1).returning(|| Ok(42));

        let service = StatsService::new(Arc::new(mock_links), Arc::new(mock_visits));

        let (items, total) = service.list_links(0, 50).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].click_count, 3);
        assert_eq!(total, 42);
    }
}
