use uuid::Uuid;

use crate::client::RestClient;
use crate::error::ViewResult;
use crate::models::CrawlPlan;

use super::ResourceMethods;

impl<'a, C: RestClient + 'a> ResourceMethods<'a, C, CrawlPlan> {
    /// Start a crawl for the plan now, outside its schedule.
    pub async fn start(&self, guid: Uuid) -> ViewResult<bool> {
        self.action(guid, "start").await
    }

    /// Stop the plan's running crawl.
    pub async fn stop(&self, guid: Uuid) -> ViewResult<bool> {
        self.action(guid, "stop").await
    }

    async fn action(&self, guid: Uuid, action: &str) -> ViewResult<bool> {
        let url = self.route(false)?.guid(guid)?.segment(action)?.build();
        self.client.post_action(&url).await
    }
}
