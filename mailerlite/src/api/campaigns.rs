use crate::{
    client::to_body,
    error::Result,
    models::{
        Campaign, CampaignContent, CampaignCount, CampaignStatus, CreatedCampaign, ListOptions,
        NewCampaign, SendOptions,
    },
    Client,
};
use reqwest::Method;

impl Client {
    pub async fn list_campaigns(
        &self,
        status: CampaignStatus,
        opts: &ListOptions,
    ) -> Result<Vec<Campaign>> {
        opts.validate()?;
        self.request(
            Method::GET,
            &format!("campaigns/{status}"),
            &opts.query(),
            None,
        )
        .await
    }

    pub async fn count_campaigns(&self, status: CampaignStatus) -> Result<u64> {
        let count: CampaignCount = self
            .request(Method::GET, &format!("campaigns/{status}/count"), &[], None)
            .await?;
        Ok(count.count)
    }

    /// Creates a draft campaign. Content has to be set with
    /// [`Client::set_campaign_content`] before it can be sent.
    ///
    /// ## Example
    ///
    /// ```no_run
    /// use mailerlite::{
    ///     models::{CampaignContent, NewCampaign, SendOptions},
    ///     Client, Config,
    /// };
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), mailerlite::Error> {
    ///     let client = Client::new(Config::new("api-abcd1234"))?;
    ///     let draft = client
    ///         .create_campaign(&NewCampaign::regular("Our October news", vec![42]))
    ///         .await?;
    ///
    ///     let content = CampaignContent {
    ///         html: "<h1>Hello</h1>".to_string(),
    ///         plain: "Hello".to_string(),
    ///         auto_inline: None,
    ///     };
    ///     client.set_campaign_content(draft.id, &content).await?;
    ///     client.send_campaign(draft.id, &SendOptions::now()).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_campaign(&self, campaign: &NewCampaign) -> Result<CreatedCampaign> {
        campaign.validate()?;
        self.request(Method::POST, "campaigns", &[], to_body(campaign)?)
            .await
    }

    pub async fn set_campaign_content(
        &self,
        campaign_id: u64,
        content: &CampaignContent,
    ) -> Result<()> {
        content.validate()?;
        self.perform_empty(
            Method::PUT,
            &format!("campaigns/{campaign_id}/content"),
            to_body(content)?,
        )
        .await
    }

    /// Sends a draft right away or schedules it, depending on `options`.
    pub async fn send_campaign(&self, campaign_id: u64, options: &SendOptions) -> Result<Campaign> {
        options.validate()?;
        self.request(
            Method::POST,
            &format!("campaigns/{campaign_id}/actions/send"),
            &[],
            to_body(options)?,
        )
        .await
    }

    /// Moves a scheduled campaign back to drafts.
    pub async fn cancel_campaign(&self, campaign_id: u64) -> Result<Campaign> {
        self.request(
            Method::POST,
            &format!("campaigns/{campaign_id}/actions/cancel"),
            &[],
            None,
        )
        .await
    }

    pub async fn delete_campaign(&self, campaign_id: u64) -> Result<()> {
        self.perform_empty(Method::DELETE, &format!("campaigns/{campaign_id}"), None)
            .await
    }
}
