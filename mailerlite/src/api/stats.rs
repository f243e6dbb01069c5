use crate::{
    error::Result,
    models::{Account, AccountEnvelope, Stats},
    Client,
};
use reqwest::Method;

impl Client {
    /// Account-wide subscriber and delivery totals.
    ///
    /// ## Example
    ///
    /// ```no_run
    /// use mailerlite::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), mailerlite::Error> {
    ///     let client = Client::from_env()?;
    ///     let stats = client.stats().await?;
    ///     println!("{} subscribed, open rate {}", stats.subscribed, stats.open_rate);
    ///     Ok(())
    /// }
    /// ```
    pub async fn stats(&self) -> Result<Stats> {
        self.request(Method::GET, "stats", &[], None).await
    }

    /// The account the API key belongs to.
    pub async fn account(&self) -> Result<Account> {
        let envelope: AccountEnvelope = self.request(Method::GET, "me", &[], None).await?;
        Ok(envelope.account)
    }
}
