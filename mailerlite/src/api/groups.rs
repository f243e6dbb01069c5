use crate::{
    client::to_body,
    error::Result,
    models::{
        groups::validate_subscriber_ref, Group, ImportRequest, ImportResult, ListOptions,
        NewGroup, NewSubscriber, Subscriber, SubscriberType,
    },
    Client,
};
use async_gen::gen;
use futures_core::Stream;
use reqwest::Method;

impl Client {
    pub async fn list_groups(&self, opts: &ListOptions) -> Result<Vec<Group>> {
        opts.validate()?;
        self.request(Method::GET, "groups", &opts.query(), None).await
    }

    pub async fn get_group(&self, group_id: u64) -> Result<Group> {
        self.request(Method::GET, &format!("groups/{group_id}"), &[], None)
            .await
    }

    /// Creates a group.
    ///
    /// ## Example
    ///
    /// ```no_run
    /// use mailerlite::{models::NewGroup, Client, Config};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), mailerlite::Error> {
    ///     let client = Client::new(Config::new("api-abcd1234"))?;
    ///     let group = client.create_group(&NewGroup::new("Newsletter")).await?;
    ///     println!("Created group {} ({})", group.name, group.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_group(&self, group: &NewGroup) -> Result<Group> {
        group.validate()?;
        self.request(Method::POST, "groups", &[], to_body(group)?)
            .await
    }

    /// Renames a group.
    pub async fn update_group(&self, group_id: u64, group: &NewGroup) -> Result<Group> {
        group.validate()?;
        self.request(
            Method::PUT,
            &format!("groups/{group_id}"),
            &[],
            to_body(group)?,
        )
        .await
    }

    pub async fn delete_group(&self, group_id: u64) -> Result<()> {
        self.perform_empty(Method::DELETE, &format!("groups/{group_id}"), None)
            .await
    }

    /// One page of a group's subscribers, optionally restricted to a single
    /// subscriber type.
    pub async fn group_subscribers(
        &self,
        group_id: u64,
        kind: Option<SubscriberType>,
        opts: &ListOptions,
    ) -> Result<Vec<Subscriber>> {
        opts.validate()?;
        let path = match kind {
            Some(kind) => format!("groups/{group_id}/subscribers/{kind}"),
            None => format!("groups/{group_id}/subscribers"),
        };
        self.request(Method::GET, &path, &opts.query(), None).await
    }

    /// Walks every page of a group's subscribers.
    ///
    /// Pages are fetched one after the other; the stream ends after the first
    /// short page or right after yielding the first error.
    ///
    /// ## Example
    ///
    /// ```no_run
    /// use futures_util::StreamExt;
    /// use mailerlite::{models::SubscriberType, Client, Config};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), mailerlite::Error> {
    ///     let client = Client::new(Config::new("api-abcd1234"))?;
    ///     let stream = client.stream_group_subscribers(42, Some(SubscriberType::Unsubscribed));
    ///
    ///     stream
    ///         .for_each(|subscriber| async move {
    ///             match subscriber {
    ///                 Ok(subscriber) => println!("{}", subscriber.email),
    ///                 Err(err) => eprintln!("{err}"),
    ///             }
    ///         })
    ///         .await;
    ///     Ok(())
    /// }
    /// ```
    pub fn stream_group_subscribers(
        &self,
        group_id: u64,
        kind: Option<SubscriberType>,
    ) -> impl Stream<Item = Result<Subscriber>> + '_ {
        let page_size = self.page_size.0;

        let g = gen! {
            let mut offset = 0;
            loop {
                let opts = ListOptions::new(page_size, offset);
                let page = match self.group_subscribers(group_id, kind, &opts).await {
                    Ok(page) => page,
                    Err(e) => {
                        yield Err(e);
                        break;
                    }
                };

                let fetched = page.len();
                for subscriber in page.into_iter() {
                    yield Ok(subscriber);
                }

                if fetched < page_size as usize {
                    break;
                }
                offset += page_size;
            }

            ()
        };

        g.into_async_iter()
    }

    /// Looks up a group member by subscriber id or email.
    pub async fn group_subscriber(&self, group_id: u64, subscriber: &str) -> Result<Subscriber> {
        validate_subscriber_ref(subscriber)?;
        self.request(
            Method::GET,
            &format!("groups/{group_id}/subscribers/{subscriber}"),
            &[],
            None,
        )
        .await
    }

    pub async fn add_group_subscriber(
        &self,
        group_id: u64,
        subscriber: &NewSubscriber,
    ) -> Result<Subscriber> {
        subscriber.validate()?;
        self.request(
            Method::POST,
            &format!("groups/{group_id}/subscribers"),
            &[],
            to_body(subscriber)?,
        )
        .await
    }

    /// Adds many subscribers to a group in a single call.
    pub async fn import_group_subscribers(
        &self,
        group_id: u64,
        import: &ImportRequest,
    ) -> Result<ImportResult> {
        import.validate()?;
        self.request(
            Method::POST,
            &format!("groups/{group_id}/subscribers/import"),
            &[],
            to_body(import)?,
        )
        .await
    }

    pub async fn remove_group_subscriber(&self, group_id: u64, subscriber: &str) -> Result<()> {
        validate_subscriber_ref(subscriber)?;
        self.perform_empty(
            Method::DELETE,
            &format!("groups/{group_id}/subscribers/{subscriber}"),
            None,
        )
        .await
    }
}
