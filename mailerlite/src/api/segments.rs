use crate::{
    error::Result,
    models::{ListOptions, SegmentPage},
    Client,
};
use reqwest::Method;

impl Client {
    /// Lists the account's segments.
    pub async fn list_segments(&self, opts: &ListOptions) -> Result<SegmentPage> {
        opts.validate()?;
        self.request(Method::GET, "segments", &opts.query(), None)
            .await
    }
}
