//! Analytics Config

use clap::Args;

/// View analytics settings.
#[derive(Debug, Args)]
pub struct AnalyticsConfig {
    /// Remote JSON feed of view events. The `product_views` table is used
    /// when unset.
    #[arg(long, env = "VIEW_FEED_URL")]
    pub view_feed_url: Option<String>,
}
