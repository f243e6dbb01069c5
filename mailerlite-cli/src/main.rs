use clap::{Parser, Subcommand};
use futures_util::StreamExt;
use mailerlite::{
    config::DEFAULT_BASE_URL,
    models::{CampaignStatus, ListOptions, NewGroup, SubscriberType},
    Client, Config,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser, Clone)]
#[command(name = "mailerlite")]
#[command(about = "A CLI tool to manage MailerLite groups, segments and campaigns")]
struct Cli {
    #[arg(short, long, env = "MAILERLITE_API_KEY", hide_env_values = true)]
    api_key: String,
    #[arg(short, long, env = "MAILERLITE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
struct Page {
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    offset: Option<u32>,
}

impl From<Page> for ListOptions {
    fn from(page: Page) -> Self {
        ListOptions {
            limit: page.limit,
            offset: page.offset,
        }
    }
}

#[derive(Debug, Subcommand, Clone)]
enum Commands {
    #[command(subcommand, about = "Manages subscriber groups")]
    Groups(GroupCommands),
    #[command(subcommand, about = "Lists segments")]
    Segments(SegmentCommands),
    #[command(subcommand, about = "Manages campaigns")]
    Campaigns(CampaignCommands),
    #[command(about = "Shows account statistics")]
    Stats,
    #[command(about = "Shows the account owning the API key")]
    Account,
}

#[derive(Debug, Subcommand, Clone)]
enum GroupCommands {
    #[command(about = "Lists groups")]
    List {
        #[command(flatten)]
        page: Page,
    },
    #[command(about = "Shows a single group")]
    Get { id: u64 },
    #[command(about = "Creates a group")]
    Create { name: String },
    #[command(about = "Deletes a group")]
    Delete { id: u64 },
    #[command(about = "Lists all the subscribers of a group as CSV")]
    Subscribers {
        id: u64,
        #[arg(long = "type", value_parser = parse_subscriber_type)]
        kind: Option<SubscriberType>,
    },
}

#[derive(Debug, Subcommand, Clone)]
enum SegmentCommands {
    #[command(about = "Lists segments")]
    List {
        #[command(flatten)]
        page: Page,
    },
}

#[derive(Debug, Subcommand, Clone)]
enum CampaignCommands {
    #[command(about = "Lists campaigns with the given status")]
    List {
        #[arg(value_parser = parse_campaign_status)]
        status: CampaignStatus,
        #[command(flatten)]
        page: Page,
    },
    #[command(about = "Counts campaigns with the given status")]
    Count {
        #[arg(value_parser = parse_campaign_status)]
        status: CampaignStatus,
    },
    #[command(about = "Cancels a scheduled campaign")]
    Cancel { id: u64 },
    #[command(about = "Deletes a campaign")]
    Delete { id: u64 },
}

fn parse_subscriber_type(s: &str) -> Result<SubscriberType, String> {
    s.parse().map_err(|e: mailerlite::Error| e.to_string())
}

fn parse_campaign_status(s: &str) -> Result<CampaignStatus, String> {
    s.parse().map_err(|e: mailerlite::Error| e.to_string())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), anyhow::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let client = Client::new(Config::new(args.api_key).with_base_url(args.base_url))?;

    match args.command {
        Commands::Groups(cmd) => match cmd {
            GroupCommands::List { page } => {
                print_json(&client.list_groups(&page.into()).await?)?;
            }
            GroupCommands::Get { id } => print_json(&client.get_group(id).await?)?,
            GroupCommands::Create { name } => {
                print_json(&client.create_group(&NewGroup::new(name)).await?)?;
            }
            GroupCommands::Delete { id } => {
                client.delete_group(id).await?;
                println!("Deleted group with id {}", id);
            }
            GroupCommands::Subscribers { id, kind } => {
                let stream = client.stream_group_subscribers(id, kind);
                println!("id,email,name");
                stream
                    .for_each(|res| async move {
                        match res {
                            Ok(subscriber) => println!(
                                "{},{},\"{}\"",
                                subscriber.id, subscriber.email, subscriber.name
                            ),
                            Err(err) => eprintln!("{err}"),
                        }
                    })
                    .await;
            }
        },
        Commands::Segments(SegmentCommands::List { page }) => {
            print_json(&client.list_segments(&page.into()).await?)?;
        }
        Commands::Campaigns(cmd) => match cmd {
            CampaignCommands::List { status, page } => {
                print_json(&client.list_campaigns(status, &page.into()).await?)?;
            }
            CampaignCommands::Count { status } => {
                println!("{}", client.count_campaigns(status).await?);
            }
            CampaignCommands::Cancel { id } => {
                print_json(&client.cancel_campaign(id).await?)?;
            }
            CampaignCommands::Delete { id } => {
                client.delete_campaign(id).await?;
                println!("Deleted campaign with id {}", id);
            }
        },
        Commands::Stats => print_json(&client.stats().await?)?,
        Commands::Account => print_json(&client.account().await?)?,
    }

    Ok(())
}
