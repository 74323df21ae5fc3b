use std::process::ExitCode;

use clap::{Parser, Subcommand};
use discord::{
    guild::{Guild, GuildCreateOptions, GuildModifyOptions},
    request::{RequestError, API_BASE},
    resource::Snowflake,
    Bot, Edited, GuildManager, Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Manage Discord guilds from the command line")]
struct Cli {
    /// Bot token
    #[arg(long, env = "TOKEN", hide_env_values = true)]
    token: String,

    #[arg(long, env = "DISCORD_API_BASE", default_value = API_BASE)]
    api_base: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a guild the bot is in
    Fetch { id: Snowflake<Guild> },
    /// Show the public preview of a guild
    Preview { id: Snowflake<Guild> },
    /// Create a new guild owned by the bot
    Create {
        name: String,
        #[arg(long)]
        region: Option<String>,
        /// Url or path of the icon
        #[arg(long)]
        icon: Option<String>,
    },
    /// Edit a guild
    Edit {
        id: Snowflake<Guild>,
        #[arg(long)]
        name: Option<String>,
        /// Url or path of the new icon
        #[arg(long)]
        icon: Option<String>,
        #[arg(long, conflicts_with = "icon")]
        clear_icon: bool,
        #[arg(long)]
        splash: Option<String>,
        #[arg(long)]
        banner: Option<String>,
        #[arg(long)]
        afk_timeout: Option<u32>,
        /// Print the payload returned by discord instead of the parsed guild
        #[arg(long)]
        raw: bool,
    },
    /// Delete a guild owned by the bot
    Delete { id: Snowflake<Guild> },
}

fn modify_options(
    name: Option<String>,
    icon: Option<String>,
    clear_icon: bool,
    splash: Option<String>,
    banner: Option<String>,
    afk_timeout: Option<u32>,
) -> GuildModifyOptions {
    let mut options = GuildModifyOptions::default();
    options.name = name;
    options.icon = if clear_icon { Some(None) } else { icon.map(Some) };
    options.splash = splash.map(Some);
    options.banner = banner.map(Some);
    options.afk_timeout = afk_timeout;
    options
}

async fn run(cli: Cli) -> Result<()> {
    let client = Bot::with_api_base(cli.token, cli.api_base);
    let guilds = GuildManager::new(client);

    match cli.command {
        Command::Fetch { id } => {
            let guild = guilds.fetch(id).await?;
            println!("{:#?}", guild);
        }
        Command::Preview { id } => {
            let preview = guilds.preview(id).await?;
            println!("{:#?}", preview);
        }
        Command::Create { name, region, icon } => {
            let mut options = GuildCreateOptions::new(name);
            options.region = region;
            options.icon = icon;

            let guild = guilds.create(options).await?;
            info!(guild = %guild.id, "created guild");
            println!("{:#?}", guild);
        }
        Command::Edit {
            id,
            name,
            icon,
            clear_icon,
            splash,
            banner,
            afk_timeout,
            raw,
        } => {
            let options = modify_options(name, icon, clear_icon, splash, banner, afk_timeout);
            match guilds.edit(id, options, raw).await? {
                Edited::Guild(guild) => println!("{:#?}", guild),
                Edited::Raw(payload) => println!(
                    "{}",
                    serde_json::to_string_pretty(&payload).map_err(RequestError::Encode)?
                ),
            }
        }
        Command::Delete { id } => {
            guilds.delete(id).await?;
            info!(guild = %id, "deleted guild");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // load dotenv before clap reads the environment
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "command failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edit_arguments() {
        let cli = Cli::try_parse_from([
            "guildctl",
            "--token",
            "abc",
            "edit",
            "123",
            "--name",
            "New",
            "--clear-icon",
            "--raw",
        ])
        .unwrap();

        let Command::Edit {
            id,
            name,
            icon,
            clear_icon,
            raw,
            ..
        } = cli.command
        else {
            panic!("expected edit");
        };
        assert_eq!(id, Snowflake::new(123));
        assert!(raw);

        let options = modify_options(name, icon, clear_icon, None, None, None);
        assert_eq!(options.name.as_deref(), Some("New"));
        assert_eq!(options.icon, Some(None));
        assert_eq!(options.splash, None);
    }

    #[test]
    fn icon_and_clear_icon_conflict() {
        assert!(Cli::try_parse_from([
            "guildctl", "--token", "abc", "edit", "1", "--icon", "a.png", "--clear-icon",
        ])
        .is_err());
    }
}
