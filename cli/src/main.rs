//! Starknet Quest command line.
//!
//! Renders a quest page in the terminal and drives its actions: task
//! verification, reward claiming and social verification.

mod wallet;

use anyhow::Context;
use clap::Parser;
use quest_api::{HttpQuestApi, VerifyOutcome};
use quest_page::{
    cancel_pair, start_verification, BadgeAction, ClientConfig, FileSessionStore, QuestPage,
    SocialBadge, VerifierStatusClient, DISCORD,
};
use quest_rewards::ClaimOutcome;
use quest_starknet::{QuestNftClient, StarknetIdClient, StarknetRpcClient};
use quest_types::{Address, Felt, QuestId};
use quest_utils::LogFormat;
use std::path::PathBuf;
use tokio::sync::watch;
use wallet::{JsonCallPrinter, PrintNavigator};

#[derive(Parser)]
#[command(name = "quest", about = "Starknet Quest client")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "QUEST_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the quest backend.
    #[arg(long, env = "QUEST_API_URL")]
    api_url: Option<String>,

    /// Starknet JSON-RPC endpoint.
    #[arg(long, env = "QUEST_RPC_URL")]
    rpc_url: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "QUEST_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "QUEST_LOG_FORMAT")]
    log_format: Option<String>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Render a quest page.
    Show {
        quest_id: QuestId,
        /// Connected wallet. Without one, tasks are fetched anonymously.
        #[arg(long, env = "QUEST_ADDRESS")]
        address: Option<Address>,
    },
    /// Claim every unclaimed reward of a quest.
    Claim {
        quest_id: QuestId,
        #[arg(long, env = "QUEST_ADDRESS")]
        address: Address,
    },
    /// Show the Discord verification badge of an identity.
    VerifyStatus {
        #[arg(long)]
        token_id: Felt,
        /// Render as the identity's owner.
        #[arg(long)]
        owner: bool,
        /// Domain of the identity, used in the visitor tooltip.
        #[arg(long, default_value = "")]
        domain: String,
    },
    /// Hand an identity over to the Starknet ID app for verification.
    StartVerification {
        #[arg(long)]
        token_id: Felt,
    },
    /// Verify one task of a quest, then refresh rewards.
    VerifyTask {
        quest_id: QuestId,
        task_id: u64,
        #[arg(long, env = "QUEST_ADDRESS")]
        address: Address,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let path = path.to_string_lossy();
            ClientConfig::from_toml_file(&path).with_context(|| format!("loading {path}"))?
        }
        None => ClientConfig::default(),
    };
    if let Some(api_url) = &cli.api_url {
        config.api_base_url = api_url.clone();
    }
    if let Some(rpc_url) = &cli.rpc_url {
        config.starknet_rpc_url = rpc_url.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.log_format = LogFormat::from_name(format);
    }
    Ok(config)
}

fn quest_api(config: &ClientConfig) -> anyhow::Result<HttpQuestApi> {
    let api = match config.request_timeout() {
        Some(timeout) => HttpQuestApi::with_timeout(&config.api_base_url, timeout)?,
        None => HttpQuestApi::new(&config.api_base_url)?,
    };
    Ok(api)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    quest_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::Show { quest_id, address } => show(&config, quest_id, address).await,
        Command::Claim { quest_id, address } => claim(&config, quest_id, address).await,
        Command::VerifyStatus {
            token_id,
            owner,
            domain,
        } => verify_status(&config, token_id, owner, &domain).await,
        Command::StartVerification { token_id } => {
            let session = FileSessionStore::new(&config.session_file);
            let link = format!("{}/identities", config.app_link.trim_end_matches('/'));
            start_verification(&session, &PrintNavigator, &token_id, &link)?;
            Ok(())
        }
        Command::VerifyTask {
            quest_id,
            task_id,
            address,
        } => verify_task(&config, quest_id, task_id, address).await,
    }
}

async fn show(
    config: &ClientConfig,
    quest_id: QuestId,
    address: Option<Address>,
) -> anyhow::Result<()> {
    let api = quest_api(config)?;
    let rpc = StarknetRpcClient::new(&config.starknet_rpc_url)?;
    let mut page = QuestPage::new(quest_id, &api, QuestNftClient::new(&rpc), JsonCallPrinter)
        .with_address_wait(config.address_wait());

    let (_wallet_feed, mut address_rx) = watch::channel(address);
    let (canceller, token) = cancel_pair();

    // Errors are logged by the page; whatever loaded is still rendered.
    let _ = page.load_quest().await;
    tokio::select! {
        _ = page.load_tasks(&mut address_rx, &token) => {}
        _ = tokio::signal::ctrl_c() => {
            canceller.cancel();
            tracing::info!("interrupted");
            return Ok(());
        }
    }
    let _ = page.refresh_rewards().await;

    println!("{}", page.view());
    if page.claim_enabled() {
        println!("{} reward(s) ready to claim", page.unclaimed().len());
    }
    Ok(())
}

async fn claim(config: &ClientConfig, quest_id: QuestId, address: Address) -> anyhow::Result<()> {
    let api = quest_api(config)?;
    let rpc = StarknetRpcClient::new(&config.starknet_rpc_url)?;
    let mut page = QuestPage::new(quest_id, &api, QuestNftClient::new(&rpc), JsonCallPrinter);

    page.load_quest()
        .await
        .with_context(|| format!("loading quest {quest_id}"))?;
    page.set_address(Some(address));
    page.refresh_rewards()
        .await
        .context("checking reward eligibility")?;

    match page.claim().await? {
        ClaimOutcome::Submitted { calls } => {
            tracing::info!(quest = %quest_id, calls, "mint multicall handed to signer");
        }
        ClaimOutcome::Disabled => println!("nothing to claim"),
    }
    Ok(())
}

async fn verify_status(
    config: &ClientConfig,
    token_id: Felt,
    owner: bool,
    domain: &str,
) -> anyhow::Result<()> {
    let (Some(identity), Some(verifier)) = (config.identity_contract, config.verifier_contract)
    else {
        anyhow::bail!("identity_contract and verifier_contract must be configured");
    };
    let rpc = StarknetRpcClient::new(&config.starknet_rpc_url)?;
    let client = VerifierStatusClient::new(StarknetIdClient::new(&rpc, identity, verifier));

    let linked = client.linked_account(&token_id, DISCORD).await;
    match SocialBadge::discord(owner, linked.as_deref(), domain, &config.app_link) {
        Some(badge) => {
            let mark = if badge.verified { " (verified)" } else { "" };
            println!("discord{mark}: {}", badge.tooltip);
            match badge.action {
                BadgeAction::StartVerification { link } => {
                    println!("run `quest start-verification --token-id {token_id}` to open {link}")
                }
                BadgeAction::OpenProfile { url } => println!("{url}"),
            }
        }
        None => println!("no discord linked"),
    }
    Ok(())
}

async fn verify_task(
    config: &ClientConfig,
    quest_id: QuestId,
    task_id: u64,
    address: Address,
) -> anyhow::Result<()> {
    let api = quest_api(config)?;
    let rpc = StarknetRpcClient::new(&config.starknet_rpc_url)?;
    let mut page = QuestPage::new(quest_id, &api, QuestNftClient::new(&rpc), JsonCallPrinter);

    let (_wallet_feed, mut address_rx) = watch::channel(Some(address));
    let (_canceller, token) = cancel_pair();
    page.load_quest()
        .await
        .with_context(|| format!("loading quest {quest_id}"))?;
    page.load_tasks(&mut address_rx, &token)
        .await
        .with_context(|| format!("loading tasks of quest {quest_id}"))?;

    match page.verify_task(task_id).await? {
        VerifyOutcome::Verified => {
            println!("task {task_id} verified");
            if page.claim_enabled() {
                println!("{} reward(s) ready to claim", page.unclaimed().len());
            }
        }
        VerifyOutcome::Rejected(reason) => println!("task {task_id} not verified: {reason}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "api_base_url = \"http://file\"\nstarknet_rpc_url = \"http://file-rpc\"\naddress_wait_ms = 10"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from([
            "quest",
            "--config",
            &path,
            "--api-url",
            "http://flag",
            "--log-format",
            "json",
            "show",
            "7",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.api_base_url, "http://flag");
        assert_eq!(config.starknet_rpc_url, "http://file-rpc");
        assert_eq!(config.address_wait_ms, 10);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn parses_typed_arguments() {
        let cli = Cli::try_parse_from(["quest", "claim", "7", "--address", "0xabc"]).unwrap();
        match cli.command {
            Command::Claim { quest_id, address } => {
                assert_eq!(quest_id, QuestId::new(7));
                assert_eq!(address, Address::parse("0xabc").unwrap());
            }
            _ => panic!("expected claim"),
        }
        assert!(Cli::try_parse_from(["quest", "show", "seven"]).is_err());
    }
}
