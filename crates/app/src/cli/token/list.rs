use clap::Args;
use uuid::Uuid;
use vitrine_app::{
    auth::{ApiTokenMetadata, PgAuthService},
    domain::profiles::records::ProfileUuid,
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListTokensArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Profile whose tokens are listed
    #[arg(long)]
    profile_uuid: Uuid,
}

fn describe(token: &ApiTokenMetadata) -> String {
    let last_used = token
        .last_used_at
        .map_or_else(|| "never".to_string(), |at| at.to_string());

    let status = token
        .revoked_at
        .map_or_else(|| "active".to_string(), |at| format!("revoked {at}"));

    format!(
        "{}  created {}  last used {last_used}  {status}",
        token.uuid, token.created_at
    )
}

pub(crate) async fn run(args: ListTokensArgs) -> Result<(), String> {
    let pool = args.database.connect().await?;

    let tokens = PgAuthService::new(pool)
        .list_api_tokens(ProfileUuid::from_uuid(args.profile_uuid))
        .await
        .map_err(|error| format!("failed to list tokens: {error}"))?;

    if tokens.is_empty() {
        println!("no tokens found for profile {}", args.profile_uuid);
        return Ok(());
    }

    for token in &tokens {
        println!("{}", describe(token));
    }

    Ok(())
}
