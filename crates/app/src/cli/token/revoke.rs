use clap::Args;
use uuid::Uuid;
use vitrine_app::auth::PgAuthService;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct RevokeTokenArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Token to revoke
    #[arg(long)]
    token_uuid: Uuid,
}

pub(crate) async fn run(args: RevokeTokenArgs) -> Result<(), String> {
    let pool = args.database.connect().await?;

    let revoked = PgAuthService::new(pool)
        .revoke_api_token(args.token_uuid)
        .await
        .map_err(|error| format!("failed to revoke token: {error}"))?;

    if !revoked {
        return Err(format!("token {} is unknown or already revoked", args.token_uuid));
    }

    println!("revoked token {}", args.token_uuid);

    Ok(())
}
