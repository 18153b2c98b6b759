use clap::Args;
use uuid::Uuid;
use vitrine_app::{
    auth::PgAuthService,
    domain::profiles::{PgProfilesService, ProfilesService, records::ProfileUuid},
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Profile that authenticates with the token
    #[arg(long)]
    profile_uuid: Uuid,
}

pub(crate) async fn run(args: CreateTokenArgs) -> Result<(), String> {
    let pool = args.database.connect().await?;
    let profile_uuid = ProfileUuid::from_uuid(args.profile_uuid);

    let profile = PgProfilesService::new(pool.clone())
        .get_profile(profile_uuid)
        .await
        .map_err(|error| format!("failed to load profile {profile_uuid}: {error}"))?;

    let issued = PgAuthService::new(pool)
        .issue_api_token(profile.uuid)
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("token_uuid: {}", issued.metadata.uuid);
    println!("profile: {} ({})", profile.full_name, profile.uuid);
    println!("created_at: {}", issued.metadata.created_at);
    println!("api_token: {}", issued.token);
    println!("the token is shown once; send it as `Authorization: Bearer <token>`");

    Ok(())
}
