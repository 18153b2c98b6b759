use clap::Args;
use uuid::Uuid;
use vitrine_app::domain::profiles::{
    PgProfilesService, ProfilesService, data::NewProfile, records::ProfileUuid,
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateProfileArgs {
    /// Display name shown as the owner of products
    #[arg(long)]
    name: String,

    #[command(flatten)]
    database: DatabaseArgs,

    /// Optional profile UUID; generated when omitted
    #[arg(long)]
    profile_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateProfileArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let pool = args.database.connect().await?;

    let service = PgProfilesService::new(pool);
    let uuid = args
        .profile_uuid
        .map_or_else(ProfileUuid::new, ProfileUuid::from_uuid);

    let profile = service
        .create_profile(NewProfile {
            uuid,
            full_name: args.name,
        })
        .await
        .map_err(|error| format!("failed to create profile: {error}"))?;

    println!("profile_uuid: {}", profile.uuid);
    println!("full_name: {}", profile.full_name);

    Ok(())
}
