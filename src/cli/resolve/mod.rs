//! Resolve command - prints the avatar URL of one user

use clap::Args;

use crate::domain::{AvatarStrategy, ChatUser, UserId};
use crate::infrastructure::avatar::AvatarResolverFactory;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Unique ID of the user
    #[arg(long)]
    pub user_id: String,

    /// Email address, used by the hashed strategy
    #[arg(long)]
    pub email: Option<String>,

    /// Avatar URL supplied by the auth provider
    #[arg(long)]
    pub avatar_url: Option<String>,
}

impl ResolveArgs {
    fn to_user(&self) -> anyhow::Result<ChatUser> {
        let mut user = ChatUser::new(UserId::new(self.user_id.as_str())?);

        if let Some(email) = &self.email {
            user = user.with_email(email);
        }
        if let Some(avatar_url) = &self.avatar_url {
            user = user.with_avatar_url(avatar_url);
        }

        Ok(user)
    }
}

/// Resolve with the configured strategy chain
pub fn run(args: ResolveArgs) -> anyhow::Result<()> {
    let config = super::load_config()?;
    let resolver = AvatarResolverFactory::create(&config.avatars)?;

    let user = args.to_user()?;
    let url = resolver.resolve(&user)?;
    println!("{}", url);

    Ok(())
}
