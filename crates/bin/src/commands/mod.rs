pub mod data;
pub mod user;

use journalkeep::Vault;

use crate::cli::UserArg;

/// The user id a data command acts on: `--user` if given, otherwise the
/// current session user.
pub async fn resolve_user(
    vault: &Vault,
    arg: &UserArg,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(id) = &arg.user_id {
        return Ok(id.clone());
    }
    match vault.get_current_user().await {
        Some(user) => Ok(user.id().to_string()),
        None => Err(
            "no user given and nobody is logged in; pass --user or run `journalkeep login`".into(),
        ),
    }
}
