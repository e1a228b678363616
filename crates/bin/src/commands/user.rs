//! Account and session commands.

use journalkeep::{NewUser, UserRecord, Vault};

use crate::cli::{LoginArgs, RegisterArgs};
use crate::output::{OutputFormat, print_json, print_table};

fn print_user(
    user: &UserRecord,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            println!("ID:          {}", user.id());
            println!("Email:       {}", user.email());
            println!("Name:        {}", user.name);
            println!("Created:     {}", user.created_at.to_rfc3339());
            println!("Last login:  {}", user.last_login.to_rfc3339());
        }
        OutputFormat::Json => print_json(user)?,
    }
    Ok(())
}

/// Run the `register` command
pub async fn register(
    vault: &Vault,
    args: &RegisterArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = vault
        .register_user(NewUser::new(args.email.as_str(), args.name.as_str()))
        .await?;
    print_user(&user, format)
}

/// Run the `login` command
pub async fn login(
    vault: &Vault,
    args: &LoginArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = vault.login(&args.email, &args.password).await?;
    print_user(&user, format)
}

/// Run the `logout` command
pub async fn logout(
    vault: &Vault,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    vault.logout().await?;
    match format {
        OutputFormat::Human => println!("Logged out."),
        OutputFormat::Json => print_json(&serde_json::json!({ "loggedOut": true }))?,
    }
    Ok(())
}

/// Run the `whoami` command
pub async fn whoami(
    vault: &Vault,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let current = vault.get_current_user().await;
    match (current, format) {
        (Some(user), format) => print_user(&user, format)?,
        (None, OutputFormat::Human) => println!("Not logged in."),
        (None, OutputFormat::Json) => print_json(&serde_json::Value::Null)?,
    }
    Ok(())
}

/// Run the `users` command
pub async fn list(
    vault: &Vault,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let users = vault.get_all_users().await;

    match format {
        OutputFormat::Human => {
            if users.is_empty() {
                println!("No users registered.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = users
                .iter()
                .map(|user| {
                    vec![
                        user.id().to_string(),
                        user.email().to_string(),
                        user.name.clone(),
                        user.last_login.to_rfc3339(),
                    ]
                })
                .collect();
            print_table(&["ID", "EMAIL", "NAME", "LAST LOGIN"], &rows);
        }
        OutputFormat::Json => print_json(&users)?,
    }

    Ok(())
}
