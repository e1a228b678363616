//! Per-user data commands.

use journalkeep::Vault;
use serde_json::Value;

use super::resolve_user;
use crate::cli::{GetArgs, PutArgs, UserArg};
use crate::output::{OutputFormat, print_json};

/// Run the `put` command
pub async fn put(
    vault: &Vault,
    args: &PutArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(&args.value)
        .map_err(|e| format!("value is not valid JSON: {e}"))?;
    let user_id = resolve_user(vault, &args.user).await?;
    vault.save_user_data(&user_id, &args.data_type, &value).await?;

    match format {
        OutputFormat::Human => println!("Saved {} for {user_id}.", args.data_type),
        OutputFormat::Json => print_json(&serde_json::json!({
            "userId": user_id,
            "dataType": args.data_type,
        }))?,
    }
    Ok(())
}

/// Run the `get` command
pub async fn get(
    vault: &Vault,
    args: &GetArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let user_id = resolve_user(vault, &args.user).await?;
    let value: Option<Value> = vault.load_user_data(&user_id, &args.data_type).await;

    match (value, format) {
        (Some(value), OutputFormat::Human) => println!("{}", serde_json::to_string_pretty(&value)?),
        (None, OutputFormat::Human) => println!("No {} stored for {user_id}.", args.data_type),
        (value, OutputFormat::Json) => print_json(&value)?,
    }
    Ok(())
}

/// Run the `stats` command
pub async fn stats(
    vault: &Vault,
    args: &UserArg,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let user_id = resolve_user(vault, args).await?;
    let stats = vault.get_user_stats(&user_id).await;

    match format {
        OutputFormat::Human => {
            println!("Entries:          {}", stats.total_entries);
            println!("Words:            {}", stats.total_words);
            println!("Goals:            {}", stats.total_goals);
            println!("Completed goals:  {}", stats.completed_goals);
        }
        OutputFormat::Json => print_json(&stats)?,
    }
    Ok(())
}
