//! Print a `users.yml` entry for a username and password.
//!
//! ```text
//! $ hash-password admin secret
//! admin: "$2b$12$..."
//! ```
//!
//! Append the output to the credential file the server reads.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use zeroize::Zeroizing;

/// Generate a bcrypt credential line for the CMS.
#[derive(Debug, Parser)]
#[command(name = "hash-password", version, about)]
struct Args {
    /// Username to add.
    username: String,
    /// Password to hash.
    password: String,
    /// bcrypt cost factor.
    #[arg(long, default_value_t = bcrypt::DEFAULT_COST)]
    cost: u32,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let Args {
        username,
        password,
        cost,
    } = Args::parse();
    let password = Zeroizing::new(password);
    if username.is_empty() || password.is_empty() {
        return Err(eyre!("username and password must not be empty"));
    }
    let hash = bcrypt::hash(password.as_str(), cost).wrap_err("failed to hash password")?;
    let line = serde_yaml_ng::to_string(&std::collections::BTreeMap::from([(username, hash)]))
        .wrap_err("failed to encode credential entry")?;
    print!("{line}");
    Ok(())
}
