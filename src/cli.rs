//! Command-line interface definition.

use clap::{Parser, Subcommand};

use crate::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "mailcli", version, about = "Client for a remote mailbox API")]
pub struct Cli {
    /// API base URL (e.g. http://localhost:8787/api)
    #[arg(long, global = true, env = "API_BASE", default_value = DEFAULT_BASE_URL)]
    pub base: String,

    /// Bearer token (defaults to API_TOKEN env)
    #[arg(long, global = true, env = "API_TOKEN")]
    pub token: Option<String>,

    /// Print responses as pretty JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The trimmed bearer token, or [`Error::MissingToken`] when `--token`
    /// and `API_TOKEN` are both absent or blank.
    ///
    /// Called before any request is built.
    ///
    /// [`Error::MissingToken`]: crate::Error::MissingToken
    pub fn require_token(&self) -> crate::Result<&str> {
        match self.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(crate::Error::MissingToken),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List messages
    List {
        /// Filter by recipient email
        #[arg(long)]
        to: Option<String>,

        /// Full-text search query
        #[arg(long)]
        q: Option<String>,

        /// Max results (1-100)
        #[arg(long, default_value_t = 20)]
        limit: u32,

        /// Offset for pagination
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// Show latest messages for a recipient
    Latest {
        /// Recipient email (required)
        #[arg(long)]
        to: String,

        /// Number of messages (1-20)
        #[arg(long, default_value_t = 5)]
        n: u32,
    },

    /// Fetch full message by id
    Get { id: String },

    /// Delete one message by id
    Delete { id: String },

    /// Delete multiple messages by ids
    BatchDelete {
        /// Message ids (max 100)
        #[arg(required = true, num_args = 1..=100)]
        ids: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_flag_defaults() {
        let cli = Cli::try_parse_from(["mailcli", "list"]).unwrap();
        match cli.command {
            Command::List {
                to,
                q,
                limit,
                offset,
            } => {
                assert!(to.is_none());
                assert!(q.is_none());
                assert_eq!(limit, 20);
                assert_eq!(offset, 0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn latest_requires_to() {
        assert!(Cli::try_parse_from(["mailcli", "latest"]).is_err());

        let cli = Cli::try_parse_from(["mailcli", "latest", "--to", "a@test.dev"]).unwrap();
        match cli.command {
            Command::Latest { to, n } => {
                assert_eq!(to, "a@test.dev");
                assert_eq!(n, 5);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn batch_delete_requires_ids_and_caps_at_100() {
        assert!(Cli::try_parse_from(["mailcli", "batch-delete"]).is_err());

        let mut args = vec!["mailcli".to_string(), "batch-delete".to_string()];
        args.extend((0..101).map(|i| format!("id{i}")));
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn base_and_token_resolve_from_environment() {
        // set_var is unsafe in edition 2024; this test is the only one
        // touching these two vars, every other test passes flags explicitly.
        unsafe {
            std::env::set_var("API_BASE", "http://env.example/api");
            std::env::set_var("API_TOKEN", "env-secret");
        }
        let cli = Cli::try_parse_from(["mailcli", "list"]).unwrap();
        unsafe {
            std::env::remove_var("API_BASE");
            std::env::remove_var("API_TOKEN");
        }

        assert_eq!(cli.base, "http://env.example/api");
        assert_eq!(cli.token.as_deref(), Some("env-secret"));
    }

    #[test]
    fn require_token_rejects_missing_and_blank() {
        let mut cli = Cli::try_parse_from(["mailcli", "--base", "http://x/api", "list"]).unwrap();
        cli.token = None;
        assert!(matches!(
            cli.require_token(),
            Err(crate::Error::MissingToken)
        ));

        cli.token = Some("   ".into());
        assert!(matches!(
            cli.require_token(),
            Err(crate::Error::MissingToken)
        ));

        cli.token = Some("  secret  ".into());
        assert_eq!(cli.require_token().unwrap(), "secret");
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mailcli", "get", "m1", "--base", "http://x/api", "--token", "t", "--json",
        ])
        .unwrap();
        assert_eq!(cli.base, "http://x/api");
        assert_eq!(cli.token.as_deref(), Some("t"));
        assert!(cli.json);
    }
}
