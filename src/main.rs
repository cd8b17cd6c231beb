use clap::Parser;
use tracing_subscriber::EnvFilter;

use mailcli::cli::{Cli, Command};
use mailcli::{Client, Error, ListQuery, render};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let token = cli.require_token()?.to_string();
    let client = Client::builder()
        .base_url(&cli.base)
        .token(token)
        .build()?;

    match cli.command {
        Command::List {
            to,
            q,
            limit,
            offset,
        } => {
            let resp = client
                .list(&ListQuery {
                    to,
                    q,
                    limit,
                    offset,
                })
                .await?;
            if cli.json {
                print_json(&resp)?;
            } else {
                render::print_list(&resp);
            }
        }
        Command::Latest { to, n } => {
            let resp = client.latest(&to, n).await?;
            if cli.json {
                print_json(&resp)?;
            } else {
                render::print_latest(&resp);
            }
        }
        Command::Get { id } => {
            let msg = client.get(&id).await?;
            if cli.json {
                print_json(&msg)?;
            } else {
                render::print_detail(&msg);
            }
        }
        Command::Delete { id } => {
            client.delete(&id).await?;
            if cli.json {
                print_json(&render::delete_receipt(&id))?;
            } else {
                println!("Deleted message {id}");
            }
        }
        Command::BatchDelete { ids } => {
            let deleted = client.batch_delete(ids).await?;
            if cli.json {
                print_json(&render::batch_delete_receipt(deleted))?;
            } else {
                println!("Deleted {deleted} message(s)");
            }
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
