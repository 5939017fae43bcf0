//
//  alfresco-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use alfresco_client::api::ApiError;
use alfresco_client::cli::{Cli, Commands};
use alfresco_client::exit_codes;

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    let writer = cli.global.writer();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            writer.write_error(&format!("{e:#}"));
            std::process::exit(exit_code(&e));
        }
    }
}

/// Logs go to stderr, filtered by `ALFRESCO_LOG` (e.g. `alfresco_client=debug`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("ALFRESCO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ApiError>() {
        Some(ApiError::AuthRequired | ApiError::AuthFailed(_)) => exit_codes::AUTH_ERROR,
        _ => exit_codes::ERROR,
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check(cmd) => cmd.run(&cli.global).await,
        Commands::Login(cmd) => cmd.run(&cli.global).await,
        Commands::Node(cmd) => cmd.run(&cli.global).await,
        Commands::Site(cmd) => cmd.run(&cli.global).await,
        Commands::Person(cmd) => cmd.run(&cli.global).await,
        Commands::Search(cmd) => cmd.run(&cli.global).await,
        Commands::Sql(cmd) => cmd.run(&cli.global).await,
        Commands::Discovery(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("alfresco version {}", alfresco_client::VERSION);
            Ok(())
        }
    }
}
