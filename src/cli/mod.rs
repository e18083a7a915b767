pub mod api_client;
mod commands;
pub mod error;
mod utils;


use std::net::IpAddr;

use clap::{CommandFactory, Parser, Subcommand};
use miette::IntoDiagnostic;

use crate::db::TodoId;
use api_client::{ApiClient, DEFAULT_API_URL};
use commands::serve::ServeArgs;

#[derive(Parser)]
#[command(name = "todos")]
#[command(author, version, about = "Todo list API server and client", long_about = None)]
pub struct Cli {
    /// API URL used by the client commands
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Host address to bind to (default: 127.0.0.1)
        #[arg(long)]
        host: Option<IpAddr>,
        /// Port to listen on (default: 8000)
        #[arg(short, long)]
        port: Option<u16>,
        /// Store connection string: a file path or sqlite: URL
        /// (default: TODOS_DATABASE_URL env or sqlite://todos.db)
        #[arg(long)]
        database_url: Option<String>,
        /// Do not serve the API docs page at /docs
        #[arg(long)]
        no_docs: bool,
        /// Increase log verbosity (-v debug, -vv trace)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    },
    /// List all todos
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show a single todo
    Get {
        /// Todo ID
        id: TodoId,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Create a todo
    Add {
        /// Todo text
        content: String,
    },
    /// Update a todo; omitted options are left unchanged
    Update {
        /// Todo ID
        id: TodoId,
        /// New text
        #[arg(long)]
        content: Option<String>,
        /// New completion flag (true or false)
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Mark a todo as done
    Done {
        /// Todo ID
        id: TodoId,
    },
    /// Delete a todo
    Delete {
        /// Todo ID
        id: TodoId,
    },
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    let api_client = ApiClient::new(cli.api_url);

    let output = match cli.command {
        Some(Commands::Serve {
            host,
            port,
            database_url,
            no_docs,
            verbose,
        }) => {
            commands::serve::serve(ServeArgs {
                host,
                port,
                database_url,
                no_docs,
                verbose,
            })
            .await?;
            return Ok(());
        }
        Some(Commands::List { format }) => {
            commands::todo::list_todos(&api_client, &format).await?
        }
        Some(Commands::Get { id, format }) => {
            commands::todo::get_todo(&api_client, id, &format).await?
        }
        Some(Commands::Add { content }) => {
            commands::todo::create_todo(&api_client, &content).await?
        }
        Some(Commands::Update {
            id,
            content,
            completed,
        }) => {
            commands::todo::update_todo(&api_client, id, content.as_deref(), completed).await?
        }
        Some(Commands::Done { id }) => commands::todo::complete_todo(&api_client, id).await?,
        Some(Commands::Delete { id }) => commands::todo::delete_todo(&api_client, id).await?,
        None => {
            // Show help when no command provided
            Cli::command().print_help().into_diagnostic()?;
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}
