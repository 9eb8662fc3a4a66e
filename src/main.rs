//! Rentdesk - RDP/VPS storefront
//!
//! A self-service command line storefront for renting remote-desktop (RDP/VPS)
//! server instances: configure hardware, software and rental duration, get a
//! price, and place line items in the cart.

use clap::Parser;

mod cart;
mod cli;
mod commands;
mod domain;
mod error;
mod pricing;
mod settings;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Configure(args) => commands::configure::run(cli.cart_file, cli.settings, args),
        Commands::Quote(args) => commands::quote::run(cli.settings, args),
        Commands::Plans => commands::plans::run(cli.settings),
        Commands::Catalog => commands::catalog::run(),
        Commands::Cart(args) => commands::cart::run(cli.cart_file, cli.settings, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
