//! Storefront Application CLI
//!
//! Back-office seeding commands: create buyers and catalog products
//! directly against the database.

use std::process;

use clap::{Args, Parser, Subcommand};
use jiff::civil::Date;
use rust_decimal::Decimal;

use vend_app::{
    context::AppContext,
    domain::{
        buyers::{
            models::{BuyerUuid, NewBuyer},
            service::BuyersService as _,
        },
        inventory::{
            models::{ColorVariant, NewProduct, ProductUuid},
            service::InventoryService as _,
        },
    },
};

#[derive(Debug, Parser)]
#[command(name = "vend-app", about = "Storefront CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Buyer(BuyerCommand),
    Product(ProductCommand),
}

#[derive(Debug, Args)]
struct BuyerCommand {
    #[command(subcommand)]
    command: BuyerSubcommand,
}

#[derive(Debug, Subcommand)]
enum BuyerSubcommand {
    Create(CreateBuyerArgs),
}

#[derive(Debug, Args)]
struct CreateBuyerArgs {
    /// Buyer display name
    #[arg(long)]
    name: String,

    /// Shipping address; omitted means "not provided yet"
    #[arg(long)]
    address: Option<String>,

    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    birthday: Option<Date>,

    /// Mark the buyer as a PWD
    #[arg(long)]
    pwd: bool,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Args)]
struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    Create(CreateProductArgs),
}

#[derive(Debug, Args)]
struct CreateProductArgs {
    /// Product brand
    #[arg(long)]
    brand: String,

    /// Product name
    #[arg(long)]
    name: String,

    /// Base price, e.g. 54999.00
    #[arg(long)]
    price: Decimal,

    /// Colour variant as "colour=stock"; repeatable
    #[arg(long = "color", value_parser = parse_color)]
    colors: Vec<ColorSpec>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Clone)]
struct ColorSpec {
    color: String,
    stock: u32,
}

fn parse_color(value: &str) -> Result<ColorSpec, String> {
    let (color, stock) = value
        .split_once('=')
        .ok_or_else(|| format!("expected \"colour=stock\", got \"{value}\""))?;

    if color.trim().is_empty() {
        return Err("colour name cannot be empty".to_string());
    }

    let stock: u32 = stock
        .trim()
        .parse()
        .map_err(|_ignored| format!("invalid stock count in \"{value}\""))?;

    Ok(ColorSpec {
        color: color.trim().to_string(),
        stock,
    })
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Buyer(BuyerCommand {
            command: BuyerSubcommand::Create(args),
        }) => create_buyer(args).await,
        Commands::Product(ProductCommand {
            command: ProductSubcommand::Create(args),
        }) => create_product(args).await,
    }
}

async fn create_buyer(args: CreateBuyerArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let buyer = app
        .buyers
        .create_buyer(NewBuyer {
            uuid: BuyerUuid::new(),
            name: args.name,
            address: args.address,
            birthday: args.birthday,
            is_pwd: args.pwd,
        })
        .await
        .map_err(|error| format!("failed to create buyer: {error}"))?;

    println!("buyer_uuid: {}", buyer.uuid);
    println!("buyer_name: {}", buyer.name);
    println!("address: {}", buyer.address);

    Ok(())
}

async fn create_product(args: CreateProductArgs) -> Result<(), String> {
    if args.colors.is_empty() {
        return Err("at least one --color \"colour=stock\" is required".to_string());
    }

    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let product = app
        .inventory
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            brand: args.brand,
            name: args.name,
            price: args.price,
            colors: args
                .colors
                .into_iter()
                .map(|spec| ColorVariant {
                    color: spec.color,
                    stock: spec.stock,
                })
                .collect(),
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("brand: {}", product.brand);
    println!("name: {}", product.name);

    for variant in &product.colors {
        println!("color: {} (stock {})", variant.color, variant.stock);
    }

    Ok(())
}
