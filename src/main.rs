use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventario_panel::app::App;
use inventario_panel::error::AppError;
use inventario_panel::page::Section;
use inventario_panel::Config;

#[derive(Parser, Debug)]
#[command(
    name = "inventario-panel",
    about = "Dashboard client for the inventario inteligente API"
)]
struct Args {
    /// Base URL of the inventory API
    #[arg(long)]
    url: Option<String>,

    /// Server origin used to resolve uploaded image paths
    #[arg(long)]
    origin: Option<String>,

    /// Write the rendered page to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the dashboard and check the system status (default)
    Dashboard,
    /// Show the product list
    Products,
    /// Show the category list
    Categories,
    /// Show the alert list
    Alerts,
    /// One-shot backend health check
    Health,
    /// Print a product summary from the latest snapshot
    ShowProduct { id: i64 },
    /// Create a product
    AddProduct {
        #[arg(long, default_value = "")]
        code: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        price: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "0")]
        stock: String,
        #[arg(long, default_value = "5")]
        min_stock: String,
        #[arg(long, default_value = "")]
        category_id: String,
        #[arg(long, default_value = "")]
        image_url: String,
        #[arg(long)]
        image_file: Option<PathBuf>,
    },
    /// Update an existing product
    UpdateProduct {
        id: i64,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        stock: Option<String>,
        #[arg(long)]
        min_stock: Option<String>,
        #[arg(long)]
        category_id: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        image_file: Option<PathBuf>,
    },
    /// Mark an alert as read
    MarkRead { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventario_panel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(url) = args.url {
        config.api_base_url = url;
    }
    if let Some(origin) = args.origin {
        config.server_origin = origin;
    }

    let mut app = App::new(config);

    match args.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => {
            app.check_system_status().await;
            app.load_dashboard().await.ok();
        }
        Command::Products => {
            app.navigate(Section::Products).await.ok();
        }
        Command::Categories => {
            app.navigate(Section::Categories).await.ok();
        }
        Command::Alerts => {
            app.navigate(Section::Alerts).await.ok();
        }
        Command::Health => {
            app.check_system_status().await;
        }
        Command::ShowProduct { id } => {
            app.load_products().await.ok();
            println!("{}", app.product_detail(id)?);
            return Ok(());
        }
        Command::AddProduct {
            code,
            name,
            price,
            description,
            stock,
            min_stock,
            category_id,
            image_url,
            image_file,
        } => {
            app.open_product_form();
            {
                let form = app.form_mut();
                form.code = code;
                form.name = name;
                form.price = price;
                form.description = description;
                form.stock = stock;
                form.min_stock = min_stock;
                form.category_id = category_id;
                form.image_url = image_url;
            }
            if let Some(path) = image_file {
                app.attach_image_file(path)?;
            }
            save(&mut app).await?;
        }
        Command::UpdateProduct {
            id,
            code,
            name,
            price,
            description,
            stock,
            min_stock,
            category_id,
            image_url,
            image_file,
        } => {
            app.load_products().await.ok();
            app.edit_product(id)?;
            {
                let form = app.form_mut();
                if let Some(code) = code {
                    form.code = code;
                }
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(price) = price {
                    form.price = price;
                }
                if let Some(description) = description {
                    form.description = description;
                }
                if let Some(stock) = stock {
                    form.stock = stock;
                }
                if let Some(min_stock) = min_stock {
                    form.min_stock = min_stock;
                }
                if let Some(category_id) = category_id {
                    form.category_id = category_id;
                }
                if let Some(image_url) = image_url {
                    form.image_url = image_url;
                }
            }
            if let Some(path) = image_file {
                app.attach_image_file(path)?;
            }
            save(&mut app).await?;
        }
        Command::MarkRead { id } => {
            app.mark_alert_read(id).await.ok();
        }
    }

    let html = app.render();
    match args.out {
        Some(path) => std::fs::write(path, html)?,
        None => println!("{html}"),
    }

    Ok(())
}

/// A validation failure blocks the submission outright: the run aborts
/// before any request. Every other failure already surfaced as a
/// notification, so the page still renders.
async fn save(app: &mut App) -> anyhow::Result<()> {
    if let Err(err) = app.save_product().await {
        if matches!(err, AppError::Validation(_)) {
            anyhow::bail!("{err}");
        }
    }
    Ok(())
}
