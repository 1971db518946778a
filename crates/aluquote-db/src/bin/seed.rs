//! # Seed Data Generator
//!
//! Populates the database with a demo catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p aluquote-db --bin seed
//!
//! # Specify database path
//! cargo run -p aluquote-db --bin seed -- --db ./data/aluquote.db
//! ```
//!
//! ## Generated Data
//! - Fitting products (windows, doors, balcony systems) with per-m² rates
//! - Glass options with surcharges
//! - Frame styles and colours
//! - Accessories (handles, locks, hinges, stoppers)
//! - A couple of demo customers

use std::env;

use serde_json::to_value;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use aluquote_core::types::{
    Accessory, AccessoryCategory, Colour, Customer, FittingKind, Glass, Product, Style,
};
use aluquote_db::{Database, DbConfig, EntityKind};

const PRODUCTS: &[(&str, FittingKind, f64, &str)] = &[
    ("Sliding Window", FittingKind::Window, 120.0, "Two-track sliding window"),
    ("Casement Window", FittingKind::Window, 140.0, "Side-hinged outward opening window"),
    ("Fixed Window", FittingKind::Window, 95.0, "Non-opening picture window"),
    ("Louvre Window", FittingKind::Window, 110.0, "Adjustable glass blade window"),
    ("Sliding Door", FittingKind::Door, 160.0, "Two-panel sliding patio door"),
    ("Hinged Door", FittingKind::Door, 175.0, "Single-leaf hinged entrance door"),
    ("Folding Door", FittingKind::Door, 210.0, "Multi-panel bi-fold door"),
    ("Balcony Enclosure", FittingKind::Balcony, 185.0, "Frameless balcony glazing system"),
    ("Balcony Railing", FittingKind::Balcony, 130.0, "Glass balustrade with aluminum rail"),
];

const GLASSES: &[(&str, &str, f64, f64)] = &[
    ("Clear Float", "float", 5.0, 20.0),
    ("Tempered Clear", "tempered", 6.0, 35.0),
    ("Tinted Bronze", "tinted", 6.0, 28.0),
    ("Laminated Safety", "laminated", 8.0, 48.0),
    ("Double Glazed", "insulated", 20.0, 75.0),
];

const STYLES: &[(&str, &str, f64)] = &[
    ("Slimline", "modern", 18.5),
    ("Classic", "traditional", 12.0),
    ("Heavy Duty", "commercial", 25.0),
];

const COLOURS: &[(&str, &str, f64)] = &[
    ("Natural Anodized", "#C0C0C0", 0.0),
    ("Powder White", "#F4F4F4", 8.0),
    ("Anthracite Grey", "#383E42", 12.0),
    ("Bronze", "#614E3C", 12.0),
    ("Matte Black", "#1B1B1B", 15.0),
];

const ACCESSORIES: &[(&str, &str, f64, AccessoryCategory)] = &[
    ("Chrome Handle", "handle", 45.0, AccessoryCategory::WindowAndDoor),
    ("Multi-Point Lock", "lock", 85.0, AccessoryCategory::Door),
    ("Window Lock", "lock", 25.5, AccessoryCategory::Window),
    ("Heavy Hinge Set", "hinge", 60.0, AccessoryCategory::Door),
    ("Door Stopper", "stopper", 12.5, AccessoryCategory::Door),
    ("Insect Screen", "screen", 38.0, AccessoryCategory::WindowAndDoor),
    ("Balcony Drain Kit", "drainage", 55.0, AccessoryCategory::Balcony),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./aluquote_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("AluQuote Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./aluquote_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 AluQuote Seed Data Generator");
    println!("===============================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let records = db.records();

    let existing = records.count(EntityKind::Product).await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");

    for (name, kind, rate, description) in PRODUCTS {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            kind: *kind,
            price_per_sqm: *rate,
            description: description.to_string(),
            material: "Aluminum".to_string(),
            color: "Mill Finish".to_string(),
        };
        records
            .upsert(EntityKind::Product, &product.id, &to_value(&product)?)
            .await?;
    }
    println!("  {} products", PRODUCTS.len());

    for (name, glass_type, thickness, rate) in GLASSES {
        let glass = Glass {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            glass_type: glass_type.to_string(),
            thickness: *thickness,
            price_per_sqm: *rate,
            description: format!("{}mm {} glass", thickness, glass_type),
            specifications: String::new(),
        };
        records
            .upsert(EntityKind::Glass, &glass.id, &to_value(&glass)?)
            .await?;
    }
    println!("  {} glass options", GLASSES.len());

    for (name, category, rate) in STYLES {
        let style = Style {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            price_per_sqm: *rate,
        };
        records
            .upsert(EntityKind::Style, &style.id, &to_value(&style)?)
            .await?;
    }
    println!("  {} styles", STYLES.len());

    for (name, hex_code, rate) in COLOURS {
        let colour = Colour {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: String::new(),
            hex_code: hex_code.to_string(),
            price_per_sqm: *rate,
        };
        records
            .upsert(EntityKind::Colour, &colour.id, &to_value(&colour)?)
            .await?;
    }
    println!("  {} colours", COLOURS.len());

    for (name, accessory_type, price, category) in ACCESSORIES {
        let accessory = Accessory {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: String::new(),
            price: *price,
            accessory_type: accessory_type.to_string(),
            specifications: String::new(),
            category: *category,
        };
        records
            .upsert(EntityKind::Accessory, &accessory.id, &to_value(&accessory)?)
            .await?;
    }
    println!("  {} accessories", ACCESSORIES.len());

    let customers = [
        Customer {
            id: Uuid::new_v4().to_string(),
            name: "Marie Payet".to_string(),
            email: "marie@example.sc".to_string(),
            phone: "+248 2 555 123".to_string(),
            address: "Beau Vallon, Mahé".to_string(),
            total_orders: 0,
            total_spent: 0.0,
        },
        Customer {
            id: Uuid::new_v4().to_string(),
            name: "Jean Hoareau".to_string(),
            email: "jean@example.sc".to_string(),
            phone: "+248 2 555 987".to_string(),
            address: "Anse Royale, Mahé".to_string(),
            total_orders: 0,
            total_spent: 0.0,
        },
    ];
    for customer in &customers {
        records
            .upsert(EntityKind::Customer, &customer.id, &to_value(customer)?)
            .await?;
    }
    println!("  {} customers", customers.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
