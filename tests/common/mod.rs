//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use catalog_browser::api::{Product, ProductPage};
use catalog_browser::config::UiConfig;
use catalog_browser::ui::app::{App, UiCommand};
use catalog_browser::ui::catalog::FetchKind;
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// A product with predictable fields.
pub fn product(id: u64, title: &str) -> Product {
    Product {
        id,
        thumbnail: format!("https://cdn.example/{id}/thumb.png"),
        images: vec![
            format!("https://cdn.example/{id}/1.png"),
            format!("https://cdn.example/{id}/2.png"),
        ],
        title: title.to_string(),
        description: format!("Description of {title}"),
        stock: 10,
        price: 19.99,
    }
}

pub fn products(ids: &[u64]) -> Vec<Product> {
    ids.iter()
        .map(|id| product(*id, &format!("Product {id}")))
        .collect()
}

pub fn page(products: Vec<Product>, total: u64) -> ProductPage {
    ProductPage {
        limit: products.len() as u64,
        skip: 0,
        total,
        products,
    }
}

/// JSON body in the shape the catalog API returns.
pub fn page_json(ids: &[u64], skip: u64, total: u64) -> serde_json::Value {
    let products: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Product {id}"),
                "description": "A product",
                "price": 9.99,
                "stock": 3,
                "thumbnail": format!("https://cdn.example/{id}/thumb.png"),
                "images": [format!("https://cdn.example/{id}/1.png")],
                "rating": 4.5,
            })
        })
        .collect();
    json!({
        "products": products,
        "total": total,
        "skip": skip,
        "limit": ids.len(),
    })
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

/// App wired to a command channel, with a 20-row list viewport.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(64);
    let mut app = App::new(&UiConfig::default());
    app.set_command_sender(tx);
    app.on_resize(20);
    (app, rx)
}

pub fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

/// Answer the most recent fetch with `products`, the way the worker would.
pub fn complete_fetch(app: &mut App, kind: FetchKind, products: Vec<Product>, total: u64) {
    let generation = app.catalog().generation();
    app.on_page_loaded(generation, kind, page(products, total));
    app.on_fetch_settled(generation);
}

pub fn ids(products: &[Product]) -> Vec<u64> {
    products.iter().map(|p| p.id).collect()
}
