//! Seed data for the product store.
//!
//! The service starts from a fixed built-in product list unless a JSON seed
//! file is configured. A seed file is an array of product objects; any
//! `status` field in it is ignored, since status is always derived.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::inventory::error::SeedError;
use crate::inventory::types::Product;

fn product(id: &str, name: &str, sku: &str, warehouse: &str, stock: i64, demand: i64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        sku: sku.to_string(),
        warehouse: warehouse.to_string(),
        stock,
        demand,
    }
}

/// The built-in product list.
pub fn builtin_products() -> Vec<Product> {
    vec![
        product("P-1001", "12mm Hex Bolt", "HEX-12-100", "BLR-A", 180, 120),
        product("P-1002", "Steel Washer", "WSR-08-500", "BLR-A", 50, 80),
        product("P-1003", "M8 Nut", "NUT-08-200", "PNQ-C", 80, 80),
        product("P-1004", "Bearing 608ZZ", "BRG-608-50", "DEL-B", 24, 120),
        product("P-1005", "Hydraulic Hose 1m", "HYD-HS-010", "DEL-B", 64, 40),
        product("P-1006", "Copper Wire Spool", "CUW-25-020", "PNQ-C", 12, 30),
        product("P-1007", "Cable Tie 200mm", "CTY-200-1K", "BLR-A", 900, 650),
        product("P-1008", "Spring Pin 4mm", "SPN-04-300", "MUM-D", 300, 300),
        product("P-1009", "Rubber Gasket", "GSK-RB-075", "MUM-D", 45, 110),
        product("P-1010", "Drive Belt A42", "BLT-A42-01", "DEL-B", 18, 18),
        product("P-1011", "Grease Cartridge", "GRS-CT-400", "PNQ-C", 140, 95),
        product("P-1012", "Safety Gloves L", "GLV-SF-L02", "MUM-D", 0, 60),
    ]
}

/// Parse and validate a JSON array of products.
pub fn parse_products(json: &str) -> Result<Vec<Product>, SeedError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    validate(&products)?;
    Ok(products)
}

/// Read, parse and validate a JSON seed file.
pub fn load_products(path: &Path) -> Result<Vec<Product>, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_products(&raw)
}

fn validate(products: &[Product]) -> Result<(), SeedError> {
    let mut ids = HashSet::new();
    let mut skus = HashSet::new();

    for p in products {
        if !ids.insert(p.id.as_str()) {
            return Err(SeedError::DuplicateId { id: p.id.clone() });
        }
        if p.stock < 0 {
            return Err(SeedError::NegativeStock {
                id: p.id.clone(),
                stock: p.stock,
            });
        }
        // Uniqueness of sku is not enforced.
        if !skus.insert(p.sku.as_str()) {
            tracing::warn!(sku = %p.sku, id = %p.id, "Duplicate sku in seed data");
        }
    }

    Ok(())
}
