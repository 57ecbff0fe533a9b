//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use figment_mcp::model::BrandContext;
use figment_mcp::store::ContextStore;
use figment_mcp::validate::validate;
use serde_json::{json, Value};

/// A fully populated document exercising every optional section.
pub fn acme_json() -> Value {
    json!({
        "name": "Acme",
        "version": "2.1.0",
        "colors": {
            "primary": "#112233",
            "secondary": "#445566",
            "accent": "#778899",
            "success": "#22C55E",
            "neutral": { "900": "#111827", "50": "#F9FAFB" }
        },
        "typography": {
            "fontFamily": {
                "heading": "Poppins, sans-serif",
                "body": "Inter, sans-serif",
                "mono": "JetBrains Mono"
            },
            "fontSize": { "base": "16px", "lg": "18px", "sm": "14px" },
            "fontWeight": { "normal": 400, "bold": 700 },
            "lineHeight": { "normal": 1.6 }
        },
        "spacing": { "base": 4, "scale": [0, 4, 8] },
        "components": {
            "button": {
                "base": { "padding": "8px 16px", "border-radius": "6px" },
                "variants": {
                    "primary": { "background": "#112233", "color": "#FFFFFF" },
                    "outline": { "border": "1px solid #112233", "padding": "7px 15px" }
                }
            },
            "input": {
                "base": { "border": "1px solid #CBD5E1" },
                "states": { "focus": { "border": "1px solid #112233" } }
            }
        }
    })
}

/// Only the required fields.
pub fn minimal_json() -> Value {
    json!({
        "name": "Minimal",
        "colors": { "primary": "#000000", "secondary": "#FFFFFF" },
        "typography": {
            "fontFamily": { "heading": "Georgia", "body": "Arial" }
        }
    })
}

pub fn acme() -> BrandContext {
    validate(&acme_json()).unwrap()
}

pub fn minimal() -> BrandContext {
    validate(&minimal_json()).unwrap()
}

pub fn context_path(dir: &Path) -> PathBuf {
    dir.join(".figment").join("brand-context.json")
}

/// A store under `dir` with `context` already persisted.
pub fn store_with(dir: &Path, context: BrandContext) -> ContextStore {
    let mut store = ContextStore::new(context_path(dir));
    store.save(context).unwrap();
    store
}
