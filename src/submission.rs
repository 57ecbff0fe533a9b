//! Saving a brand configuration submitted by the web editor.
//!
//! The editor posts a flattened shape:
//!
//! ```json
//! {
//!   "colors": { "primary": "#0EA5E9", "secondary": "#334155" },
//!   "typography": {
//!     "heading": "Poppins", "body": "Inter",
//!     "headingWeight": 700, "bodyWeight": 400,
//!     "headingLineHeight": 1.2, "bodyLineHeight": 1.6
//!   },
//!   "componentStyles": { "button": { "base": { "padding": "8px 16px" } } }
//! }
//! ```

use serde_json::{Map, Value};
use tracing::info;

use crate::error::PersistenceError;
use crate::model::{
    BrandContext, DEFAULT_FONT_SIZE_BASE, DEFAULT_SPACING_BASE, DEFAULT_SPACING_SCALE,
    DEFAULT_VERSION,
};
use crate::store::ContextStore;
use crate::validate::validate;

/// Name given to every context saved from the web editor.
pub const SUBMITTED_BRAND_NAME: &str = "Brand";

/// Reshape, validate and persist an editor submission.
///
/// A body that does not describe a valid context yields
/// [`PersistenceError::Invalid`] carrying every violation, and nothing is
/// written.
pub fn apply_submission<'a>(
    store: &'a mut ContextStore,
    body: &Value,
) -> Result<&'a BrandContext, PersistenceError> {
    let raw = reshape(body);
    let context = validate(&raw)?;
    let saved = store.save(context)?;
    info!(brand = %saved.name, "Applied web configuration");
    Ok(saved)
}

fn reshape(body: &Value) -> Value {
    let typography = body.get("typography");
    let field = |key: &str| typography.and_then(|t| t.get(key)).cloned();

    let mut doc = Map::new();
    doc.insert("name".into(), SUBMITTED_BRAND_NAME.into());
    doc.insert("version".into(), DEFAULT_VERSION.into());
    if let Some(colors) = body.get("colors") {
        doc.insert("colors".into(), colors.clone());
    }

    let mut font_family = Map::new();
    insert_present(&mut font_family, "heading", field("heading"));
    insert_present(&mut font_family, "body", field("body"));

    let mut font_weight = Map::new();
    insert_present(&mut font_weight, "normal", field("bodyWeight"));
    insert_present(&mut font_weight, "bold", field("headingWeight"));

    let mut line_height = Map::new();
    insert_present(&mut line_height, "normal", field("bodyLineHeight"));
    insert_present(&mut line_height, "tight", field("headingLineHeight"));

    doc.insert(
        "typography".into(),
        serde_json::json!({
            "fontFamily": font_family,
            "fontSize": { "base": DEFAULT_FONT_SIZE_BASE },
            "fontWeight": font_weight,
            "lineHeight": line_height,
        }),
    );
    doc.insert(
        "spacing".into(),
        serde_json::json!({
            "base": DEFAULT_SPACING_BASE,
            "scale": DEFAULT_SPACING_SCALE,
        }),
    );
    if let Some(components) = body.get("componentStyles") {
        doc.insert("components".into(), components.clone());
    }

    Value::Object(doc)
}

fn insert_present(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value.filter(|v| !v.is_null()) {
        map.insert(key.to_string(), value);
    }
}
