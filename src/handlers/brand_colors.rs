use crate::model::BrandContext;
use crate::protocol::{BrandColorsParams, ToolOutcome};

const NOT_CONFIGURED: &str =
    "No brand colors configured. Run `figment init` to set up your brand guide.";

/// Handle a `get_brand_colors` tool call.
///
/// `format = "css-var"` renders `var(--color-*)` references; every other
/// value (including the advertised `rgb` and `hsl`) renders literal hex.
pub async fn handle(params: BrandColorsParams, context: Option<&BrandContext>) -> ToolOutcome {
    let Some(context) = context else {
        return ToolOutcome::not_configured(NOT_CONFIGURED);
    };
    let colors = &context.colors;

    let mut lines = Vec::with_capacity(3);
    match params.format.as_deref() {
        Some("css-var") => {
            lines.push("Primary: var(--color-primary)".to_string());
            lines.push("Secondary: var(--color-secondary)".to_string());
            if colors.accent.is_some() {
                lines.push("Accent: var(--color-accent)".to_string());
            }
        }
        _ => {
            lines.push(format!("Primary: {}", colors.primary));
            lines.push(format!("Secondary: {}", colors.secondary));
            if let Some(accent) = &colors.accent {
                lines.push(format!("Accent: {accent}"));
            }
        }
    }

    ToolOutcome::text(lines.join("\n"))
}
