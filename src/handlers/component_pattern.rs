use crate::model::{BrandContext, ComponentKind};
use crate::protocol::{ComponentPatternParams, ToolOutcome};
use crate::style::resolve_component_style;

const NO_PATTERNS: &str =
    "No component patterns configured. The generated components will use basic styling.";

/// Handle a `get_component_pattern` tool call.
///
/// Returns the merged style map as a `json` content item. Missing context,
/// an unknown component name and an unconfigured component are all reported
/// as text.
pub async fn handle(params: ComponentPatternParams, context: Option<&BrandContext>) -> ToolOutcome {
    let Some(patterns) = context.and_then(|c| c.components.as_ref()) else {
        return ToolOutcome::not_configured(NO_PATTERNS);
    };

    let component = match ComponentKind::parse(&params.component) {
        Some(kind) if kind != ComponentKind::Modal => kind,
        _ => {
            return ToolOutcome::not_configured(format!(
                "Component pattern for \"{}\" not found.",
                params.component
            ));
        }
    };

    if patterns.pattern(component).is_none() {
        return ToolOutcome::not_configured(format!(
            "No \"{}\" pattern configured. The generated component will use basic styling.",
            component.as_str()
        ));
    }

    let styles = resolve_component_style(patterns, component, &params.variant);
    match serde_json::to_value(&styles) {
        Ok(json) => ToolOutcome::json(json),
        Err(e) => ToolOutcome::rejected(format!("Cannot serialize component pattern: {e}")),
    }
}
