use crate::model::BrandContext;
use crate::protocol::{DesignComplianceParams, ToolOutcome};

const NOT_CONFIGURED: &str = "Cannot validate compliance - no brand context available.";

pub const NO_BRAND_COLORS: &str = "No brand colors detected in CSS";
pub const NO_BRAND_TYPOGRAPHY: &str = "Brand typography not detected";

/// Handle a `validate_design_compliance` tool call.
///
/// A presence check only: the CSS passes if it mentions at least one brand
/// color literal and the body font family, compared as plain substrings.
pub async fn handle(
    params: DesignComplianceParams,
    context: Option<&BrandContext>,
) -> ToolOutcome {
    let Some(context) = context else {
        return ToolOutcome::not_configured(NOT_CONFIGURED);
    };

    let issues = find_issues(&params.css, context);
    if issues.is_empty() {
        return ToolOutcome::text("✅ Design appears to comply with brand guidelines");
    }

    let listed: Vec<String> = issues.iter().map(|issue| format!("- {issue}")).collect();
    ToolOutcome::text(format!("❌ Issues found:\n{}", listed.join("\n")))
}

fn find_issues(css: &str, context: &BrandContext) -> Vec<&'static str> {
    let mut issues = Vec::new();

    if !context.colors.brand().iter().any(|color| css.contains(*color)) {
        issues.push(NO_BRAND_COLORS);
    }

    if !css.contains(context.typography.font_family.body.as_str()) {
        issues.push(NO_BRAND_TYPOGRAPHY);
    }

    issues
}
