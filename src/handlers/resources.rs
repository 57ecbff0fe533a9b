use crate::error::FacadeError;
use crate::model::BrandContext;
use crate::protocol::{ResourceContents, ResourceDescriptor};
use crate::style::{render_css_variables, render_guidelines};

pub const BRAND_GUIDELINES_URI: &str = "figment://brand-guidelines";
pub const CSS_VARIABLES_URI: &str = "figment://css-variables";
pub const BRAND_CONTEXT_URI: &str = "figment://brand-context";

const MARKDOWN: &str = "text/markdown";
const CSS: &str = "text/css";
const JSON: &str = "application/json";

fn descriptor(uri: &str, mime_type: &str, name: &str, description: &str) -> ResourceDescriptor {
    ResourceDescriptor {
        uri: uri.to_string(),
        mime_type: mime_type.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// Handle `resources/list`.
///
/// Guidelines and CSS variables are always listed; the raw document only
/// when a context is loaded.
pub async fn list(context: Option<&BrandContext>) -> Vec<ResourceDescriptor> {
    let mut resources = vec![
        descriptor(
            BRAND_GUIDELINES_URI,
            MARKDOWN,
            "Brand Guidelines",
            "Complete brand guidelines and component patterns for AI code generation",
        ),
        descriptor(
            CSS_VARIABLES_URI,
            CSS,
            "CSS Custom Properties",
            "CSS custom properties generated from brand context",
        ),
    ];

    if context.is_some() {
        resources.push(descriptor(
            BRAND_CONTEXT_URI,
            JSON,
            "Brand Context JSON",
            "Raw brand context data in JSON format",
        ));
    }

    resources
}

/// Handle `resources/read` for a single URI.
pub async fn read(
    context: Option<&BrandContext>,
    uri: &str,
) -> Result<ResourceContents, FacadeError> {
    let (mime_type, text) = match uri {
        BRAND_GUIDELINES_URI => (MARKDOWN, render_guidelines(context)),
        CSS_VARIABLES_URI => (
            CSS,
            context.map(render_css_variables).unwrap_or_default(),
        ),
        BRAND_CONTEXT_URI => {
            let context = context.ok_or(FacadeError::NoContext)?;
            let json = serde_json::to_string_pretty(context)
                .map_err(|e| FacadeError::Render(e.to_string()))?;
            (JSON, json)
        }
        _ => return Err(FacadeError::UnknownResource(uri.to_string())),
    };

    Ok(ResourceContents {
        uri: uri.to_string(),
        mime_type: mime_type.to_string(),
        text,
    })
}
