//! Brand context store and MCP server.
//!
//! A project's brand guide (colors, typography, spacing and component
//! style patterns) is validated, persisted as JSON, and exposed to AI
//! coding tools as MCP resources (`brand-guidelines`, `css-variables`,
//! `brand-context`) and tools (`get_brand_colors`, `get_component_pattern`,
//! `validate_design_compliance`, `generate_component_code`) over
//! JSON-RPC 2.0 stdio transport.

pub mod config;
pub mod error;
pub mod handlers;
pub mod import;
pub mod model;
pub mod protocol;
pub mod server;
pub mod store;
pub mod style;
pub mod submission;
pub mod validate;
