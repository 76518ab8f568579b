//! Rendering of the kubeadm config consumed by `kubeadm init`.

use gtmpl::{Context, Template, Value};
use thiserror::Error;

use super::config_data::ConfigData;
use super::error::AppError;

/// The default kubeadm config template used by kind.
pub static DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/kubeadm_config.tmpl");

/// Deepest block nesting (`if`, `with`, `range`, ...) accepted in a template.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A template nests blocks deeper than [`MAX_NESTING_DEPTH`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("block nesting exceeds maximum depth of {limit} at action {action}")]
pub struct NestingTooDeep {
    pub limit: usize,
    /// 1-based index of the action that opened the block past the limit.
    pub action: usize,
}

/// Render a kubeadm config from `template_source` and `data`.
///
/// An empty `template_source` selects [`DEFAULT_CONFIG_TEMPLATE`]. Auto-derived
/// fields of `data` are filled in before execution.
pub fn config(template_source: &str, data: ConfigData) -> Result<String, AppError> {
    let source = if template_source.is_empty() { DEFAULT_CONFIG_TEMPLATE } else { template_source };

    check_nesting(source).map_err(|err| AppError::TemplateParse(Box::new(err)))?;
    let mut template = Template::default();
    template.parse(source).map_err(|err| AppError::TemplateParse(Box::new(err)))?;

    let data = data.derived();

    template
        .render(&Context::from(Value::from(&data)))
        .map_err(|err| AppError::TemplateExecution(Box::new(err)))
}

/// Reject templates whose block nesting would exhaust the stack while parsing
/// or executing.
fn check_nesting(source: &str) -> Result<(), NestingTooDeep> {
    let mut depth = 0usize;
    for (index, action) in source.split("{{").skip(1).enumerate() {
        let body = action.trim_start_matches('-').trim_start();
        let keyword = body
            .split(|c: char| c.is_whitespace() || c == '}' || c == '-' || c == '(')
            .next()
            .unwrap_or_default();
        match keyword {
            "if" | "with" | "range" | "block" | "define" => {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    return Err(NestingTooDeep { limit: MAX_NESTING_DEPTH, action: index + 1 });
                }
            }
            "end" => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}
