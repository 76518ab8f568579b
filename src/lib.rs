//! kubeadm-config: render the kubeadm bootstrap configuration used by kind.
//!
//! The core entry point is [`config`], which fills in derived fields of a
//! [`ConfigData`] and executes a Go `text/template` against it with `gtmpl`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::LocalFilesystem;
use app::{AppContext, commands::render};

pub use app::commands::render::{RenderOptions, RenderOutcome};
pub use domain::{
    AppError, AutoDerivedConfigData, ConfigData, DEFAULT_CONFIG_TEMPLATE, MAX_NESTING_DEPTH, config,
};

/// Render a kubeadm config using files on the local filesystem.
///
/// Prints the config when no output path is set, otherwise writes it and
/// reports where.
pub fn render(options: &RenderOptions) -> Result<RenderOutcome, AppError> {
    let ctx = AppContext::new(LocalFilesystem);

    let outcome = render::execute(&ctx, options)?;
    match &outcome {
        RenderOutcome::Stdout(rendered) => print!("{}", rendered),
        RenderOutcome::Written { path, bytes } => {
            println!("✅ Wrote kubeadm config to {} ({} bytes)", path.display(), bytes);
        }
    }
    Ok(outcome)
}

/// Print the built-in kubeadm config template.
pub fn default_template() -> &'static str {
    print!("{}", DEFAULT_CONFIG_TEMPLATE);
    DEFAULT_CONFIG_TEMPLATE
}
