use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::config::{ConfigDataFile, load_config_data_file};
use crate::domain::{AppError, AutoDerivedConfigData, ConfigData, kubeadm};
use crate::ports::FileStore;

/// Inputs for the render command.
///
/// Flag values take precedence over values read from `data_path`.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub data_path: Option<PathBuf>,
    pub template_path: Option<PathBuf>,
    pub cluster_name: Option<String>,
    pub kubernetes_version: Option<String>,
    pub unified_control_plane_image: Option<String>,
    pub docker_stable_tag: Option<String>,
    pub output: Option<PathBuf>,
}

/// Where the rendered config went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// No output path was given; the caller prints the config.
    Stdout(String),
    Written { path: PathBuf, bytes: usize },
}

/// Execute the render command.
pub fn execute<F: FileStore>(
    ctx: &AppContext<F>,
    options: &RenderOptions,
) -> Result<RenderOutcome, AppError> {
    let data = resolve_config_data(ctx, options)?;

    let template_source = match &options.template_path {
        Some(path) => ctx.files().read_file(path)?,
        None => String::new(),
    };

    let rendered = kubeadm::config(&template_source, data)?;

    match &options.output {
        Some(path) => {
            ctx.files().write_file(path, &rendered)?;
            Ok(RenderOutcome::Written { path: path.clone(), bytes: rendered.len() })
        }
        None => Ok(RenderOutcome::Stdout(rendered)),
    }
}

/// Merge the data file with flag overrides.
///
/// Cluster name and Kubernetes version must come from one of the two sources.
pub fn resolve_config_data<F: FileStore>(
    ctx: &AppContext<F>,
    options: &RenderOptions,
) -> Result<ConfigData, AppError> {
    let file = match &options.data_path {
        Some(path) => load_config_data_file(path, ctx.files())?,
        None => ConfigDataFile::default(),
    };

    let cluster_name = options.cluster_name.clone().or(file.cluster_name).ok_or_else(|| {
        AppError::config_error(
            "Missing cluster name: set cluster_name in the data file or pass --cluster-name",
        )
    })?;
    let kubernetes_version =
        options.kubernetes_version.clone().or(file.kubernetes_version).ok_or_else(|| {
            AppError::config_error(
                "Missing Kubernetes version: set kubernetes_version in the data file or pass --kubernetes-version",
            )
        })?;
    let unified_control_plane_image = options
        .unified_control_plane_image
        .clone()
        .or(file.unified_control_plane_image)
        .unwrap_or_default();
    let docker_stable_tag =
        options.docker_stable_tag.clone().or(file.docker_stable_tag).unwrap_or_default();

    Ok(ConfigData {
        cluster_name,
        kubernetes_version,
        unified_control_plane_image,
        auto_derived: AutoDerivedConfigData { docker_stable_tag },
    })
}
