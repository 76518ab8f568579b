use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kubeadm_config::{AppError, RenderOptions};

#[derive(Parser)]
#[command(name = "kubeadm-config")]
#[command(version)]
#[command(about = "Render the kubeadm bootstrap configuration for a kind cluster", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a kubeadm config from data and an optional template
    #[clap(visible_alias = "r")]
    Render {
        /// Config data file (.toml, .yaml or .yml)
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Custom Go text/template file; the built-in template is used when omitted
        #[arg(short, long)]
        template: Option<PathBuf>,
        /// Cluster name (overrides the data file)
        #[arg(long)]
        cluster_name: Option<String>,
        /// Kubernetes version (overrides the data file)
        #[arg(long)]
        kubernetes_version: Option<String>,
        /// Unified control plane image (overrides the data file)
        #[arg(long)]
        image: Option<String>,
        /// Docker stable tag; derived from the Kubernetes version when omitted
        #[arg(long)]
        docker_stable_tag: Option<String>,
        /// Write the config to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the built-in kubeadm config template
    #[clap(visible_alias = "dt")]
    DefaultTemplate,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Render {
            data,
            template,
            cluster_name,
            kubernetes_version,
            image,
            docker_stable_tag,
            output,
        } => {
            let options = RenderOptions {
                data_path: data,
                template_path: template,
                cluster_name,
                kubernetes_version,
                unified_control_plane_image: image,
                docker_stable_tag,
                output,
            };
            kubeadm_config::render(&options).map(|_| ())
        }
        Commands::DefaultTemplate => {
            kubeadm_config::default_template();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
