// CLI command definitions

use super::render::{OwnerRefCommand, RenderCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "odo-kube",
    version,
    about = "Kubernetes manifest generator for odo components",
    long_about = "Generates the Deployment, PersistentVolumeClaim and Ingress specs of a component without talking to a cluster"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render the manifests of a component as YAML
    Render(RenderCommand),

    /// Print the owner reference for an existing deployment
    OwnerRef(OwnerRefCommand),
}
