//! Manifest rendering commands

use crate::domain::config::{apply_to_component_config, parse_dynamic_configs};
use crate::infrastructure::kubernetes::resources::generate_owner_reference;
use crate::{ComponentConfig, ComponentDescriptor};
use anyhow::Context;
use clap::Parser;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::path::PathBuf;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Multi-document YAML stream
    Yaml,
    /// A single v1 List object
    Json,
}

#[derive(Parser, Debug, Clone)]
pub struct RenderCommand {
    /// Path to the component configuration file (TOML or YAML)
    /// If not provided, the component is described entirely by -D properties
    #[arg(long, short = 'f', value_name = "PATH")]
    pub config_file: Option<String>,

    /// Dynamic configuration properties to override any settings (-D key=value)
    ///
    /// Component: component.name, component.namespace, component.image, component.privileged,
    /// component.command, component.args (comma-separated; an item cannot itself contain a comma,
    /// use the config file for such arguments)
    /// Resources: resources.cpu-request, resources.cpu-limit, resources.memory-request, resources.memory-limit
    /// Storage: storage.size, storage.name
    /// Ingress: ingress.domain, ingress.port, ingress.service-name, ingress.tls-secret
    /// Owner: owner.name, owner.uid
    /// Maps: labels.KEY, annotations.KEY, env.VAR_NAME
    ///
    /// Example: -Dcomponent.image=node:20 -Dstorage.size=2Gi -Denv.PORT=8080
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub properties: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Write the manifests to a file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let rendered = self.render()?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered)
                    .with_context(|| format!("Failed to write manifests to {}", path.display()))?;
                tracing::info!(path = %path.display(), "manifests written");
            }
            None => print!("{}", rendered),
        }

        Ok(())
    }

    pub fn render(&self) -> anyhow::Result<String> {
        let mut config = match &self.config_file {
            Some(path) => ComponentConfig::from(path)
                .with_context(|| format!("Failed to load configuration from {}", path))?,
            None => {
                tracing::debug!("no configuration file specified, using defaults");
                ComponentConfig::default()
            }
        };

        if !self.properties.is_empty() {
            let dynamic = parse_dynamic_configs(&self.properties)
                .context("Failed to parse dynamic configs")?;
            apply_to_component_config(&dynamic, &mut config)?;
        }

        let manifests = ComponentDescriptor::new(config)
            .build()
            .context("Failed to generate component manifests")?;

        let rendered = match self.format {
            OutputFormat::Yaml => manifests.to_yaml()?,
            OutputFormat::Json => manifests.to_json()?,
        };
        Ok(rendered)
    }
}

#[derive(Parser, Debug, Clone)]
pub struct OwnerRefCommand {
    /// Deployment name
    #[arg(long)]
    pub name: String,

    /// Deployment UID
    #[arg(long)]
    pub uid: String,
}

impl OwnerRefCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let deployment = Deployment {
            metadata: ObjectMeta {
                name: Some(self.name.clone()),
                uid: Some(self.uid.clone()),
                ..Default::default()
            },
            ..Default::default()
        };

        let owner = generate_owner_reference(&deployment);
        print!("{}", serde_yaml::to_string(&owner)?);
        Ok(())
    }
}
