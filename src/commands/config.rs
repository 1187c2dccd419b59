// ABOUTME: Config command implementation.
// ABOUTME: Validates the environment and prints the values a deploy would use.

use azdeploy::config::DeploymentConfig;
use azdeploy::error::Result;
use azdeploy::output::{Output, OutputMode};
use azdeploy::tools::az::CONTAINER_PORT;

pub fn show_config(output: &Output) -> Result<()> {
    let config = DeploymentConfig::from_env()?;
    let fqdn = config.container_name.fqdn(&config.location);
    let url = format!("http://{fqdn}:{CONTAINER_PORT}");

    if output.mode() == OutputMode::Json {
        let value = serde_json::json!({
            "resource_group": &config.resource_group,
            "location": &config.location,
            "registry": config.registry.as_str(),
            "login_server": config.registry.login_server(),
            "image": config.image.to_string(),
            "registry_image": config.registry_image().to_string(),
            "container_name": config.container_name.as_str(),
            "dns_label": config.container_name.dns_label(),
            "url": url,
        });
        println!("{value}");
        return Ok(());
    }

    println!("Resource group: {}", config.resource_group);
    println!("Location:       {}", config.location);
    println!("Registry:       {}", config.registry.login_server());
    println!("Image:          {}", config.image);
    println!("Registry image: {}", config.registry_image());
    println!("Container:      {}", config.container_name);
    println!("DNS label:      {}", config.container_name.dns_label());
    println!("URL:            {url}");
    Ok(())
}
