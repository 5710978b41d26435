use crate::config::{AuthType, NodeConfig, Resource};
use crate::naming::package_name_of;
use itertools::Itertools;
use tracing::debug;

pub(super) fn generate(config: &NodeConfig) -> String {
    let package = package_name_of(&config.name);
    let metadata = &config.metadata;

    let usage = config.resources.iter().map(resource_section).join("\n");
    let credentials = match config.authentication.auth_type {
        AuthType::None => "No authentication required.".to_string(),
        other => format!("This node requires {other} authentication."),
    };

    let readme = format!(
        r#"# {package}

{description}

## Installation

To install this n8n community node:

1. Go to **Settings** > **Community Nodes** in your n8n instance
2. Click **Install** and enter: `{package}`

For manual installation:

```bash
npm install {package}
```

## Development

```bash
git clone {repository}
cd {package}
npm install
npm run build
```

## Usage

This node provides the following operations:

{usage}
## Credentials

{credentials}

## License

{license}

## Author

{author}
"#,
        description = config.description,
        repository = metadata.repository,
        license = metadata.license,
        author = metadata.author,
    );
    debug!(package = %package, "Generated README");
    readme
}

fn resource_section(resource: &Resource) -> String {
    let operations = resource
        .operations
        .iter()
        .map(|op| format!("- **{}**: {}", op.name, op.description))
        .join("\n");
    format!(
        "### {}\n{}\n\n**Operations:**\n{}\n",
        resource.name, resource.description, operations
    )
}
