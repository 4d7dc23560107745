//! Generated files bundled into every archive

use chrono::{SecondsFormat, Utc};

use crate::config::defaults::{SASS_INCLUDE_PATHS, STANDALONE_PORT};
use crate::config::packages::{COMMUNITY_DOCK_MANAGER, PREMIUM_DOCK_MANAGER};
use crate::core::edition::Edition;

/// Vite config that builds the project outside the monorepo
pub fn standalone_vite_config() -> String {
    let include_paths = serde_json::to_string(SASS_INCLUDE_PATHS).unwrap_or_else(|_| "[]".into());

    format!(
        r"import {{ defineConfig }} from 'vite';

export default defineConfig({{
    base: './',
    resolve: {{
        alias: {{
            'igniteui-theming': new URL('./node_modules/igniteui-theming', import.meta.url).pathname,
        }},
    }},
    css: {{
        preprocessorOptions: {{
            scss: {{
                includePaths: {include_paths}
            }}
        }}
    }},
    server: {{
        port: {STANDALONE_PORT},
        host: true,
        watch: {{
            usePolling: true
        }}
    }},
    build: {{
        rollupOptions: {{
            output: {{
                assetFileNames: 'assets/[name]-[hash][extname]',
                chunkFileNames: 'assets/[name]-[hash].js',
                entryFileNames: 'assets/[name]-[hash].js'
            }}
        }}
    }}
}});
"
    )
}

/// README placed at the archive root
pub fn readme(project: &str, edition: Edition, community_version: &str, premium_version: &str) -> String {
    let label = edition.label();

    let (package_line, stack_line, features) = match edition {
        Edition::Community => (
            format!("{COMMUNITY_DOCK_MANAGER} (Community) {community_version}"),
            "Ignite UI Dock Manager (Community Edition)",
            "## Community Version\nThis is the community version with basic dock manager functionality.\n",
        ),
        Edition::Premium => (
            format!("{PREMIUM_DOCK_MANAGER} (Premium) {premium_version}"),
            "Ignite UI Dock Manager (Premium Edition)",
            "## Premium Features\nIncludes access to all premium features of the Ignite UI Dock Manager.\n",
        ),
    };

    let generated = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    [
        format!("# {project} Project ({label} Version)"),
        String::new(),
        "This project was downloaded from the Dock Manager Demos.".into(),
        String::new(),
        "## Version Information".into(),
        format!("- Version: {label}"),
        format!("- Dock Manager Package: {package_line}"),
        String::new(),
        "## Getting Started".into(),
        String::new(),
        "1. Install dependencies:".into(),
        "```bash".into(),
        "npm install".into(),
        "```".into(),
        String::new(),
        "2. Run the development server:".into(),
        "```bash".into(),
        "npm run dev".into(),
        "```".into(),
        String::new(),
        format!("3. Open your browser to http://localhost:{STANDALONE_PORT}"),
        String::new(),
        "## Project Stack".into(),
        String::new(),
        "- TypeScript 5.x".into(),
        "- Lit 3.x".into(),
        "- Vite".into(),
        format!("- {stack_line}"),
        String::new(),
        features.into(),
        "## Support".into(),
        String::new(),
        "For questions or issues, please visit the Infragistics website.".into(),
        String::new(),
        "---".into(),
        format!("Generated on {generated}"),
        String::new(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vite_config_uses_fixed_port_and_include_paths() {
        let config = standalone_vite_config();
        assert!(config.starts_with("import { defineConfig } from 'vite';"));
        assert!(config.contains("port: 3000,"));
        assert!(config.contains(r#"includePaths: ["node_modules"]"#));
        assert!(config.ends_with("});\n"));
    }

    #[test]
    fn test_community_readme() {
        let readme = readme("stream-manager", Edition::Community, "^1.5.0", "^2.0.0");
        assert!(readme.starts_with("# stream-manager Project (COMMUNITY Version)"));
        assert!(readme.contains("- Dock Manager Package: igniteui-dockmanager (Community) ^1.5.0"));
        assert!(readme.contains("## Community Version"));
        assert!(!readme.contains("^2.0.0"));
    }

    #[test]
    fn test_premium_readme() {
        let readme = readme("demo", Edition::Premium, "^1.5.0", "^2.0.0");
        assert!(readme.contains("- Version: PREMIUM"));
        assert!(readme.contains(
            "- Dock Manager Package: @infragistics/igniteui-dockmanager (Premium) ^2.0.0"
        ));
        assert!(readme.contains("## Premium Features"));
        assert!(readme.contains("http://localhost:3000"));
    }

    #[test]
    fn test_readme_ends_with_timestamp() {
        let readme = readme("demo", Edition::Premium, "^1", "^2");
        let last = readme.lines().last().unwrap();
        assert!(last.starts_with("Generated on "));
        assert!(last.ends_with('Z'));
    }
}
