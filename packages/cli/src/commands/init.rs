use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde_json::json;
use sitecraft_editor::{EditorConfig, InsidePlacement};
use sitecraft_tree::ComponentNode;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where `inside` drops land (append, prepend)
    #[arg(short, long, default_value = "append")]
    pub placement: String,

    /// Drop threshold fraction
    #[arg(short, long, default_value = "0.25")]
    pub threshold: f64,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Sitecraft project...".bright_blue().bold());

    let inside_placement = match args.placement.as_str() {
        "append" => InsidePlacement::Append,
        "prepend" => InsidePlacement::Prepend,
        other => {
            return Err(anyhow::anyhow!(
                "Invalid placement: {}. Use: append or prepend",
                other
            ));
        }
    };

    let config = Config {
        editor: EditorConfig {
            drop_threshold: args.threshold,
            inside_placement,
        },
        ..Config::default()
    };
    config.editor.validate()?;

    // Create example page
    let example_file = PathBuf::from(cwd).join("page.json");
    if !example_file.exists() {
        let page = ComponentNode::new("root", "page")
            .with_child(
                ComponentNode::new("section1", "section")
                    .with_child(ComponentNode::new("text1", "text").with_prop("content", json!("Welcome")))
                    .with_child(ComponentNode::new("button1", "button").with_prop("label", json!("Get started"))),
            )
            .with_child(
                ComponentNode::new("section2", "section")
                    .with_child(ComponentNode::new("text2", "text").with_prop("content", json!("Features"))),
            );
        fs::write(&example_file, serde_json::to_string_pretty(&page)?)?;
        println!("  {} Created page.json", "✓".green());
    }

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: sitecraft flatten page.json");
    println!("  2. Run: sitecraft move page.json --source text1 --target section2");

    Ok(())
}
