use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use jsift_metadata::MetadataLoader;
use jsift_template::ClassPattern;

mod render;

#[derive(Parser)]
#[command(
    name = "jsift",
    version,
    about = "Structural search over JVM type metadata dumps"
)]
struct Cli {
    /// Class template, e.g. '* : java.io.Closeable { close(); }'
    template: String,

    /// Metadata dump file or directory (repeatable)
    #[arg(long = "metadata", short = 'm', required = true)]
    metadata: Vec<PathBuf>,

    /// Print scan statistics after the matches
    #[arg(long, short = 's')]
    show_statistics: bool,

    /// Emit JSON suitable for CI
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonMatch<'a> {
    class: &'a str,
    methods: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    classes_matched: usize,
    methods_matched: usize,
    failed_sources: Vec<String>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut loader = MetadataLoader::new();
    for path in &cli.metadata {
        loader.load_path(path);
    }
    tracing::debug!(records = loader.record_count(), "metadata loaded");
    let (store, failures) = loader.finish();

    let pattern = ClassPattern::compile(&cli.template, &store)
        .with_context(|| format!("failed to compile template {:?}", cli.template))?;

    let mut classes_matched = 0usize;
    let mut methods_matched = 0usize;
    for (class_id, stub) in store.classes() {
        // Interface and synthetic types never reach the matcher.
        if stub.is_interface() || stub.is_synthetic() {
            continue;
        }
        let Some(result) = pattern.match_class(&store, class_id) else {
            continue;
        };
        classes_matched += 1;
        methods_matched += result.method_count();
        if cli.json {
            let json = JsonMatch {
                class: &stub.name,
                methods: result
                    .bound_methods()
                    .iter()
                    .map(|&idx| render::method_signature(&store, &stub.methods[idx]))
                    .collect(),
            };
            println!("{}", serde_json::to_string(&json)?);
        } else {
            print!("{}", render::match_block(&store, stub, &result));
        }
    }

    if cli.show_statistics {
        if cli.json {
            let summary = JsonSummary {
                classes_matched,
                methods_matched,
                failed_sources: failures
                    .iter()
                    .map(|f| f.path.display().to_string())
                    .collect(),
            };
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!();
            println!("============= statistics =============");
            println!("classes count: {classes_matched}");
            println!("methods count: {methods_matched}");
            println!("sources that failed to load:");
            for failure in &failures {
                println!("{}: {}", failure.path.display(), failure.error);
            }
        }
    }

    Ok(())
}
