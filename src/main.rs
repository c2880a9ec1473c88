use anyhow::Context;
use clap::Parser;

use synapse_landing::{render_page, snapshot, PageContent};

/// Render the landing page layout at a viewport width and print the result.
#[derive(Parser, Debug)]
#[command(name = "synapse-landing", version, about)]
struct Args {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Print the rendered tree as JSON instead of a text snapshot
    #[arg(long)]
    json: bool,

    /// Print only the sha256 digest of the text snapshot
    #[arg(long)]
    digest: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let content = PageContent::default();
    let page = render_page(args.width, &content)
        .with_context(|| format!("rendering at width {}", args.width))?;

    if args.digest {
        println!("{}", snapshot::digest(&page));
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print!("{}", snapshot::text_snapshot(&page).text);
    }
    Ok(())
}
