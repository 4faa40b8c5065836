//! Render the catalog page.

use anyhow::{Context as _, Result};

use super::{load_storefront, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut storefront = load_storefront(&args.source, &args.controls, ctx).await?;
    if args.open_filters {
        storefront.panels_mut().open_filters();
    }

    let html = storefront.render_page();

    match &args.output {
        Some(path) => {
            let path = ctx.resolve_path(path);
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write page: {}", path.display()))?;

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "products": storefront.visible().len(),
                    "bytes": html.len(),
                }));
            } else {
                ctx.output.success(&format!(
                    "Rendered {} products to {}",
                    storefront.visible().len(),
                    path.display()
                ));
            }
        }
        None => print!("{}", html),
    }

    Ok(())
}
