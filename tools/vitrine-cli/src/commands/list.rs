//! List normalized products.

use anyhow::Result;
use vitrine_catalog::{Currency, Product};

use super::{load_storefront, ListArgs};
use crate::context::Context;

const WIDTHS: [usize; 7] = [6, 32, 14, 18, 12, 8, 6];

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let storefront = load_storefront(&args.source, &args.controls, ctx).await?;
    let visible = storefront.visible();
    let shown = &visible[..args.limit.unwrap_or(visible.len()).min(visible.len())];

    if ctx.output.is_json() {
        ctx.output.json(&shown);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} of {} products",
        shown.len(),
        storefront.catalog().len()
    ));
    ctx.output.table_row(
        &["ID", "TITLE", "PRICE", "STORE", "CATEGORY", "DISCOUNT", "STOCK"],
        &WIDTHS,
    );
    for product in shown {
        let cols = row(product, storefront.currency());
        let cols: Vec<&str> = cols.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &WIDTHS);
    }

    Ok(())
}

fn row(product: &Product, currency: Currency) -> [String; 7] {
    let discount = if product.has_discount() {
        format!("-{}%", product.discount)
    } else {
        String::new()
    };
    // Unpurchasable rows show a dash, matching the card's "Indisponível".
    let stock = if product.is_purchasable() {
        product.stock.to_string()
    } else {
        "-".to_string()
    };
    [
        product.id.to_string(),
        product.title.clone(),
        currency.format(product.price),
        product.store.clone(),
        product.category.clone(),
        discount,
        stock,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_columns() {
        let p = Product::new(7, "Cafeteira", 120.0)
            .with_store("Acme")
            .with_category("Cozinha")
            .with_discount(10)
            .with_stock(3);
        assert_eq!(
            row(&p, Currency::BRL),
            [
                "7".to_string(),
                "Cafeteira".to_string(),
                "R$ 120.00".to_string(),
                "Acme".to_string(),
                "cozinha".to_string(),
                "-10%".to_string(),
                "3".to_string(),
            ]
        );
    }
}
