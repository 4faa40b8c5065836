//! Header section - navigation, search input and sort select.

use vitrine_catalog::SortOption;

use super::html_escape;
use crate::panels::PanelState;

/// Render the site header with the hamburger navigation.
pub fn render_site_header(panels: &PanelState) -> String {
    let nav_class = if panels.nav_open { "nav-links active" } else { "nav-links" };
    let nav_display = if panels.nav_open { "flex" } else { "none" };
    let toggle_class = if panels.nav_open {
        "hamburger active"
    } else {
        "hamburger"
    };

    format!(
        r#"<header class="site-header">
    <a href="/" class="logo">Vitrine</a>
    <button id="hamburger-Toggle" class="{toggle_class}" aria-label="Menu" aria-controls="nav-links" aria-expanded="{expanded}">
        <span></span><span></span><span></span>
    </button>
    <nav id="nav-links" class="{nav_class}" style="display: {nav_display}">
        <a href="/">Início</a>
        <a href="/#ofertas">Ofertas</a>
        <a href="/#contato">Contato</a>
    </nav>
</header>"#,
        expanded = panels.nav_aria_expanded(),
    )
}

/// Render the toolbar above the grid: search, sort and the mobile filter toggle.
pub fn render_toolbar(search: &str, sort: SortOption, result_count: usize) -> String {
    let sort_html: String = SortOption::ALL
        .iter()
        .map(|opt| {
            let selected = if *opt == sort { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                opt.as_str(),
                selected,
                opt.display_name()
            )
        })
        .collect();

    let result_text = if result_count == 1 {
        "1 produto".to_string()
    } else {
        format!("{} produtos", result_count)
    };

    format!(
        r#"<section class="catalog-toolbar">
    <div class="search-box">
        <i class="fas fa-search"></i>
        <input type="search" id="search" placeholder="Buscar produtos ou lojas..." value="{}" aria-label="Buscar">
    </div>
    <p class="result-count">{}</p>
    <div class="sort-control">
        <label for="sort-select">Ordenar por:</label>
        <select id="sort-select">
            {}
        </select>
    </div>
    <button id="filter-toggle" class="filter-toggle" aria-controls="filters-panel">
        <i class="fas fa-filter"></i> Filtros
    </button>
</section>"#,
        html_escape(search),
        result_text,
        sort_html
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_reflects_toggle() {
        let mut panels = PanelState::default();
        let closed = render_site_header(&panels);
        assert!(closed.contains(r#"aria-expanded="false""#));
        assert!(closed.contains("display: none"));

        panels.toggle_nav();
        let open = render_site_header(&panels);
        assert!(open.contains(r#"aria-expanded="true""#));
        assert!(open.contains("display: flex"));
        assert!(open.contains(r#"class="nav-links active""#));
    }

    #[test]
    fn test_sort_select_marks_current() {
        let html = render_toolbar("", SortOption::Discount, 3);
        assert!(html.contains(r#"<option value="discount" selected>"#));
        assert!(html.contains(r#"<option value="relevance">"#));
        assert!(html.contains("3 produtos"));
    }

    #[test]
    fn test_search_value_escaped() {
        let html = render_toolbar(r#""><b>"#, SortOption::Relevance, 1);
        assert!(html.contains("&quot;&gt;&lt;b&gt;"));
        assert!(html.contains("1 produto<"));
    }
}
