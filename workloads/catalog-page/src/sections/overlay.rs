//! Loading overlay.

/// Render the loading overlay; `active` shows it.
pub fn render_loading_overlay(active: bool) -> String {
    format!(
        r#"<div id="loading-overlay" class="loading-overlay{}" aria-hidden="{}">
    <div class="spinner"></div>
</div>"#,
        if active { " active" } else { "" },
        !active
    )
}
