//! Static page handlers
//!
//! The pages are compiled into the binary; no template engine or asset
//! directory is needed at runtime.

use axum::response::Html;

/// Landing page
pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

/// Notes-conversion page (audio upload form)
pub async fn convert_notes() -> Html<&'static str> {
    Html(include_str!("../../templates/convert_notes.html"))
}

/// Output-selection page (artifact type picker)
pub async fn output_selection() -> Html<&'static str> {
    Html(include_str!("../../templates/output_selection.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pages_embed_markup() {
        let Html(home_page) = home().await;
        assert!(home_page.contains("<html"));

        let Html(notes_page) = convert_notes().await;
        assert!(notes_page.contains("audio"));

        let Html(selection_page) = output_selection().await;
        assert!(selection_page.contains("flashcards"));
    }
}
