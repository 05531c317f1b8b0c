use axum::response::Html;

use super::util::html;

pub async fn get_root() -> Html<String> {
    let body = [
        html::heading("Dashboard", "Generate videos with your own API keys"),
        r#"<ul class="links">
    <li><a href="/video">Video Generation</a></li>
    <li><a href="/settings">Settings</a></li>
</ul>"#
            .to_string(),
    ]
    .concat();

    Html(html::layout("Dashboard", &body))
}
