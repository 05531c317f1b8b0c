use crate::app::util::html::{self, html_escape};

const LOADING_SCRIPT: &str = r#"<script>
document.getElementById("video-form").addEventListener("submit", function () {
    this.querySelector("input").readOnly = true;
    this.querySelector("button").disabled = true;
    document.getElementById("loader").hidden = false;
    document.getElementById("result").hidden = true;
});
</script>"#;

/// Renders the prompt form, always reset, above either the generated video
/// or the empty state.
pub fn render_video_page(video: Option<&str>) -> String {
    let result = match video {
        Some(url) => format!(
            r#"<video controls>
    <source src="{}">
</video>"#,
            html_escape(url)
        ),
        None => html::empty("No Video Generated"),
    };

    let body = format!(
        r#"{heading}
<form id="video-form" method="post" action="/video" autocomplete="off">
    <input name="prompt" value="" placeholder="An astronaut riding a horse" required maxlength="1000">
    <button type="submit">Generate</button>
</form>
<div id="loader" class="loader" hidden>Generating...</div>
<div id="result">
{result}
</div>
{LOADING_SCRIPT}"#,
        heading = html::heading("Video Generation", "Transform your prompt into video"),
    );

    html::layout("Video Generation", &body)
}
