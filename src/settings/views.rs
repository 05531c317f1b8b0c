use validator::ValidationErrors;

use crate::app::util::html::{self, html_escape};

use super::{enums::api_key_name::ApiKeyName, models::settings_status::SettingsStatus};

struct KeyField {
    name: &'static str,
    label: &'static str,
    link: &'static str,
    link_text: &'static str,
    provider: &'static str,
}

const KEY_FIELDS: [KeyField; 2] = [
    KeyField {
        name: ApiKeyName::OPENAI,
        label: "OPENAI API",
        link: "https://platform.openai.com/api-keys",
        link_text: "account/api-keys",
        provider: "openai",
    },
    KeyField {
        name: ApiKeyName::REPLICATE,
        label: "REPLICATE API",
        link: "https://replicate.com/account/api-tokens",
        link_text: "account/api-tokens",
        provider: "github",
    },
];

/// Renders the settings form. Inputs are always empty; stored values never
/// reach the page.
pub fn render_settings_page(
    status: &SettingsStatus,
    errors: Option<&ValidationErrors>,
    notice: Option<&str>,
) -> String {
    let fields: String = KEY_FIELDS
        .iter()
        .map(|field| {
            let stored = match field.name {
                ApiKeyName::OPENAI => status.openapi,
                _ => status.replicateapi,
            };

            render_key_field(field, stored, field_error(errors, field.name))
        })
        .collect();

    let notice = match notice {
        Some(notice) => format!(r#"<p class="notice">{}</p>"#, html_escape(notice)),
        None => String::new(),
    };

    let body = format!(
        r#"{heading}
{notice}
<form method="post" action="/settings" autocomplete="off">
{fields}
    <button type="submit">Save Settings</button>
</form>
<form method="post" action="/settings/delete">
    <button type="submit">Delete Keys</button>
</form>"#,
        heading = html::heading("Settings", "Manage your API keys"),
    );

    html::layout("Settings", &body)
}

fn render_key_field(field: &KeyField, stored: bool, error: Option<String>) -> String {
    let badge = match stored {
        true => r#"<span class="badge stored">stored</span>"#,
        false => r#"<span class="badge">not set</span>"#,
    };

    let error = match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, html_escape(&message)),
        None => String::new(),
    };

    format!(
        r#"    <div class="field">
        <label for="{name}">{label}</label> {badge}
        <input id="{name}" name="{name}" type="password" value="">
        <p class="description">
            Open this <a href="{link}">{link_text}</a> and sign in with your {provider} account to get the API key.
            This key is <b>only stored locally in your device</b>.<br>
            We recommend to <b>delete</b> your key after using this website.
        </p>
        {error}
    </div>
"#,
        name = field.name,
        label = field.label,
        link = field.link,
        link_text = field.link_text,
        provider = field.provider,
    )
}

fn field_error(errors: Option<&ValidationErrors>, name: &str) -> Option<String> {
    let field_errors = errors?.field_errors();
    let error = field_errors.get(name)?.first()?;

    Some(match &error.message {
        Some(message) => message.to_string(),
        None => format!("{} is invalid.", name),
    })
}
