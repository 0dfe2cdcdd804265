use crate::responses::ErrorObject;
use maud::{html, PreEscaped, DOCTYPE};

/// Render the standalone HTML error page for an error object.
///
/// Pure function of its input. The 500 / "Request Error" fallbacks are
/// applied here and only here; the error object itself keeps whatever
/// the normalizer produced, so the JSON path is unaffected by them.
pub fn render_html_error(error: &ErrorObject) -> String {
    let status_code = if error.status_code == 0 { 500 } else { error.status_code };
    let status_message = match error.status_message.as_deref() {
        Some(msg) if !msg.is_empty() => msg,
        _ => "Request Error",
    };
    let stack = error.stack.as_deref().unwrap_or_default();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (status_code) " " (status_message) }
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico/css/pico.min.css";
            }
            body {
                main class="container" {
                    dialog open {
                        article {
                            header {
                                h2 { (status_code) " " (status_message) }
                            }
                            code {
                                (error.message) br; br;
                                // An absent stack still leaves the leading
                                // newline; no placeholder is rendered.
                                "\n"
                                @for (i, line) in stack.iter().enumerate() {
                                    @if i > 0 { br; }
                                    (PreEscaped("&nbsp;&nbsp;")) (line)
                                }
                            }
                            footer {
                                a href="/" onclick="event.preventDefault();history.back();" { "Go Back" }
                            }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}
