use maud::{html, Markup, DOCTYPE};

pub fn home_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "nitro" }
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico/css/pico.min.css";
            }
            body {
                main class="container" {
                    h1 { "Server is running" }
                    p { "Rendered by the nitro runtime." }
                    ul {
                        li { a href="/api/health" { "Health check (JSON)" } }
                    }
                }
            }
        }
    }
}
