use axum::response::Html;

use crate::api::ROUTES;

/// Lists every endpoint of the service
///
/// GET /
pub async fn sitemap() -> Html<String> {
    Html(render_sitemap(ROUTES))
}

/// Renders the route table as an HTML page
///
/// GET routes without path parameters become links.
pub fn render_sitemap(routes: &[(&str, &str)]) -> String {
    let items: String = routes
        .iter()
        .map(|(method, path)| {
            if *method == "GET" && !path.contains(':') {
                format!("<li>{} <a href=\"{}\">{}</a></li>", method, path, path)
            } else {
                format!("<li>{} {}</li>", method, path)
            }
        })
        .collect();

    format!(
        "<div style=\"text-align: center;\">\
         <h1>Star Wars Catalogue API</h1>\
         <p>Available endpoints:</p>\
         <ul style=\"text-align: left;\">{}</ul>\
         </div>",
        items
    )
}
