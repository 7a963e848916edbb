//! Page bodies. Each renderer returns the HTML that goes inside the site
//! shell built by `render::render_page`.

pub mod detail;
pub mod home;
pub mod media;

pub use detail::render_detail;
pub use home::render_home;

use crate::render::html_escape;

fn render_badges(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<div class="badges">"#);
    for tag in tags {
        html.push_str(&format!(r#"<span class="badge">{}</span>"#, html_escape(tag)));
    }
    html.push_str("</div>");
    html
}
