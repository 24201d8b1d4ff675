//! Reader pages
//!
//! Server-rendered HTML for the reader: a sidebar listing every summary date and a
//! main pane holding the selected summary. Each pane renders its own loading result,
//! so a failed fetch only degrades the pane that asked for it.

use crate::client::{SummaryDetail, SummaryReference};
use crate::error::ReaderError;
use crate::render::{escape_text, format_display_date, render_markdown};

pub const SITE_TITLE: &str = "tl;dr news";

/// Long-form label for a date, or the raw string if it does not parse
pub fn display_date(date: &str) -> String {
    format_display_date(date).unwrap_or_else(|_| date.to_string())
}

/// Link target of a summary page
pub fn summary_href(date: &str) -> String {
    format!("/news/{}", urlencoding::encode(date))
}

/// Sidebar listing every summary, highlighting `selected`
pub fn render_sidebar(
    summaries: &Result<Vec<SummaryReference>, ReaderError>,
    selected: Option<&str>,
) -> String {
    let mut buf = String::new();
    buf.push_str("<nav class=\"sidebar\">\n");
    buf.push_str(&format!("<h2>{}</h2>\n", escape_text(SITE_TITLE)));

    match summaries {
        Err(_) => {
            buf.push_str("<p class=\"alert error\">Failed to load summaries</p>\n");
        }
        Ok(summaries) if summaries.is_empty() => {
            buf.push_str("<p class=\"empty\">No summaries yet.</p>\n");
        }
        Ok(summaries) => {
            buf.push_str("<ul>\n");
            for summary in summaries {
                let class = if selected == Some(summary.date.as_str()) {
                    " class=\"selected\""
                } else {
                    ""
                };
                buf.push_str(&format!(
                    "<li{}><a href=\"{}\">{}</a></li>\n",
                    class,
                    summary_href(&summary.date),
                    escape_text(&display_date(&summary.date))
                ));
            }
            buf.push_str("</ul>\n");
        }
    }

    buf.push_str("</nav>\n");
    buf
}

/// Main pane for one date
pub fn render_summary(date: &str, detail: &Result<SummaryDetail, ReaderError>) -> String {
    let mut buf = String::new();
    buf.push_str(&format!(
        "<h1>tl;dr on {}</h1>\n",
        escape_text(&display_date(date))
    ));

    match detail {
        Ok(detail) => {
            buf.push_str("<article class=\"summary\">\n");
            buf.push_str(&render_markdown(&detail.content));
            buf.push_str("</article>\n");
        }
        Err(_) => {
            buf.push_str("<p class=\"alert error\">Failed to load content</p>\n");
        }
    }

    buf
}

/// Main pane when no date is selected
pub fn render_welcome() -> String {
    "<h1>tl;dr news</h1>\n<p>Pick a day from the list to read its summary.</p>\n".to_string()
}

/// Full HTML document around a sidebar and a main pane
pub fn render_page(title: &str, sidebar: &str, main: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>{style}</style>\n\
         </head>\n\
         <body>\n\
         <div class=\"layout\">\n\
         {sidebar}\
         <main>\n\
         {main}\
         <footer>Made with <span role=\"img\" aria-label=\"heart\">💚</span> by \
         <a href=\"https://solanyn.dev\" target=\"_blank\" rel=\"noopener noreferrer\">solanyn.dev</a></footer>\n\
         </main>\n\
         </div>\n\
         </body>\n\
         </html>\n",
        title = escape_text(title),
        style = STYLE,
        sidebar = sidebar,
        main = main,
    )
}

const STYLE: &str = "body{margin:0;font-family:system-ui,sans-serif}\
.layout{display:flex;min-height:100vh}\
.sidebar{width:240px;flex-shrink:0;padding:16px;border-right:1px solid #ddd;overflow:auto}\
.sidebar ul{list-style:none;padding:0}\
.sidebar li a{display:block;padding:6px 8px;color:inherit;text-decoration:none;border-radius:4px}\
.sidebar li.selected a{background:#e8f0fe}\
main{flex-grow:1;padding:24px;display:flex;flex-direction:column}\
.summary{flex:1}\
.alert.error{color:#b00020;background:#fdecea;padding:8px 12px;border-radius:4px}\
footer{margin-top:32px;text-align:center;color:#666;font-size:0.875rem}";
