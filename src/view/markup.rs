//! HTML rendering of view-models.
//!
//! Produces the same structure the static site uses for its project cards
//! and modal body, with all text escaped. Useful for exporting the gallery
//! and for snapshot tests that need no live UI.

use std::fmt::Write;

use super::{CardView, KpiChip, ModalView};

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn push_kpis(out: &mut String, kpis: &[KpiChip]) {
    for kpi in kpis {
        let _ = write!(
            out,
            r#"<div class="kpi-chip"><span>{}</span>{}</div>"#,
            escape_html(&kpi.value),
            escape_html(&kpi.label)
        );
    }
}

fn push_tags(out: &mut String, tags: &[String]) {
    for tag in tags {
        let _ = write!(out, "<span>{}</span>", escape_html(tag));
    }
}

/// One `<article>` card.
pub fn render_card(card: &CardView) -> String {
    let mut out = String::new();
    out.push_str(r#"<article class="card project-card glass reveal">"#);
    let _ = write!(
        out,
        r#"<img class="project-image" src="{}" alt="{}" loading="lazy" />"#,
        escape_html(&card.image),
        escape_html(&card.title)
    );
    let _ = write!(
        out,
        r#"<div class="project-header"><h3>{}</h3><span class="tag">{}</span></div>"#,
        escape_html(&card.title),
        escape_html(&card.date)
    );
    let _ = write!(out, "<p>{}</p>", escape_html(&card.description));
    out.push_str(r#"<div class="kpi-row">"#);
    push_kpis(&mut out, &card.kpis);
    out.push_str("</div>");
    out.push_str(r#"<div class="tag-row">"#);
    push_tags(&mut out, &card.tags);
    out.push_str("</div>");
    let _ = write!(
        out,
        r#"<button class="btn btn-ghost" data-project="{}">View Details</button>"#,
        escape_html(&card.project_id)
    );
    out.push_str("</article>");
    out
}

/// Every card, concatenated in order, as the grid's inner markup.
pub fn render_gallery(cards: &[CardView]) -> String {
    cards.iter().map(render_card).collect()
}

/// Modal body with the named parts the site's overlay expects.
pub fn render_modal(view: &ModalView) -> String {
    let mut out = String::new();
    out.push_str(r#"<div class="modal-content">"#);
    let _ = write!(
        out,
        r#"<img id="modal-image" src="{}" alt="{}" />"#,
        escape_html(&view.image),
        escape_html(&view.image_alt)
    );
    let _ = write!(out, r#"<h3 id="modal-title">{}</h3>"#, escape_html(&view.title));
    let _ = write!(out, r#"<p id="modal-subtitle">{}</p>"#, escape_html(&view.subtitle));
    let _ = write!(
        out,
        r#"<p id="modal-description">{}</p>"#,
        escape_html(&view.description)
    );
    out.push_str(r#"<ul id="modal-highlights">"#);
    for item in &view.highlights {
        let _ = write!(out, "<li>{}</li>", escape_html(item));
    }
    out.push_str("</ul>");
    out.push_str(r#"<div id="modal-tags" class="tag-row">"#);
    push_tags(&mut out, &view.tags);
    out.push_str("</div>");
    out.push_str(r#"<div id="modal-kpis" class="kpi-row">"#);
    push_kpis(&mut out, &view.kpis);
    out.push_str("</div>");
    let _ = write!(
        out,
        r#"<a id="modal-link" href="{}" target="_blank" rel="noopener">Open Project</a>"#,
        escape_html(&view.link)
    );
    out.push_str(r#"<button class="modal-close" data-close>Close</button>"#);
    out.push_str("</div>");
    out
}
