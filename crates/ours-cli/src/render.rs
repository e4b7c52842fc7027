//! Template rendering of a parsed timetable.
//!
//! Each slot is rendered through the slot template and the results are
//! concatenated per day. The page template then receives the five day
//! fragments and the stylesheet as partials named `monday`..`friday` and `css`.
//! Partial contents are inserted verbatim, never parsed as template code.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use handlebars::{Handlebars, TemplateError};
use thiserror::Error;

use ours_core::{SlotView, Timetable, Weekday};

/// Partial name under which the stylesheet is exposed to the page template.
pub const CSS_PARTIAL: &str = "css";

const SLOT_TEMPLATE: &str = "slot";
const BASE_TEMPLATE: &str = "base";

/// Named fragments supplied to the page template.
pub type Partials = BTreeMap<&'static str, String>;

/// Errors raised while loading or rendering templates.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to load template {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    #[error("invalid partial `{name}`: {source}")]
    Partial {
        name: &'static str,
        #[source]
        source: TemplateError,
    },

    #[error("failed to render {template} template: {source}")]
    Render {
        template: &'static str,
        #[source]
        source: handlebars::RenderError,
    },

    #[error("failed to read stylesheet {}: {source}", path.display())]
    Stylesheet {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The rendering capability the timetable page is built with.
pub trait TemplateEngine {
    /// Renders one slot record.
    fn render_slot(&self, slot: &SlotView<'_>) -> Result<String, RenderError>;

    /// Renders the page template with the given named partials.
    fn render_page(&mut self, partials: &Partials) -> Result<String, RenderError>;
}

/// [`TemplateEngine`] backed by Handlebars, loading both templates from disk.
#[derive(Debug)]
pub struct HandlebarsEngine {
    registry: Handlebars<'static>,
}

impl HandlebarsEngine {
    pub fn from_files(slot_template: &Path, base_template: &Path) -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(mustache_escape);
        for (name, path) in [(SLOT_TEMPLATE, slot_template), (BASE_TEMPLATE, base_template)] {
            registry
                .register_template_file(name, path)
                .map_err(|source| RenderError::Template {
                    path: path.to_path_buf(),
                    source,
                })?;
            tracing::debug!(name, path = %path.display(), "loaded template");
        }
        Ok(Self { registry })
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn render_slot(&self, slot: &SlotView<'_>) -> Result<String, RenderError> {
        self.registry
            .render(SLOT_TEMPLATE, slot)
            .map_err(|source| RenderError::Render {
                template: SLOT_TEMPLATE,
                source,
            })
    }

    fn render_page(&mut self, partials: &Partials) -> Result<String, RenderError> {
        // Each partial only dereferences its fragment from the render data.
        for &name in partials.keys() {
            self.registry
                .register_partial(name, format!("{{{{{{@root.partials.{name}}}}}}}"))
                .map_err(|source| RenderError::Partial { name, source })?;
        }
        self.registry
            .render(BASE_TEMPLATE, &serde_json::json!({ "partials": partials }))
            .map_err(|source| RenderError::Render {
                template: BASE_TEMPLATE,
                source,
            })
    }
}

/// HTML escaping as done by mustache: `&`, `<`, `>`, `"` and `'` only.
fn mustache_escape(data: &str) -> String {
    let mut escaped = String::with_capacity(data.len());
    for c in data.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Reads the stylesheet that is injected verbatim into the page.
pub fn load_stylesheet(path: &Path) -> Result<String, RenderError> {
    std::fs::read_to_string(path).map_err(|source| RenderError::Stylesheet {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders every slot into its day bucket, then the page around them.
pub fn render_timetable<E: TemplateEngine>(
    engine: &mut E,
    timetable: &Timetable,
    stylesheet: String,
) -> Result<String, RenderError> {
    let mut partials = Partials::new();

    for (day, slots) in Weekday::ALL.into_iter().zip(timetable.by_day()) {
        let mut fragment = String::new();
        for &(activity, slot) in &slots {
            fragment.push_str(&engine.render_slot(&SlotView::new(activity, slot))?);
        }
        tracing::debug!(%day, slots = slots.len(), "rendered day");
        partials.insert(day.as_str(), fragment);
    }
    partials.insert(CSS_PARTIAL, stylesheet);

    engine.render_page(&partials)
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    const SOURCE: &str = "/* ours@2.0 */
# first semester
MATH@GREEN@Maths
RD@#101010#efefef@R&D
MATH:book:Room 1:MON:0800:0930
RD::Lab:WED:1000:1100
MATH:book:Room 2:03:1400:1500
";

    /// Records what it was asked to render.
    #[derive(Default)]
    struct FakeEngine {
        pages: Vec<Partials>,
    }

    impl TemplateEngine for FakeEngine {
        fn render_slot(&self, slot: &SlotView<'_>) -> Result<String, RenderError> {
            Ok(format!("[{} {}]", slot.activity_id, slot.start_printable))
        }

        fn render_page(&mut self, partials: &Partials) -> Result<String, RenderError> {
            self.pages.push(partials.clone());
            Ok(String::from("page"))
        }
    }

    fn write_templates(dir: &Path) {
        std::fs::write(
            dir.join("slot.mustache"),
            r#"<li style="{{styles}}">{{activity_name}} {{start_printable}}-{{end_printable}} {{location}}</li>"#,
        )
        .unwrap();
        std::fs::write(
            dir.join("base.mustache"),
            "<style>{{> css}}</style><ol>{{> monday}}</ol><ol>{{> tuesday}}</ol><ol>{{> wednesday}}</ol><ol>{{> thursday}}</ol><ol>{{> friday}}</ol>",
        )
        .unwrap();
    }

    #[test]
    fn slots_are_grouped_into_day_partials() {
        let timetable = ours_core::parse(SOURCE).unwrap();
        let mut engine = FakeEngine::default();

        let page = render_timetable(&mut engine, &timetable, "body{}".to_string()).unwrap();
        assert_eq!(page, "page");

        let partials = &engine.pages[0];
        assert_eq!(partials["monday"], "[MATH 08:00]");
        assert_eq!(partials["tuesday"], "");
        assert_eq!(partials["wednesday"], "[MATH 14:00][RD 10:00]");
        assert_eq!(partials["thursday"], "");
        assert_eq!(partials["friday"], "");
        assert_eq!(partials[CSS_PARTIAL], "body{}");
        assert_eq!(partials.len(), 6);
    }

    #[test]
    fn handlebars_renders_page() {
        let temp = tempfile::tempdir().unwrap();
        write_templates(temp.path());
        let timetable = ours_core::parse(SOURCE).unwrap();

        let mut engine = HandlebarsEngine::from_files(
            &temp.path().join("slot.mustache"),
            &temp.path().join("base.mustache"),
        )
        .unwrap();
        let page = render_timetable(&mut engine, &timetable, "li { margin: 0; }".to_string())
            .unwrap();

        assert_snapshot!(page, @r#"<style>li { margin: 0; }</style><ol><li style="height: 9.0vh; top: 0.0vh; background-color: #2ecc71; color: #fefefe;">Maths 08:00-09:30 Room 1</li></ol><ol></ol><ol><li style="height: 6.0vh; top: 36.0vh; background-color: #2ecc71; color: #fefefe;">Maths 14:00-15:00 Room 2</li><li style="height: 6.0vh; top: 12.0vh; background-color: #101010; color: #efefef;">R&amp;D 10:00-11:00 Lab</li></ol><ol></ol><ol></ol>"#);
    }

    fn engine_with(dir: &Path, slot: &str, base: &str) -> HandlebarsEngine {
        std::fs::write(dir.join("slot.mustache"), slot).unwrap();
        std::fs::write(dir.join("base.mustache"), base).unwrap();
        HandlebarsEngine::from_files(&dir.join("slot.mustache"), &dir.join("base.mustache"))
            .unwrap()
    }

    #[test]
    fn braces_in_names_and_stylesheet_are_kept_verbatim() {
        let temp = tempfile::tempdir().unwrap();
        let mut engine = engine_with(
            temp.path(),
            "<b>{{activity_name}}</b>",
            "{{> monday}}|{{> tuesday}}|{{> css}}",
        );
        let timetable = ours_core::parse(
            "/* ours@2.0 */
A@GREEN@Open {{#if
B@RED@Set {{x}} theory
A:x:Room:MON:0900:1000
B:x:Room:TUE:0900:1000",
        )
        .unwrap();

        let page = render_timetable(
            &mut engine,
            &timetable,
            r#"a { content: "\{{" }"#.to_string(),
        )
        .unwrap();

        assert_eq!(
            page,
            r#"<b>Open {{#if</b>|<b>Set {{x}} theory</b>|a { content: "\{{" }"#
        );
    }

    #[test]
    fn escaping_matches_mustache() {
        let temp = tempfile::tempdir().unwrap();
        let mut engine = engine_with(temp.path(), "{{activity_name}}", "{{> friday}}");
        let timetable = ours_core::parse(
            "/* ours@2.0 */\nQ@BLUE@A = B & \"C\" <'D'>\nQ::Hall:FRI:1000:1100",
        )
        .unwrap();

        let page = render_timetable(&mut engine, &timetable, String::new()).unwrap();

        assert_snapshot!(page, @"A = B &amp; &#34;C&#34; &lt;&#39;D&#39;&gt;");
    }

    #[test]
    fn missing_template_reports_path() {
        let temp = tempfile::tempdir().unwrap();
        let slot = temp.path().join("slot.mustache");
        let err = HandlebarsEngine::from_files(&slot, &temp.path().join("base.mustache"))
            .unwrap_err();

        assert!(matches!(&err, RenderError::Template { path, .. } if *path == slot));
    }

    #[test]
    fn missing_stylesheet_errors() {
        let temp = tempfile::tempdir().unwrap();
        let err = load_stylesheet(&temp.path().join("stylus.css")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read stylesheet"));
    }
}
