//! Static site generator.
//!
//! Pure and deterministic: the same description yields the same files, apart
//! from the year printed in the footer and readme. Field values are
//! interpolated as given; callers validate them first.

mod templates;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::BuilderError;

pub const MARKUP_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "styles.css";
pub const SCRIPT_FILE: &str = "script.js";
pub const README_FILE: &str = "README.md";

pub const FILE_NAMES: [&str; 4] = [MARKUP_FILE, STYLESHEET_FILE, SCRIPT_FILE, README_FILE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Ecommerce,
    Portfolio,
    Landing,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Business,
        Category::Ecommerce,
        Category::Portfolio,
        Category::Landing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Ecommerce => "ecommerce",
            Category::Portfolio => "portfolio",
            Category::Landing => "landing",
        }
    }

    /// Human-readable label used in the generated readme
    pub fn label(&self) -> &'static str {
        match self {
            Category::Business => "موقع شركة",
            Category::Ecommerce => "متجر إلكتروني",
            Category::Portfolio => "معرض أعمال",
            Category::Landing => "صفحة هبوط",
        }
    }

    fn sections(&self) -> &'static str {
        match self {
            Category::Business => templates::BUSINESS_SECTIONS,
            Category::Ecommerce => templates::ECOMMERCE_SECTIONS,
            Category::Portfolio => templates::PORTFOLIO_SECTIONS,
            Category::Landing => templates::LANDING_SECTIONS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BuilderError::InvalidCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub description: String,
    pub primary_color: String,
    pub secondary_color: String,
}

/// Generate the four site files, stamping the current year.
pub fn generate_files(description: &ProjectDescription) -> BTreeMap<String, String> {
    generate_files_for_year(description, chrono::Utc::now().year())
}

pub fn generate_files_for_year(
    description: &ProjectDescription,
    year: i32,
) -> BTreeMap<String, String> {
    let year = year.to_string();
    let name = description.name.as_str();
    let text = description.description.as_str();
    let primary = description.primary_color.as_str();
    let secondary = description.secondary_color.as_str();

    let sections = render(
        description.category.sections(),
        &[("name", name), ("description", text)],
    );
    let markup = render(
        templates::PAGE,
        &[
            ("name", name),
            ("description", text),
            ("sections", &sections),
            ("year", &year),
        ],
    );
    let stylesheet = render(
        templates::STYLESHEET,
        &[("name", name), ("primary", primary), ("secondary", secondary)],
    );
    let script = render(templates::SCRIPT, &[("name", name)]);
    let readme = render(
        templates::README,
        &[
            ("name", name),
            ("category", description.category.label()),
            ("description", text),
            ("primary", primary),
            ("secondary", secondary),
            ("year", &year),
        ],
    );

    tracing::debug!(
        category = description.category.as_str(),
        markup_bytes = markup.len(),
        "site files generated"
    );

    BTreeMap::from([
        (MARKUP_FILE.to_string(), markup),
        (STYLESHEET_FILE.to_string(), stylesheet),
        (SCRIPT_FILE.to_string(), script),
        (README_FILE.to_string(), readme),
    ])
}

/// Single-pass `{{key}}` substitution. Substituted values are never rescanned,
/// and unknown tokens are left as they are.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description(category: Category) -> ProjectDescription {
        ProjectDescription {
            name: "Acme".into(),
            category,
            description: "We build rockets".into(),
            primary_color: "#6366f1".into(),
            secondary_color: "#ec4899".into(),
        }
    }

    #[test]
    fn test_emits_exactly_four_files() {
        let files = generate_files(&description(Category::Business));
        let names: Vec<&str> = files.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["README.md", "index.html", "script.js", "styles.css"]);
    }

    #[test]
    fn test_markup_per_category() {
        let cases = [
            (Category::Business, "مرحباً بكم في Acme", "services"),
            (Category::Ecommerce, "متجر Acme", "product-card"),
            (Category::Portfolio, "استعرض أعمالي", "skills-list"),
            (Category::Landing, "signup-form", "features"),
        ];
        for (category, marker_a, marker_b) in cases {
            let files = generate_files(&description(category));
            let html = &files[MARKUP_FILE];
            assert!(html.contains(marker_a), "{category}: missing {marker_a}");
            assert!(html.contains(marker_b), "{category}: missing {marker_b}");
            assert!(html.contains("contact-form"));
            assert!(html.contains("<title>Acme</title>"));
            assert!(html.contains("We build rockets"));
            assert!(!html.contains("{{"));
        }
    }

    #[test]
    fn test_stylesheet_uses_colors() {
        let files = generate_files(&description(Category::Landing));
        let css = &files[STYLESHEET_FILE];
        assert!(css.contains("--primary: #6366f1;"));
        assert!(css.contains("--secondary: #ec4899;"));
        assert!(css.contains("--text: #1a1a2e;"));
    }

    #[test]
    fn test_script_behaviors() {
        let files = generate_files(&description(Category::Portfolio));
        let js = &files[SCRIPT_FILE];
        assert!(js.contains("scrollIntoView({ behavior: 'smooth' })"));
        assert!(js.contains("e.preventDefault();"));
        assert!(js.contains("IntersectionObserver"));
        assert!(js.starts_with("// ========================================\n// Acme - Generated by Ntfly"));
    }

    #[test]
    fn test_readme_summary() {
        let files = generate_files_for_year(&description(Category::Ecommerce), 2031);
        let readme = &files[README_FILE];
        assert!(readme.starts_with("# Acme\n"));
        assert!(readme.contains("متجر إلكتروني"));
        assert!(readme.contains("#6366f1"));
        assert!(readme.contains("#ec4899"));
        assert!(readme.contains("© 2031 Ntfly Digital"));
    }

    #[test]
    fn test_deterministic_for_same_year() {
        let d = description(Category::Business);
        assert_eq!(generate_files_for_year(&d, 2030), generate_files_for_year(&d, 2030));

        let a = generate_files_for_year(&d, 2030);
        let b = generate_files_for_year(&d, 2031);
        assert_eq!(a[STYLESHEET_FILE], b[STYLESHEET_FILE]);
        assert_eq!(a[SCRIPT_FILE], b[SCRIPT_FILE]);
        assert_ne!(a[MARKUP_FILE], b[MARKUP_FILE]);
    }

    #[test]
    fn test_values_are_interpolated_verbatim() {
        let mut d = description(Category::Business);
        d.name = "{{year}} & <Co>".into();
        let files = generate_files_for_year(&d, 2030);
        let html = &files[MARKUP_FILE];
        assert!(html.contains("<title>{{year}} & <Co></title>"));
    }

    #[test]
    fn test_render() {
        assert_eq!(render("a {{x}} b {{y}}", &[("x", "1")]), "a 1 b {{y}}");
        assert_eq!(render("open {{x", &[("x", "1")]), "open {{x");
        assert_eq!(render("{{x}}{{x}}", &[("x", "{{x}}")]), "{{x}}{{x}}");
    }

    #[test]
    fn test_description_json_uses_type_key() {
        let json = serde_json::to_value(description(Category::Landing)).unwrap();
        assert_eq!(json["type"], "landing");
        assert_eq!(json["primaryColor"], "#6366f1");
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("Portfolio".parse::<Category>().unwrap(), Category::Portfolio);
        assert!("blog".parse::<Category>().is_err());
    }
}
