//! End-to-end tests: registry construction, resolution over a page
//! hierarchy, and the CSS and class output a host would inject.

use cssparser::{Parser, ParserInput, Token};
use page_style_inheritance::{
    class_name_for, css_for, current_value, load_style_dir, load_styles_file, resolve,
    resolve_with, selection_options, LoadError, MemoryPageStore, PageStyle, StyleDefinition,
    StyleMap, StyleRegistry, StyleRegistryBuilder, INHERIT,
};

/// Counts rule blocks at the top level of a stylesheet.
fn top_level_blocks(css: &str) -> usize {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut blocks = 0;
    while let Ok(token) = parser.next() {
        if matches!(token, Token::CurlyBracketBlock) {
            blocks += 1;
        }
    }
    blocks
}

fn dark_registry() -> StyleRegistry {
    let mut styles = StyleMap::new();
    styles.insert(INHERIT.into(), StyleDefinition::new("Inherit"));
    styles.insert(
        "dark".into(),
        StyleDefinition::new("Dark")
            .variable("--bg", "#000")
            .declare(".card", "color", "#fff"),
    );
    StyleRegistryBuilder::from_base(styles).build()
}

#[test]
fn test_child_inherits_parent_style() {
    let registry = dark_registry();
    let mut pages = MemoryPageStore::new();
    pages.insert("parent", None, "dark");
    pages.insert("child", Some("parent"), "");

    let key = resolve(&"child", &registry, &pages);
    assert_eq!(key, "dark");
    assert_eq!(
        class_name_for(&key, &registry).as_deref(),
        Some("has-inherited-style-dark")
    );

    let css = css_for(&key, &registry).unwrap();
    assert_eq!(css, ":root { --bg: #000; } .card { color: #fff; }");
    assert_eq!(top_level_blocks(&css), 2);
}

#[test]
fn test_stale_key_is_skipped() {
    let registry = StyleRegistry::builder()
        .style("y", StyleDefinition::new("Y"))
        .build();

    let resolved = resolve_with(
        'A',
        &registry,
        |_| vec!['B'],
        |page| match page {
            'A' => "x".to_string(),
            _ => "y".to_string(),
        },
    );
    assert_eq!(resolved, "y");
}

#[test]
fn test_resolution_is_deterministic() {
    let registry = dark_registry();
    let mut pages = MemoryPageStore::new();
    pages.insert(1, None, "dark");
    pages.insert(2, Some(1), "missing");
    pages.insert(3, Some(2), "");

    let first = PageStyle::for_page(&pages, &3, &registry);
    let second = PageStyle::for_page(&pages, &3, &registry);
    assert_eq!(first, second);
    assert_eq!(first.key(), "dark");
}

#[test]
fn test_unstyled_hierarchy_renders_nothing() {
    let registry = dark_registry();
    let mut pages = MemoryPageStore::new();
    pages.insert(1, None, "");
    pages.insert(2, Some(1), "");

    let style = PageStyle::for_page(&pages, &2, &registry);
    assert_eq!(style.key(), INHERIT);
    assert_eq!(style.body_class(), None);
    assert_eq!(style.css(), None);

    let mut classes = vec!["page".to_string()];
    style.apply_body_class(&mut classes);
    assert_eq!(classes, vec!["page"]);
}

#[test]
fn test_editor_changes_take_effect_on_next_render() {
    let registry = StyleRegistry::build();
    let mut pages = MemoryPageStore::new();
    pages.insert(1, None, "");
    pages.insert(2, Some(1), "");

    assert_eq!(PageStyle::for_page(&pages, &2, &registry).key(), INHERIT);

    pages.set_style_key(&1, "example");
    assert_eq!(current_value(&pages, &1), "example");
    assert_eq!(current_value(&pages, &2), INHERIT);
    assert_eq!(PageStyle::for_page(&pages, &2, &registry).key(), "example");
}

#[test]
fn test_injection_never_adds_a_rule() {
    let registry = StyleRegistry::builder()
        .style(
            "hostile",
            StyleDefinition::new("Hostile")
                .variable("--c", "\"); } body { display:none")
                .declare("} body {", "color", "red;} html{display:none")
                .declare(".ok", "x", "</style><script>alert(1)</script>"),
        )
        .build();

    let css = css_for("hostile", &registry).unwrap();
    assert_eq!(top_level_blocks(&css), 3);
    assert!(!css.contains("</style>"));
    assert!(!css.contains("<script>"));
    assert!(!css.contains("} body {"));
}

#[test]
fn test_unbalanced_brackets_keep_later_rules_separate() {
    for value in ["calc(", "[", "url(x", "a)]"] {
        let registry = StyleRegistry::builder()
            .style(
                "s",
                StyleDefinition::new("S")
                    .variable("--x", value)
                    .declare(".card", "color", "#fff"),
            )
            .build();

        let css = css_for("s", &registry).unwrap();
        assert_eq!(top_level_blocks(&css), 2, "{css}");
    }
}

#[test]
fn test_malformed_definitions_render_as_empty() {
    let registry = StyleRegistry::builder()
        .styles(
            page_style_inheritance::parse_styles_json(
                r#"{"bare": {"name": "Bare"}, "vars": {"variables": {"--x": "1"}}}"#,
            )
            .unwrap(),
        )
        .build();

    assert_eq!(css_for("bare", &registry).as_deref(), Some(""));
    assert_eq!(css_for("vars", &registry).as_deref(), Some(":root { --x: 1; }"));
}

#[test]
fn test_load_fixture_directory() {
    let styles = load_style_dir("tests/fixtures/styles").unwrap();
    assert_eq!(
        styles.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["", "dark", "brand", "minimal"]
    );

    let registry = StyleRegistryBuilder::empty().styles(styles).build();
    assert_eq!(
        css_for("dark", &registry).as_deref(),
        Some(":root { --bg: #000; } .card { color: #fff; }")
    );
    assert_eq!(
        css_for("brand", &registry).as_deref(),
        Some(":root { --accent: teal; --accent-contrast: white; }")
    );

    let labels: Vec<String> = selection_options(&registry)
        .into_iter()
        .map(|option| option.label)
        .collect();
    assert_eq!(labels, vec!["Inherit parent style", "Dark", "Brand", "Minimal"]);
}

#[test]
fn test_load_single_fixture_file() {
    let styles = load_styles_file("tests/fixtures/styles/20-brand.json").unwrap();
    assert_eq!(styles.len(), 2);
    assert!(styles["minimal"].is_empty());
}

#[test]
fn test_load_dir_collision() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.yaml"), "dark:\n  name: Dark\n").unwrap();
    std::fs::write(dir.path().join("b.json"), r#"{"dark": {"name": "Other"}}"#).unwrap();

    match load_style_dir(dir.path()) {
        Err(LoadError::Collision {
            key,
            existing,
            conflicting,
        }) => {
            assert_eq!(key, "dark");
            assert!(existing.ends_with("a.yaml"));
            assert!(conflicting.ends_with("b.json"));
        }
        other => panic!("expected collision, got {other:?}"),
    }
}

#[test]
fn test_load_dir_reports_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    assert!(matches!(load_style_dir(dir.path()), Err(LoadError::Json(_))));
}

#[test]
fn test_load_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(load_style_dir(&missing), Err(LoadError::Read { .. })));
}
