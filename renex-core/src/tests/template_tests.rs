use super::*;

fn groups(pairs: &[(&str, &str)]) -> GroupValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_plain_placeholders() {
    let resolver = TemplateResolver::new("Show S<season>E<episode>.mkv");
    let resolved = resolver.resolve(&groups(&[("season", "01"), ("episode", "02")]));
    assert_eq!(resolved.name, "Show S01E02.mkv");
}

#[test]
fn test_separator_variants() {
    let resolver = TemplateResolver::new("[<a>|<#a>|<a#>|<#a#>]").with_separator("-");
    let resolved = resolver.resolve(&groups(&[("a", "x")]));
    assert_eq!(resolved.name, "[x|-x|x-|-x-]");
}

#[test]
fn test_empty_group_drops_its_separator() {
    let resolver = TemplateResolver::new("<year#><episode#>").with_separator("-");
    let resolved = resolver.resolve(&groups(&[("year", "2020"), ("episode", "")]));
    assert_eq!(resolved.name, "2020");

    let resolver = TemplateResolver::new("<year><#episode>").with_separator("-");
    let resolved = resolver.resolve(&groups(&[("year", "2020"), ("episode", "")]));
    assert_eq!(resolved.name, "2020");
}

#[test]
fn test_separator_kept_when_followed_by_value() {
    let resolver = TemplateResolver::new("<year#><episode#><title>").with_separator("-");
    let resolved = resolver.resolve(&groups(&[
        ("year", "2020"),
        ("episode", ""),
        ("title", "Pilot"),
    ]));
    assert_eq!(resolved.name, "2020-Pilot");
}

#[test]
fn test_lone_placeholder_keeps_separator() {
    let resolver = TemplateResolver::new("<a#>").with_separator("-");
    let resolved = resolver.resolve(&groups(&[("a", "x")]));
    assert_eq!(resolved.name, "x-");
}

#[test]
fn test_separator_degradation_is_per_group() {
    // An empty group earlier in the map must not strip separators from later groups
    let resolver = TemplateResolver::new("<#a#><b#><c>").with_separator("_");
    let resolved = resolver.resolve(&groups(&[("a", ""), ("b", "2"), ("c", "3")]));
    assert_eq!(resolved.name, "2_3");
}

#[test]
fn test_trim_applied_before_substitution() {
    let resolver = TemplateResolver::new("E<episode>")
        .with_trim_prefix("0")
        .with_trim_suffix("x");
    let resolved = resolver.resolve(&groups(&[("episode", "07x")]));
    assert_eq!(resolved.name, "E7");
}

#[test]
fn test_trim_strips_only_once() {
    let resolver = TemplateResolver::new("<n>").with_trim_prefix("0");
    let resolved = resolver.resolve(&groups(&[("n", "007")]));
    assert_eq!(resolved.name, "07");
}

#[test]
fn test_value_empty_after_trim_drops_separator() {
    let resolver = TemplateResolver::new("<a#><b>")
        .with_separator(" - ")
        .with_trim_prefix("v");
    let resolved = resolver.resolve(&groups(&[("a", "v"), ("b", "end")]));
    assert_eq!(resolved.name, "end");
}

#[test]
fn test_unknown_placeholder_left_untouched() {
    let resolver = TemplateResolver::new("<title> <#missing#> <>.txt").with_separator("-");
    let resolved = resolver.resolve(&groups(&[("title", "Doc")]));
    assert_eq!(resolved.name, "Doc <#missing#> <>.txt");
}

#[test]
fn test_captured_text_is_not_resubstituted() {
    let resolver = TemplateResolver::new("<a><b>");
    let resolved = resolver.resolve(&groups(&[("a", "<b>"), ("b", "B")]));
    assert_eq!(resolved.name, "<b>B");
}

#[test]
fn test_stray_angle_brackets() {
    let resolver = TemplateResolver::new("a < b <<n>> c");
    let resolved = resolver.resolve(&groups(&[("n", "1")]));
    assert_eq!(resolved.name, "a < b <1> c");
}

#[test]
fn test_repeated_placeholder() {
    let resolver = TemplateResolver::new("<n>-<n>");
    let resolved = resolver.resolve(&groups(&[("n", "9")]));
    assert_eq!(resolved.name, "9-9");
}

#[test]
fn test_annotated_marks_each_substitution() {
    let resolver = TemplateResolver::new("S<#season>.mkv").with_separator(" ");
    let resolved = resolver.resolve(&groups(&[("season", "01")]));
    assert_eq!(resolved.name, "S 01.mkv");
    assert_eq!(resolved.annotated, "S<season> 01</>.mkv");
}

#[test]
fn test_describe_groups() {
    let described = describe_groups(&groups(&[("season", "01"), ("episode", "")]));
    assert_eq!(described, r#"{episode: "", season: "01"}"#);
}
