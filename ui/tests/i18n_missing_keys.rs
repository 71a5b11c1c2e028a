use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures the authored locale (zh-CN) provides *at least* the keys present
/// in the reference (en-US) `folio-ui.ftl`, which `fl!` checks against.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)

#[test]
fn all_locales_have_all_reference_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/folio-ui.ftl");
    const ZH_CN: &str = include_str!("../i18n/zh-CN/folio-ui.ftl");

    let reference_keys = extract_keys(EN_US);
    assert!(!reference_keys.is_empty(), "Reference (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[("zh-CN", ZH_CN)];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = reference_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn timeline_entries_keep_their_date_markup() {
    const EN_US: &str = include_str!("../i18n/en-US/folio-ui.ftl");
    const ZH_CN: &str = include_str!("../i18n/zh-CN/folio-ui.ftl");

    for (locale, src) in [("en-US", EN_US), ("zh-CN", ZH_CN)] {
        let dated = src
            .lines()
            .filter(|line| line.trim_start().starts_with("timeline-") && !line.contains("timeline-title"))
            .filter(|line| line.contains("<span class=\"timeline-date\">"))
            .count();
        assert_eq!(dated, 4, "{locale}: every timeline entry carries a date span");
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        // Basic pattern: key [space]* '='
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
