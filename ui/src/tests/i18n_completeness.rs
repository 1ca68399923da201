use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::LabelKey;

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "pulseboard-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Simple parser: extract message IDs from a Fluent file.
/// We treat any line that starts (after optional whitespace) with:
///    <identifier> =
/// as a message definition. Comments, terms (-prefix), blank lines ignored.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line[..eq_pos].trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Variant names declared in `pub enum LabelKey { ... }` inside `i18n.rs`.
///
/// `LabelKey::ALL` is maintained by hand; comparing it against the enum body
/// catches a variant added to one but not the other.
fn declared_label_variants(i18n_source: &str) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    let Some(start) = i18n_source.find("pub enum LabelKey {") else {
        return variants;
    };
    for line in i18n_source[start..].lines().skip(1) {
        let line = line.trim();
        if line.starts_with('}') {
            break;
        }
        let name = line.trim_end_matches(',');
        if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric()) {
            variants.insert(name.to_string());
        }
    }
    variants
}

fn collect_locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs = Vec::new();
    if let Ok(read_dir) = fs::read_dir(i18n_root) {
        for entry in read_dir.flatten() {
            let path = entry.path();
            if path.is_dir() {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    // Locale folders are region-qualified (en-US style).
                    if name.contains('-') {
                        dirs.push(name.to_string());
                    }
                }
            }
        }
    }
    dirs.sort();
    dirs
}

#[test]
fn label_key_list_matches_enum() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let source = fs::read_to_string(crate_root.join("src").join("i18n.rs"))
        .expect("Failed to read i18n.rs");

    let declared = declared_label_variants(&source);
    assert!(!declared.is_empty(), "Could not locate the LabelKey enum body");

    let listed: BTreeSet<String> = LabelKey::ALL.iter().map(|k| format!("{k:?}")).collect();

    let missing: Vec<_> = declared.difference(&listed).cloned().collect();
    assert!(
        missing.is_empty(),
        "LabelKey variants missing from LabelKey::ALL:\n{}",
        missing.join("\n")
    );
    assert_eq!(listed.len(), LabelKey::ALL.len(), "LabelKey::ALL has duplicates");
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    // 1. Fallback locale (en-US) must exist
    let fallback_dir = i18n_root.join("en-US");
    assert!(
        fallback_dir.exists(),
        "Missing fallback locale directory: {:?}",
        fallback_dir
    );

    let fallback_file = fallback_dir.join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {:?}",
        fallback_file
    );

    // 2. Every label the view can render must exist in the fallback.
    let mut missing_in_fallback: Vec<_> = LabelKey::ALL
        .iter()
        .map(|k| k.id())
        .filter(|id| !fallback_keys.contains(*id))
        .collect();
    missing_in_fallback.sort_unstable();

    if !missing_in_fallback.is_empty() {
        panic!(
            "Label keys missing in fallback ({}):\n{}",
            missing_in_fallback.len(),
            missing_in_fallback.join("\n")
        );
    }

    // 3. For each locale, ensure no key is missing relative to fallback.
    let locales = collect_locale_dirs(&i18n_root);
    let mut per_locale_missing: HashMap<String, Vec<String>> = HashMap::new();

    for locale in locales {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        if !path.exists() {
            panic!(
                "Locale folder {:?} missing expected file {:?}",
                locale, path
            );
        }
        let content = fs::read_to_string(&path).unwrap_or_default();
        let keys = parse_ftl_keys(&content);

        let missing: Vec<_> = fallback_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .cloned()
            .collect();
        if !missing.is_empty() {
            per_locale_missing.insert(locale, missing);
        }
    }

    if !per_locale_missing.is_empty() {
        let mut report = String::from("Locales with missing translations relative to fallback:\n");
        for (loc, miss) in per_locale_missing.iter() {
            report.push_str(&format!("  {loc} ({} missing)\n", miss.len()));
            for k in miss {
                report.push_str(&format!("    {k}\n"));
            }
        }
        panic!("{report}");
    }

    // 4. Fallback messages no LabelKey points at are dead text.
    let used: BTreeSet<&str> = LabelKey::ALL.iter().map(|k| k.id()).collect();
    let unused: Vec<_> = fallback_keys
        .iter()
        .filter(|k| !used.contains(k.as_str()))
        .cloned()
        .collect();
    assert!(
        unused.is_empty(),
        "Fallback messages not reachable from LabelKey:\n{}",
        unused.join("\n")
    );
}
