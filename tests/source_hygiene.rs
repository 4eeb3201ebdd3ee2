//! Library code propagates errors instead of panicking.
//!
//! Walks `src/` and flags `.unwrap()` / `.expect()` calls outside
//! `#[cfg(test)]` modules.

use std::path::Path;

use syn::visit::{self, Visit};
use walkdir::WalkDir;

const FORBIDDEN: &[&str] = &["unwrap", "expect"];

#[derive(Default)]
struct PanicFinder {
    hits: Vec<String>,
}

fn is_cfg_test(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Ident>()
                .map(|ident| ident == "test")
                .unwrap_or(false)
    })
}

impl<'ast> Visit<'ast> for PanicFinder {
    fn visit_item_mod(&mut self, item: &'ast syn::ItemMod) {
        if is_cfg_test(&item.attrs) {
            return;
        }
        visit::visit_item_mod(self, item);
    }

    fn visit_expr_method_call(&mut self, call: &'ast syn::ExprMethodCall) {
        let name = call.method.to_string();
        if FORBIDDEN.contains(&name.as_str()) {
            self.hits.push(name);
        }
        visit::visit_expr_method_call(self, call);
    }
}

fn scan(source: &str) -> syn::Result<Vec<String>> {
    let file = syn::parse_file(source)?;
    let mut finder = PanicFinder::default();
    finder.visit_file(&file);
    Ok(finder.hits)
}

#[test]
fn test_no_unwrap_or_expect_in_library_code() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut offenders = Vec::new();

    for entry in WalkDir::new(&src).into_iter().filter_map(Result::ok) {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }

        let source = std::fs::read_to_string(path).unwrap();
        let hits =
            scan(&source).unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()));

        for method in hits {
            offenders.push(format!("{}: .{method}()", path.display()));
        }
    }

    assert!(
        offenders.is_empty(),
        "panicking calls in library code:\n{}",
        offenders.join("\n")
    );
}

#[test]
fn test_scan_skips_cfg_test_modules() {
    let source = r#"
        fn load() -> u32 {
            "1".parse().unwrap()
        }

        fn name() -> String {
            std::env::var("USER").expect("user")
        }

        #[cfg(test)]
        mod tests {
            #[test]
            fn it_works() {
                assert_eq!("1".parse::<u32>().unwrap(), 1);
            }
        }
    "#;

    assert_eq!(scan(source).unwrap(), vec!["unwrap", "expect"]);
}

#[test]
fn test_scan_ignores_non_panicking_variants() {
    let source = r#"
        fn load() -> u32 {
            "1".parse().unwrap_or_default()
        }
    "#;

    assert!(scan(source).unwrap().is_empty());
}
