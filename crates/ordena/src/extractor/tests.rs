//! Tests for declaration extraction

use pretty_assertions::assert_eq;

use super::*;

fn extract_stmt(text: &str) -> ImportRecord {
    extract(text, Span::new(0, text.len())).unwrap()
}

#[test]
fn side_effect_import() {
    let record = extract_stmt("import './setup';");
    assert_eq!(record.kind, ImportKind::SideEffect);
    assert_eq!(record.source, "./setup");
    assert!(record.bindings.is_empty());
    assert!(!record.type_only);
}

#[test]
fn namespace_import() {
    let record = extract_stmt("import * as path from 'node:path';");
    assert_eq!(record.kind, ImportKind::Namespace);
    assert_eq!(record.bindings, vec![Binding::plain("path")]);
    assert_eq!(record.source, "node:path");
}

#[test]
fn default_import() {
    let record = extract_stmt("import React from \"react\";");
    assert_eq!(record.kind, ImportKind::Default);
    assert_eq!(record.bindings, vec![Binding::plain("React")]);
}

#[test]
fn hybrid_default_import() {
    let record = extract_stmt("import React, { useState, useEffect } from 'react';");
    assert_eq!(record.kind, ImportKind::Default);
    assert_eq!(
        record.bindings,
        vec![
            Binding::plain("React"),
            Binding::plain("useState"),
            Binding::plain("useEffect"),
        ]
    );
}

#[test]
fn named_import_with_aliases_and_markers() {
    let record = extract_stmt("import { type User, format as fmt, same as same } from './m';");
    assert_eq!(record.kind, ImportKind::Named);
    assert_eq!(
        record.bindings,
        vec![
            Binding::type_marked("User"),
            Binding::aliased("format", "fmt"),
            // Alias equal to the imported name is dropped.
            Binding::plain("same"),
        ]
    );
}

#[test]
fn statement_level_type_marker() {
    let record = extract_stmt("import type { User, Role } from './models';");
    assert!(record.type_only);
    assert!(!record.bindings[0].type_only);

    let ns = extract_stmt("import type * as models from './models';");
    assert!(ns.type_only);
    assert_eq!(ns.kind, ImportKind::Namespace);

    let def = extract_stmt("import type Config from './config';");
    assert!(def.type_only);
    assert_eq!(def.bindings, vec![Binding::plain("Config")]);
}

#[test]
fn type_is_an_ordinary_name_when_not_a_marker() {
    // A default import of the name `type`.
    let record = extract_stmt("import type from './keyword';");
    assert!(!record.type_only);
    assert_eq!(record.kind, ImportKind::Default);
    assert_eq!(record.bindings, vec![Binding::plain("type")]);

    // Importing the exported name `type` under an alias.
    let named = extract_stmt("import { type as kind } from './keyword';");
    assert_eq!(named.bindings, vec![Binding::aliased("type", "kind")]);
    assert!(!named.bindings[0].type_only);
}

#[test]
fn multiline_statements_and_trailing_commas_parse() {
    let text = "import {\n  b,\n  a,\n} from './multi';";
    let record = extract_stmt(text);
    assert_eq!(
        record.bindings,
        vec![Binding::plain("b"), Binding::plain("a")]
    );
    assert_eq!(record.original_text, text);
}

#[test]
fn format_detection_is_per_statement() {
    let source = "import a from 'one';\n    import b from \"two\";\n";
    let first = Span::new(0, 20);
    let second = Span::new(25, source.len() - 1);

    assert_eq!(
        detect_format(source, first),
        StatementFormat {
            quote: QuoteStyle::Single,
            indent: String::new(),
        }
    );
    assert_eq!(
        detect_format(source, second),
        StatementFormat {
            quote: QuoteStyle::Double,
            indent: "    ".to_string(),
        }
    );
}

#[test]
fn escaped_quotes_stay_in_the_specifier() {
    let record = extract_stmt(r"import x from './we\'ird';");
    assert_eq!(record.source, r"./we\'ird");
}

#[test]
fn malformed_statements_are_errors() {
    let cases = [
        "import x from './unterminated",
        "import , from 'x';",
        "import x y from 'x';",
        "import { a b } from 'x';",
        "import def, * as ns from 'x';",
        "import x from 'x'; trailing",
        "const x = 1;",
    ];
    for case in cases {
        assert!(
            extract(case, Span::new(0, case.len())).is_err(),
            "expected error for {case:?}"
        );
    }
}

#[test]
fn out_of_range_span_is_a_contract_violation() {
    let err = extract("import x from 'y';", Span::new(0, 99)).unwrap_err();
    assert!(err.to_string().contains("outside the source unit"));
}
