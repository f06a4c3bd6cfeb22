//! Tests for statement regeneration

use pretty_assertions::assert_eq;

use super::*;
use crate::types::Span;

fn record(source: &str, kind: ImportKind, bindings: Vec<Binding>) -> ImportRecord {
    ImportRecord {
        source: source.to_string(),
        kind,
        bindings,
        type_only: false,
        original_text: String::new(),
        span: Span::new(0, 0),
    }
}

#[test]
fn side_effect_statement() {
    let rec = record("./styles.css", ImportKind::SideEffect, Vec::new());
    assert_eq!(
        generate(&rec, QuoteStyle::Single).unwrap(),
        "import './styles.css';"
    );
    assert_eq!(
        generate(&rec, QuoteStyle::Double).unwrap(),
        "import \"./styles.css\";"
    );
}

#[test]
fn namespace_statement() {
    let rec = record("node:path", ImportKind::Namespace, vec![Binding::plain("path")]);
    assert_eq!(
        generate(&rec, QuoteStyle::Single).unwrap(),
        "import * as path from 'node:path';"
    );
}

#[test]
fn default_statement() {
    let rec = record("react", ImportKind::Default, vec![Binding::plain("React")]);
    assert_eq!(
        generate(&rec, QuoteStyle::Single).unwrap(),
        "import React from 'react';"
    );
}

#[test]
fn hybrid_default_sorts_only_the_named_tail() {
    let rec = record(
        "react",
        ImportKind::Default,
        vec![
            Binding::plain("React"),
            Binding::plain("useState"),
            Binding::plain("useEffect"),
        ],
    );
    assert_eq!(
        generate(&rec, QuoteStyle::Single).unwrap(),
        "import React, { useEffect, useState } from 'react';"
    );
}

#[test]
fn named_statement_sorts_and_aliases() {
    let rec = record(
        "./helpers",
        ImportKind::Named,
        vec![
            Binding::aliased("format", "fmt"),
            Binding::plain("capitalize"),
        ],
    );
    assert_eq!(
        generate(&rec, QuoteStyle::Single).unwrap(),
        "import { capitalize, format as fmt } from './helpers';"
    );
}

#[test]
fn per_binding_type_markers_survive_resort() {
    let rec = record(
        "./models",
        ImportKind::Named,
        vec![Binding::type_marked("User"), Binding::plain("createUser")],
    );
    assert_eq!(
        generate(&rec, QuoteStyle::Single).unwrap(),
        "import { createUser, type User } from './models';"
    );
}

#[test]
fn statement_type_marker_suppresses_binding_markers() {
    let mut rec = record(
        "./models",
        ImportKind::Named,
        vec![Binding::type_marked("User"), Binding::type_marked("Role")],
    );
    rec.type_only = true;
    assert_eq!(
        generate(&rec, QuoteStyle::Single).unwrap(),
        "import type { Role, User } from './models';"
    );
}

#[test]
fn type_only_namespace_and_default() {
    let mut ns = record("./api", ImportKind::Namespace, vec![Binding::plain("api")]);
    ns.type_only = true;
    assert_eq!(
        generate(&ns, QuoteStyle::Single).unwrap(),
        "import type * as api from './api';"
    );

    let mut def = record("./config", ImportKind::Default, vec![Binding::plain("Config")]);
    def.type_only = true;
    assert_eq!(
        generate(&def, QuoteStyle::Double).unwrap(),
        "import type Config from \"./config\";"
    );
}

#[test]
fn empty_named_list_is_still_valid() {
    let rec = record("./nothing", ImportKind::Named, Vec::new());
    assert_eq!(
        generate(&rec, QuoteStyle::Single).unwrap(),
        "import {} from './nothing';"
    );
}

#[test]
fn missing_bindings_are_a_loud_error() {
    let ns = record("react", ImportKind::Namespace, Vec::new());
    let err = generate(&ns, QuoteStyle::Single).unwrap_err();
    assert!(err.to_string().contains("no bound name"));

    let def = record("react", ImportKind::Default, Vec::new());
    assert!(generate(&def, QuoteStyle::Single).is_err());
}
