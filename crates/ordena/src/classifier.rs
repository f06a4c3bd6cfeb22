//! Import specifier classification
//!
//! Buckets a raw module specifier into one of the ordered source groups
//! using purely lexical path-syntax heuristics. Specifiers are never
//! resolved against a filesystem; the classifier is a total function of the
//! specifier text and nothing else.

use cow_utils::CowUtils;
use once_cell::sync::Lazy;
use regex::Regex;

/// Namespace prefixes provided by a JavaScript runtime (`node:fs`,
/// `bun:sqlite`, ...)
const RUNTIME_NAMESPACES: &[&str] = &["node", "bun", "deno", "cloudflare", "workerd", "wrangler"];

/// Namespace prefixes addressing a package registry (`npm:chalk`,
/// `jsr:@std/path`, ...)
const REGISTRY_NAMESPACES: &[&str] = &["npm", "jsr", "esm", "unpkg", "cdn"];

static NAMESPACE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("namespace prefix pattern"));

static DOLLAR_ALIAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$[\w-]*/").expect("dollar alias pattern"));

// The `~/` root form is matched before this pattern runs, so no lookahead
// is needed to keep the two tilde forms apart.
static TILDE_ALIAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^~[\w-]+/").expect("tilde alias pattern"));

/// Classification of an import specifier, derived lexically from its text
///
/// Exactly one variant applies to any specifier; the match order in
/// [`classify`] is the precedence. The variant payloads are metadata only;
/// ordering between groups goes through [`SourceGroup::rank`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceGroup {
    /// Runtime-provided namespace such as `node:fs` or `bun:test`
    RuntimeNamespace { namespace: String },
    /// Package-registry namespace such as `npm:chalk` or `jsr:@std/path`
    RegistryNamespace { namespace: String },
    /// Any other `name:` namespace, e.g. `https://esm.sh/react`
    GenericNamespace { namespace: String },
    /// Package specifier with no path syntax, e.g. `react` or
    /// `@angular/core`
    Bare { scoped: bool },
    /// `$name/` alias, e.g. `$lib/stores`; `root` keeps the `$name` part
    DollarAlias { root: String },
    /// `~/` alias (`root_form`) or a named `~name/` alias
    TildeAlias { root_form: bool },
    /// The reserved `@/` alias prefix
    AtAlias,
    /// Parent-relative path; `depth` counts the `../` traversals
    ParentRelative { depth: usize },
    /// Current-directory path; `bare` marks the `./` form itself
    CurrentDir { depth: usize, bare: bool },
}

impl SourceGroup {
    /// Fixed top-level ordering key
    ///
    /// `AtAlias` and the `~/` root form share a tier; within the two
    /// relative groups, depth is a secondary key applied by the record
    /// comparator.
    pub fn rank(&self) -> u8 {
        match self {
            Self::RuntimeNamespace { .. } => 0,
            Self::RegistryNamespace { .. } => 1,
            Self::GenericNamespace { .. } => 2,
            Self::Bare { .. } => 3,
            Self::DollarAlias { .. } => 4,
            Self::TildeAlias { root_form: false } => 5,
            Self::AtAlias | Self::TildeAlias { root_form: true } => 6,
            Self::ParentRelative { .. } => 7,
            Self::CurrentDir { .. } => 8,
        }
    }
}

/// Classify a raw module specifier
///
/// Total and deterministic; only the namespace-prefix membership checks are
/// case-insensitive. `@/` is treated as a reserved alias prefix
/// unconditionally, so `@scope/pkg` (no literal `@/`) stays a scoped bare
/// import.
pub fn classify(source: &str) -> SourceGroup {
    if let Some(colon) = source.find(':')
        && colon > 0
    {
        let prefix = &source[..colon];
        if NAMESPACE_PREFIX.is_match(prefix) {
            let lowered = prefix.cow_to_ascii_lowercase();
            if RUNTIME_NAMESPACES.contains(&lowered.as_ref()) {
                return SourceGroup::RuntimeNamespace {
                    namespace: prefix.to_string(),
                };
            }
            if REGISTRY_NAMESPACES.contains(&lowered.as_ref()) {
                return SourceGroup::RegistryNamespace {
                    namespace: prefix.to_string(),
                };
            }
            return SourceGroup::GenericNamespace {
                namespace: prefix.to_string(),
            };
        }
    }

    if let Some(matched) = DOLLAR_ALIAS.find(source) {
        return SourceGroup::DollarAlias {
            root: source[..matched.end() - 1].to_string(),
        };
    }

    if source.starts_with("@/") {
        return SourceGroup::AtAlias;
    }
    if source.starts_with("~/") {
        return SourceGroup::TildeAlias { root_form: true };
    }
    if TILDE_ALIAS.is_match(source) {
        return SourceGroup::TildeAlias { root_form: false };
    }

    if source.starts_with("../") || source == ".." {
        let mut depth = 0usize;
        let mut rest = source;
        while let Some(stripped) = rest.strip_prefix("../") {
            depth += 1;
            rest = stripped;
        }
        // A trailing bare `..` segment is one more traversal.
        if rest == ".." {
            depth += 1;
        }
        return SourceGroup::ParentRelative {
            depth: depth.max(1),
        };
    }

    if let Some(rest) = source.strip_prefix("./") {
        return SourceGroup::CurrentDir {
            depth: rest.matches('/').count(),
            bare: rest.is_empty(),
        };
    }

    SourceGroup::Bare {
        scoped: source.starts_with('@'),
    }
}
