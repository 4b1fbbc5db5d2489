//! The shipped house lint policy for a Vue 2 frontend codebase.
//!
//! One declarative table: base rules grouped the way the team reviews
//! them, hand-authored `vue/` rules for templates, override scopes for
//! test and store files, and a derivation list that mirrors base rules
//! into the `vue/` namespace so template script blocks are held to the
//! same standard as plain modules.

use crate::{list, record, OptionValue, PolicyBuilder};

/// Indentation width enforced in both scripts and templates.
const INDENT_WIDTH: i64 = 3;

/// Item count at which multiline formatting kicks in.
const MIN_ITEMS_FOR_LINE_BREAK: i64 = 4;

/// Component name patterns exempted from undefined-component checks:
/// custom globals, package-provided components, and Vue Bootstrap.
const GLOBAL_COMPONENT_PATTERNS: &[&str] = &[
    // Custom components
    "^[Tt]ippy$",
    "^[Rr]adio-?[Bb]uttons$",
    "^[Cc]heckbox$",
    "^[Mm]ulti-?[Ss]elect-?[Cc]-?[Ff]-?[Mm]$",
    // Package-provided components
    "^[Mm]ultiselect$",
    "^[Pp]ortal$",
    "^[Pp]ortal-?[Tt]arget$",
    "^[Rr]outer-?[Ll]ink$",
    "^[Rr]outer-?[Vv]iew$",
    "^[Ss]crollactive$",
    "^[Vv]alidation-?[Pp]rovider$",
    "^[Vv]alidation-?[Oo]bserver$",
    // Vue Bootstrap
    "^[Bb]-?[Bb]tn$",
    "^[Bb]-?[Ll]ink$",
    "^[Bb]-?[Cc]ollapse$",
    "^[Bb]-?[Dd]ropdown$",
    "^[Bb]-?[Dd]ropdown-?[Tt]ext$",
    "^[Bb]-?[Ff]orm-?[Gg]roup$",
    "^[Bb]-?[Ff]orm-?[Ss]elect$",
    "^[Bb]-?[Mm]odal$",
    "^[Bb]-?[Pp]agination$",
    "^[Bb]-?[Tt]ab$",
    "^[Bb]-?[Tt]abs$",
    "^[Bb]-?[Tt]able$",
];

/// Base-rule stems mirrored into the `vue/` namespace so the template
/// variants act identically to their script counterparts. Stems without a
/// base entry are skipped.
const TEMPLATE_MIRRORED_RULES: &[&str] = &[
    "array-bracket-newline",
    "array-bracket-spacing",
    "arrow-spacing",
    "block-spacing",
    "brace-style",
    "camelcase",
    "comma-dangle",
    "comma-spacing",
    "comma-style",
    "dot-location",
    "dot-notation",
    "eqeqeq",
    "func-call-spacing",
    "key-spacing",
    "keyword-spacing",
    "max-len",
    "no-constant-condition",
    "no-empty-pattern",
    "no-extra-parens",
    "no-irregular-whitespace",
    "no-restricted-syntax",
    "no-sparse-arrays",
    "no-useless-concat",
    "object-curly-newline",
    "object-curly-spacing",
    "object-property-newline",
    "object-shorthand",
    "operator-linebreak",
    "prefer-template",
    "quote-props",
    "space-in-parens",
    "space-infix-ops",
    "space-unary-ops",
    "template-curly-spacing",
];

/// The full declarative policy table, ready to resolve for an environment.
#[must_use]
pub fn policy() -> PolicyBuilder {
    let builder = base_rules(PolicyBuilder::new());
    let builder = template_rules(builder);
    let builder = override_scopes(builder);
    builder.derive_namespace("", "vue", TEMPLATE_MIRRORED_RULES.iter().copied())
}

#[allow(clippy::too_many_lines)]
fn base_rules(builder: PolicyBuilder) -> PolicyBuilder {
    builder
        // Possible errors
        .rule("no-console", |r| r.env_default())
        .rule("no-debugger", |r| r.env_default())
        .rule("no-alert", |r| r.env_default())
        .rule("no-unused-vars", |r| r.env_default())
        // Best practices: optimization
        .rule("no-magic-numbers", |r| {
            r.warn().arg(record([
                ("ignoreArrayIndexes", OptionValue::from(true)),
                ("ignoreDefaultValues", OptionValue::from(true)),
                ("ignore", list([-2_i64, -1, 0, 1, 2])),
            ]))
        })
        .rule("prefer-regex-literals", |r| r.warn())
        .rule("prefer-arrow-callback", |r| {
            r.warn().arg(record([("allowNamedFunctions", true)]))
        })
        // Best practices: mistakes
        .rule("no-invalid-this", |r| r.error())
        .rule("no-lone-blocks", |r| r.warn())
        .rule("no-loop-func", |r| r.warn())
        .rule("no-new", |r| r.warn())
        .rule("no-self-compare", |r| r.env_default())
        .rule("no-unmodified-loop-condition", |r| r.warn())
        .rule("no-unused-expressions", |r| r.warn())
        .rule("no-duplicate-imports", |r| {
            r.env_default().arg(record([("includeExports", true)]))
        })
        .rule("no-useless-rename", |r| r.env_default())
        // Best practices: confusing code
        .rule("curly", |r| r.env_default().arg("all"))
        .rule("no-eq-null", |r| r.warn())
        .rule("no-floating-decimal", |r| r.warn())
        .rule("no-implicit-coercion", |r| r.warn())
        .rule("no-sequences", |r| r.error())
        .rule("no-confusing-arrow", |r| r.warn())
        .rule("prefer-numeric-literals", |r| r.env_default())
        // Deprecated and risky instructions
        .rule("no-extend-native", |r| r.error())
        .rule("no-new-func", |r| r.error())
        .rule("no-implied-eval", |r| r.error())
        .rule("no-eval", |r| r.env_default())
        .rule("no-iterator", |r| r.error())
        .rule("no-labels", |r| r.error())
        .rule("no-new-wrappers", |r| r.warn())
        .rule("no-script-url", |r| r.error())
        .rule("no-void", |r| r.error())
        .rule("prefer-rest-params", |r| r.warn())
        // Redundant and useless instructions
        .rule("no-extra-bind", |r| r.warn())
        .rule("no-useless-call", |r| r.warn())
        .rule("no-useless-catch", |r| r.warn())
        .rule("no-useless-concat", |r| r.warn())
        .rule("no-useless-return", |r| r.warn())
        .rule("strict", |r| r.warn())
        // Classes
        .rule("grouped-accessor-pairs", |r| r.warn().arg("getBeforeSet"))
        .rule("class-methods-use-this", |r| r.warn())
        .rule("no-constructor-return", |r| r.error())
        // Functions
        .rule("no-caller", |r| r.error())
        .rule("no-empty-function", |r| {
            r.warn().arg(record([("allow", list(["arrowFunctions"]))]))
        })
        .rule("consistent-return", |r| r.env_default())
        .rule("require-await", |r| r.warn())
        .rule("no-return-assign", |r| r.warn())
        // Variable declaration and assignment
        .rule("vars-on-top", |r| r.warn())
        .rule("no-undef-init", |r| r.env_default())
        .rule("one-var", |r| r.env_default().arg("never"))
        .rule("operator-assignment", |r| r.env_default().arg("always"))
        .rule("no-var", |r| r.error())
        .rule("no-implicit-globals", |r| r.env_default())
        .rule("no-multi-assign", |r| r.env_default())
        .rule("prefer-const", |r| r.warn())
        // Variable and function naming
        .rule("camelcase", |r| {
            r.warn().arg(record([
                ("ignoreImports", OptionValue::from(true)),
                // Pascal_SnakeCase identifiers coming from the back-end
                ("allow", list([r"^([A-Za-z\d]*_?)+$"])),
            ]))
        })
        // Commas and semicolons
        .rule("comma-dangle", |r| r.env_default().arg("always-multiline"))
        .rule("comma-spacing", |r| {
            r.env_default()
                .arg(record([("before", false), ("after", true)]))
        })
        .rule("semi", |r| r.env_default().arg("never"))
        .rule("semi-spacing", |r| r.env_default())
        // Indentation and line format
        .rule("indent", |r| {
            r.env_default()
                .arg(INDENT_WIDTH)
                .arg(record([("SwitchCase", 1_i64)]))
        })
        .rule("no-tabs", |r| r.env_default())
        .rule("max-len", |r| r.off())
        .rule("no-trailing-spaces", |r| r.env_default())
        .rule("eol-last", |r| r.env_default().arg("never"))
        .rule("max-statements-per-line", |r| {
            r.warn().arg(record([("max", 1_i64)]))
        })
        .rule("no-multiple-empty-lines", |r| {
            r.warn()
                .arg(record([("max", 3_i64), ("maxEOF", 0), ("maxBOF", 0)]))
        })
        // Line endings are normalized by version control.
        .rule("linebreak-style", |r| r.off())
        .rule("unicode-bom", |r| r.env_default().arg("never"))
        // Inline whitespace
        .rule("keyword-spacing", |r| {
            r.env_default()
                .arg(record([("before", true), ("after", true)]))
        })
        .rule("space-infix-ops", |r| {
            r.env_default().arg(record([("int32Hint", false)]))
        })
        .rule("space-unary-ops", |r| {
            r.env_default()
                .arg(record([("words", true), ("nonwords", false)]))
        })
        .rule("no-multi-spaces", |r| {
            r.env_default().arg(record([("ignoreEOLComments", true)]))
        })
        // Comments
        .rule("lines-around-comment", |r| r.off())
        .rule("capitalized-comments", |r| r.off())
        .rule("spaced-comment", |r| {
            r.warn().arg("always").arg(record([
                ("markers", list(["*", "#region", "#endregion"])),
                ("block", record([("balanced", true)])),
            ]))
        })
        // Confusing formatting
        .rule("no-mixed-operators", |r| r.error())
        .rule("no-unexpected-multiline", |r| r.error())
        .rule("new-parens", |r| r.env_default().arg("always"))
        .rule("newline-per-chained-call", |r| {
            r.env_default()
                .arg(record([("ignoreChainWithDepth", 2_i64)]))
        })
        // Strings and quotes
        .rule("quotes", |r| {
            r.env_default().arg("single").arg(record([
                ("avoidEscape", true),
                ("allowTemplateLiterals", true),
            ]))
        })
        .rule("template-curly-spacing", |r| r.env_default().arg("always"))
        // Objects and arrays
        .rule("computed-property-spacing", |r| r.env_default().arg("never"))
        .rule("no-useless-computed-key", |r| r.env_default())
        .rule("no-new-object", |r| r.env_default())
        .rule("dot-location", |r| r.env_default().arg("property"))
        .rule("dot-notation", |r| r.env_default())
        .rule("object-curly-spacing", |r| r.env_default().arg("always"))
        .rule("object-curly-newline", |r| {
            r.env_default().arg(record([
                ("multiline", OptionValue::from(true)),
                ("minProperties", OptionValue::from(MIN_ITEMS_FOR_LINE_BREAK)),
            ]))
        })
        .rule("object-property-newline", |r| r.env_default())
        .rule("key-spacing", |r| {
            r.env_default().arg(record([
                ("beforeColon", OptionValue::from(false)),
                ("afterColon", OptionValue::from(true)),
                ("mode", OptionValue::from("strict")),
            ]))
        })
        .rule("no-whitespace-before-property", |r| r.env_default())
        .rule("quote-props", |r| r.warn().arg("as-needed"))
        // 'consistent' clashes with objects mixing plain properties and
        // shorthand methods.
        .rule("object-shorthand", |r| r.env_default().arg("methods"))
        .rule("rest-spread-spacing", |r| r.env_default().arg("never"))
        .rule("no-array-constructor", |r| r.env_default())
        .rule("array-callback-return", |r| r.env_default())
        .rule("array-bracket-newline", |r| {
            r.env_default().arg(record([
                ("multiline", OptionValue::from(true)),
                ("minItems", OptionValue::from(MIN_ITEMS_FOR_LINE_BREAK)),
            ]))
        })
        .rule("array-element-newline", |r| {
            r.env_default().arg(record([
                ("multiline", OptionValue::from(true)),
                ("minItems", OptionValue::from(MIN_ITEMS_FOR_LINE_BREAK)),
            ]))
        })
        .rule("array-bracket-spacing", |r| {
            r.env_default()
                .arg("always")
                .arg(record([("singleValue", true)]))
        })
        // Blocks and functions
        .rule("no-empty", |r| r.env_default())
        .rule("block-spacing", |r| r.env_default().arg("always"))
        .rule("padded-blocks", |r| r.env_default().arg("never"))
        .rule("brace-style", |r| {
            r.env_default()
                .arg("1tbs")
                .arg(record([("allowSingleLine", false)]))
        })
        .rule("space-before-blocks", |r| r.env_default().arg("always"))
        .rule("space-in-parens", |r| r.env_default().arg("never"))
        .rule("func-call-spacing", |r| r.env_default().arg("never"))
        .rule("function-call-argument-newline", |r| {
            r.env_default().arg("consistent")
        })
        .rule("function-paren-newline", |r| r.env_default().arg("consistent"))
        .rule("max-params", |r| r.warn().arg(record([("max", 3_i64)])))
        .rule("space-before-function-paren", |r| {
            r.env_default().arg(record([
                ("anonymous", "never"),
                ("named", "never"),
                ("asyncArrow", "always"),
            ]))
        })
        .rule("template-tag-spacing", |r| r.env_default().arg("always"))
        .rule("generator-star-spacing", |r| {
            r.env_default()
                .arg(record([("before", true), ("after", false)]))
        })
        .rule("prefer-spread", |r| r.warn())
        // Anonymous and arrow functions
        .rule("implicit-arrow-linebreak", |r| r.env_default().arg("beside"))
        .rule("wrap-iife", |r| r.env_default())
        .rule("arrow-body-style", |r| r.warn().arg("as-needed"))
        .rule("arrow-parens", |r| r.warn().arg("always"))
        .rule("arrow-spacing", |r| {
            r.env_default()
                .arg(record([("before", true), ("after", true)]))
        })
        // Classes
        .rule("lines-between-class-members", |r| {
            r.env_default()
                .arg("always")
                .arg(record([("exceptAfterSingleLine", true)]))
        })
        .rule("new-cap", |r| r.warn())
        .rule("no-useless-constructor", |r| r.env_default())
        // Loops
        .rule("no-continue", |r| r.warn())
        // Conditions and ternaries
        .rule("multiline-ternary", |r| r.env_default().arg("always-multiline"))
        .rule("no-lonely-if", |r| r.env_default())
        .rule("no-unneeded-ternary", |r| r.env_default())
        .rule("operator-linebreak", |r| r.env_default().arg("before"))
        .rule("yoda", |r| r.env_default().arg("never"))
        // Switch/case
        .rule("default-case", |r| {
            r.warn().arg(record([("commentPattern", "default")]))
        })
        .rule("default-case-last", |r| r.env_default())
        .rule("no-fallthrough", |r| {
            r.warn().arg(record([("commentPattern", "break")]))
        })
        .rule("switch-colon-spacing", |r| {
            r.env_default()
                .arg(record([("before", false), ("after", true)]))
        })
        // Plugin: newline-destructuring
        .rule("newline-destructuring/newline", |r| {
            r.env_default()
                .arg(record([("items", MIN_ITEMS_FOR_LINE_BREAK - 1)]))
        })
        // Plugin: import-newlines
        .rule("import-newlines/enforce", |r| {
            r.env_default().arg(record([
                ("items", OptionValue::from(MIN_ITEMS_FOR_LINE_BREAK - 1)),
                ("semi", OptionValue::from(false)),
            ]))
        })
        // Plugin: import
        .rule("import/extensions", |r| {
            r.env_default()
                .arg("always")
                .arg(record([("ignorePackages", true)]))
        })
}

#[allow(clippy::too_many_lines)]
fn template_rules(builder: PolicyBuilder) -> PolicyBuilder {
    builder
        // Vue: global
        .rule("vue/component-api-style", |r| {
            r.warn()
                .arg(list(["composition-vue2", "options", "script-setup"]))
        })
        // Vue: HTML
        .rule("vue/html-indent", |r| r.env_default().arg(INDENT_WIDTH))
        .rule("vue/html-self-closing", |r| {
            r.env_default()
                .arg(record([("html", record([("void", "any")]))]))
        })
        .rule("vue/no-v-html", |r| r.off())
        .rule("vue/html-closing-bracket-newline", |r| {
            r.env_default().arg(record([
                ("singleline", "never"),
                ("multiline", "always"),
            ]))
        })
        .rule("vue/html-quotes", |r| {
            r.env_default()
                .arg("double")
                .arg(record([("avoidEscape", true)]))
        })
        .rule("vue/max-attributes-per-line", |r| {
            r.env_default().arg(record([
                ("singleline", INDENT_WIDTH),
                ("multiline", 1),
            ]))
        })
        .rule("vue/multiline-html-element-content-newline", |r| {
            r.env_default()
        })
        .rule("vue/mustache-interpolation-spacing", |r| {
            r.env_default().arg("always")
        })
        .rule("vue/no-multi-spaces", |r| {
            r.env_default().arg(record([("ignoreProperties", true)]))
        })
        .rule("vue/no-spaces-around-equal-signs-in-attribute", |r| {
            r.env_default()
        })
        .rule("vue/require-explicit-emits", |r| r.env_default())
        .rule("vue/require-prop-types", |r| r.env_default())
        .rule("vue/v-bind-style", |r| r.env_default().arg("shorthand"))
        .rule("vue/v-on-style", |r| r.env_default().arg("shorthand"))
        .rule("vue/attributes-order", |r| r.env_default())
        .rule("vue/html-button-has-type", |r| r.warn())
        .rule("vue/order-in-components", |r| r.env_default())
        .rule("vue/component-tags-order", |r| {
            r.env_default()
                .arg(record([("order", list(["script", "template", "style"]))]))
        })
        .rule("vue/component-definition-name-casing", |r| r.env_default())
        .rule("vue/block-tag-newline", |r| {
            r.env_default().arg(record([
                ("singleline", "consistent"),
                ("multiline", "always"),
            ]))
        })
        .rule("vue/component-name-in-template-casing", |r| {
            r.env_default().arg("PascalCase")
        })
        .rule("vue/html-comment-content-newline", |r| {
            r.env_default().arg(record([
                ("singleline", "never"),
                ("multiline", "always"),
            ]))
        })
        .rule("vue/html-comment-content-spacing", |r| {
            r.env_default().arg("always")
        })
        .rule("vue/html-comment-indent", |r| r.env_default().arg(INDENT_WIDTH))
        .rule("vue/no-bare-strings-in-template", |r| {
            r.warn()
                .arg(record([("allowlist", list(["Slot default HTML"]))]))
        })
        .rule("vue/no-template-target-blank", |r| r.env_default())
        .rule("vue/no-static-inline-styles", |r| r.warn())
        .rule("vue/v-for-delimiter-style", |r| r.warn().arg("in"))
        .rule("vue/v-on-event-hyphenation", |r| {
            r.warn().arg("always").arg(record([("autofix", false)]))
        })
        .rule("vue/v-on-function-call", |r| r.warn().arg("never"))
        .rule("vue/no-useless-mustaches", |r| r.env_default())
        .rule("vue/no-child-content", |r| {
            r.env_default()
                .arg(record([("additionalDirectives", list(["t"]))]))
        })
        .rule("vue/prefer-separate-static-class", |r| r.warn())
        .rule("vue/no-v-text-v-html-on-component", |r| r.error())
        // Vue: script
        .rule("vue/match-component-file-name", |r| {
            r.env_default().arg(record([
                ("extensions", list(["vue"])),
                ("shouldMatchCase", OptionValue::from(true)),
            ]))
        })
        .rule("vue/new-line-between-multi-line-property", |r| {
            r.warn().arg(record([(
                "minLineOfMultilineProperty",
                MIN_ITEMS_FOR_LINE_BREAK,
            )]))
        })
        .rule("vue/no-potential-component-option-typo", |r| r.warn())
        .rule("vue/no-reserved-component-names", |r| {
            r.error().arg(record([
                ("disallowVueBuiltInComponents", true),
                ("disallowVue3BuiltInComponents", true),
            ]))
        })
        .rule("vue/no-unused-properties", |r| {
            r.warn().arg(record([(
                "groups",
                list(["props", "data", "computed", "methods"]),
            )]))
        })
        // Too many false positives from mixins and Vuex map helpers.
        .rule("vue/no-undef-properties", |r| r.off())
        .rule("vue/no-unused-components", |r| r.env_default())
        .rule("vue/no-undef-components", |r| {
            r.env_default().arg(record([(
                "ignorePatterns",
                list(GLOBAL_COMPONENT_PATTERNS.iter().copied()),
            )]))
        })
        .rule("vue/padding-line-between-blocks", |r| r.warn().arg("always"))
        .rule("vue/require-name-property", |r| r.env_default())
        .rule("vue/no-expose-after-await", |r| r.env_default())
        .rule("vue/component-options-name-casing", |r| {
            r.env_default().arg("PascalCase")
        })
        // Temporarily disabled rules.
        // TODO: Re-enable vue/no-mutating-props once the prop-mutating
        // components are reworked.
        .rule("vue/custom-event-name-casing", |r| r.off())
        .rule("vue/no-mutating-props", |r| r.off())
        .rule("vue/no-lone-template", |r| r.off())
        .rule("vue/one-component-per-file", |r| r.off())
}

fn override_scopes(builder: PolicyBuilder) -> PolicyBuilder {
    builder
        .scope(["*.spec.js", "tests/**/*.js"], |s| {
            s.rule("no-magic-numbers", |r| r.off())
                .rule("no-empty-function", |r| r.off())
                .rule("require-await", |r| r.off())
                // Safe in tests: separate scopes and arrow functions.
                .rule("no-loop-func", |r| r.off())
        })
        .scope(
            [
                "**/store/**/*.js",
                "**/stores/**/*.js",
                "*[Ss]tore.js",
                "src/modules/event/components/sectionComponents/analysis/**/*.js",
            ],
            |s| {
                // Vuex getters need the 4th argument to reach rootGetters.
                s.rule("max-params", |r| r.off())
            },
        )
        .scope(["**/tests/**/*.js"], |s| {
            // Mock files reassign module defaults.
            s.rule("no-import-assign", |r| r.off())
        })
        .scope(
            [
                "**/tests/_testData/_entityTypes.js",
                "**/src/components/IconSprite/spriteIcons.js",
            ],
            |s| {
                // Big constants kept in alphabetical order.
                s.rule("sort-keys", |r| {
                    r.warn().arg("asc").arg(record([
                        ("caseSensitive", false),
                        ("natural", true),
                    ]))
                })
            },
        )
}
