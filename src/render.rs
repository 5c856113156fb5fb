//! Generated C source assembly.
//!
//! Each option becomes two fragments: a `struct option` initializer for the
//! long-option table and a `case` body for the value-reporting switch. The
//! short-option string accumulates alongside (`f:v` style). The fragments
//! are substituted into a fixed program template by placeholder replacement.

use crate::config::{ArgKind, OptionSpec};

/// Complete `getopt_long` test program. Must stay `-Wall -Werror` clean —
/// the whole point of the verifier is that this compiles without noise.
const TEMPLATE: &str = r#"/* Generated by getopt-gen. Do not edit. */
#include <getopt.h>
#include <stdio.h>
#include <stdlib.h>

int
main (int argc, char **argv)
{
    int c;

    while (1) {
        static struct option long_options[] = {
${option_defs}
            {0, 0, 0, 0}
        };
        int option_index = 0;

        c = getopt_long (argc, argv, "${optstring}", long_options, &option_index);
        if (c == -1)
            break;

        switch (c) {
${option_tests}
            case '?':
                /* getopt_long already printed an error message. */
                break;

            default:
                printf ("?? getopt returned character code 0%o ??\n", c);
        }
    }

    if (optind < argc) {
        printf ("non-option ARGV-elements: ");
        while (optind < argc)
            printf ("%s ", argv[optind++]);
        putchar ('\n');
    }

    exit (EXIT_SUCCESS);
}
"#;

/// Long-option table entry, aligned into fixed-width columns
/// (name 15, kind 20) so the table reads as a grid.
fn definition(opt: &OptionSpec) -> String {
    format!(
        "{{{:>15}, {:>20}, 0, '{}'}}",
        format!("\"{}\"", opt.name),
        opt.kind.symbol(),
        opt.short
    )
}

/// `case` body reporting what the parser saw for this option.
fn test_case(opt: &OptionSpec) -> String {
    let c = opt.short;
    let mut lines = vec![format!("            case '{c}':")];
    match opt.kind {
        ArgKind::None => {
            lines.push(format!("                puts (\"option -{c} was given\\n\");"));
        }
        ArgKind::Required => {
            lines.push(format!(
                "                printf (\"option -{c} was given with value '%s'\\n\", optarg);"
            ));
        }
        ArgKind::Optional => {
            if !opt.values.is_empty() {
                lines.push(format!(
                    "                /* accepted values: {} */",
                    opt.values.join(", ")
                ));
            }
            lines.push("                if (optarg)".to_string());
            lines.push(format!(
                "                    printf (\"option -{c} was given with value '%s'\\n\", optarg);"
            ));
            lines.push("                else".to_string());
            lines.push(format!(
                "                    printf (\"option -{c} was given without value\\n\");"
            ));
        }
    }
    lines.push("                break;".to_string());
    lines.push(String::new());
    lines.join("\n")
}

/// Short-option string for the sorted list: bare char for `no_argument`,
/// `c:` for `required_argument`, `c::` for `optional_argument`.
fn optstring(options: &[OptionSpec]) -> String {
    let mut s = String::new();
    for opt in options {
        s.push(opt.short);
        s.push_str(opt.kind.optstring_suffix());
    }
    s
}

/// Render the full program for an already-sorted option list.
pub fn render(options: &[OptionSpec]) -> String {
    let mut defs = String::new();
    let mut tests = String::new();
    for opt in options {
        defs.push_str("            ");
        defs.push_str(&definition(opt));
        defs.push_str(",\n");
        tests.push_str(&test_case(opt));
        tests.push('\n');
    }

    TEMPLATE
        .replace("${option_defs}\n", &defs)
        .replace("${optstring}", &optstring(options))
        .replace("${option_tests}\n", &tests)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(name: &str, abbreviation: &str, kind: ArgKind) -> OptionSpec {
        OptionSpec {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            short: abbreviation.chars().next().unwrap(),
            kind,
            values: Vec::new(),
        }
    }

    #[test]
    fn definition_is_column_aligned() {
        let def = definition(&opt("verbose", "v", ArgKind::None));
        assert_eq!(def, "{      \"verbose\",          no_argument, 0, 'v'}");
    }

    #[test]
    fn definition_long_name_overflows_column() {
        // Names longer than the column keep full width, no truncation
        let def = definition(&opt("enable-everything", "e", ArgKind::Required));
        assert!(def.starts_with("{\"enable-everything\","), "Got: {def}");
    }

    #[test]
    fn optstring_no_argument_is_bare() {
        let s = optstring(&[opt("verbose", "v", ArgKind::None)]);
        assert_eq!(s, "v");
    }

    #[test]
    fn optstring_required_has_one_colon() {
        let s = optstring(&[opt("file", "f", ArgKind::Required)]);
        assert_eq!(s, "f:");
    }

    #[test]
    fn optstring_optional_has_two_colons() {
        let s = optstring(&[opt("output", "o", ArgKind::Optional)]);
        assert_eq!(s, "o::");
    }

    #[test]
    fn optstring_length_is_monotonic() {
        let mut opts = Vec::new();
        let mut last = 0;
        for (i, kind) in [ArgKind::None, ArgKind::Required, ArgKind::Optional]
            .into_iter()
            .enumerate()
        {
            opts.push(opt("x", &((b'a' + i as u8) as char).to_string(), kind));
            let len = optstring(&opts).len();
            assert!(len > last);
            last = len;
        }
        // +1 for none, +2 for required, +3 for optional
        assert_eq!(last, 6);
    }

    #[test]
    fn test_case_no_argument_names_the_option() {
        let case = test_case(&opt("verbose", "v", ArgKind::None));
        assert!(case.contains("case 'v':"), "Got: {case}");
        assert!(case.contains("option -v was given"), "Got: {case}");
        assert!(!case.contains("optarg"), "Got: {case}");
    }

    #[test]
    fn test_case_required_reports_value() {
        let case = test_case(&opt("file", "f", ArgKind::Required));
        assert!(case.contains("printf (\"option -f was given with value '%s'\\n\", optarg);"));
    }

    #[test]
    fn test_case_optional_checks_presence() {
        let case = test_case(&opt("output", "o", ArgKind::Optional));
        assert!(case.contains("if (optarg)"), "Got: {case}");
        assert!(case.contains("without value"), "Got: {case}");
    }

    #[test]
    fn test_case_optional_lists_accepted_values() {
        let mut option = opt("color", "c", ArgKind::Optional);
        option.values = vec!["auto".to_string(), "never".to_string()];
        let case = test_case(&option);
        assert!(case.contains("/* accepted values: auto, never */"), "Got: {case}");
    }

    #[test]
    fn renders_two_option_program() {
        // Sorted input: f before v
        let opts = vec![
            opt("file", "f", ArgKind::Required),
            opt("verbose", "v", ArgKind::None),
        ];
        let source = render(&opts);

        assert_eq!(source.matches("case '").count(), 3); // f, v, and '?'
        assert_eq!(source.matches(", 0, '").count(), 2);
        assert!(source.contains("getopt_long (argc, argv, \"f:v\""), "Got: {source}");

        let f_def = source.find("'f'}").unwrap();
        let v_def = source.find("'v'}").unwrap();
        assert!(f_def < v_def);
    }

    #[test]
    fn rendered_program_has_no_placeholders_left() {
        let source = render(&[opt("verbose", "v", ArgKind::None)]);
        assert!(!source.contains("${"), "Got: {source}");
    }

    #[test]
    fn renders_empty_list() {
        let source = render(&[]);
        assert!(source.contains("getopt_long (argc, argv, \"\""), "Got: {source}");
        assert!(source.contains("{0, 0, 0, 0}"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let opts = vec![
            opt("file", "f", ArgKind::Required),
            opt("verbose", "v", ArgKind::None),
        ];
        assert_eq!(render(&opts), render(&opts));
    }
}
