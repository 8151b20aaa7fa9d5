use ide::{FormatConfig, FormatOutput, Selection, format};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Reindents by brace depth, four spaces per level. Blank lines stay empty.
///
/// Same rules as `brace_indent` in `src/tests/format_dsl.rs`, which is not visible to
/// integration tests.
fn brace_indent() -> impl FnMut(usize, &str) -> Option<String> {
    let mut depth = 0usize;
    move |_: usize, line: &str| -> Option<String> {
        let trimmed = line.trim();
        if trimmed.starts_with('}') {
            depth = depth.saturating_sub(1);
        }
        let out = if trimmed.is_empty() {
            String::new()
        } else {
            format!("{}{}", "    ".repeat(depth), trimmed)
        };
        if trimmed.ends_with('{') {
            depth += 1;
        }
        Some(out)
    }
}

/// Formatted source with `$n` at each offset, followed by a summary of the pass.
fn render(out: &FormatOutput) -> String {
    let mut text = String::new();
    for (at, ch) in out.source.chars().enumerate() {
        push_markers(&mut text, &out.offsets, at);
        text.push(ch);
    }
    push_markers(&mut text, &out.offsets, out.source.chars().count());

    let positions: Vec<String> = out
        .positions()
        .iter()
        .map(|p| format!("{}:{}", p.line, p.column))
        .collect();

    format!(
        "{}\n---\nchanged: {:?}\npositions: {}\nselections: {:?}",
        text,
        out.changed_lines,
        positions.join(" "),
        out.selections()
    )
}

fn push_markers(text: &mut String, offsets: &[usize], at: usize) {
    for (index, &offset) in offsets.iter().enumerate() {
        if offset == at {
            text.push_str(&format!("${}", index));
        }
    }
}

#[test]
fn format_snapshot_reindent_with_selections() {
    init_tracing();
    let source = "int main() {\nif (x) {\n      y();\n  }\nreturn 0;\n}";
    // Caret just before `y`, and a selection from the start of `if` to the end of `return 0;`.
    let selections = [Selection::caret(28), Selection::new(13, 46)];

    let out = format(
        source,
        &selections,
        &mut brace_indent(),
        &FormatConfig::default(),
    )
    .unwrap_or_else(|e| panic!("format failed: {}", e));

    insta::assert_snapshot!(render(&out), @r"
    int main() {
    $2    if (x) {
            y();$0$1
        }
        return 0;$3
    }
    ---
    changed: [1, 2, 3, 4]
    positions: 2:12 2:12 1:0 4:13
    selections: [Selection { start: 38, end: 38 }, Selection { start: 13, end: 58 }]
    ");
}

#[test]
fn format_blank_line_is_emptied_not_indented() {
    init_tracing();
    let source = "fn f() {\n   \n  x();\n}";

    let out = format(
        source,
        &[Selection::caret(19)],
        &mut brace_indent(),
        &FormatConfig::default(),
    )
    .unwrap_or_else(|e| panic!("format failed: {}", e));

    assert_eq!(out.source, "fn f() {\n\n    x();\n}");
    assert_eq!(out.offsets, vec![18, 18]);
}
