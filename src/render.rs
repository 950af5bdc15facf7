//! Plain-text rendering of a built tree.

use crate::tree::{Node, TreeSummary};

const BRANCH: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
const LAST_BRANCH: &str = "\u{2514}\u{2500}\u{2500} "; // └──
const PIPE: &str = "\u{2502}   "; // │
const BLANK: &str = "    ";

/// Sanitize control characters to avoid terminal control-sequence injection.
fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Render the full diagram: the tree lines, a blank line, then the summary.
pub fn render(root: &Node) -> String {
    let mut out = render_lines(root).join("\n");
    out.push_str("\n\n");
    out.push_str(&summary_line(&root.summary()));
    out
}

/// Render the tree lines only, starting with the root's path.
///
/// Nodes are visited in pre-order. Each pending node carries the is-last
/// flags of every level from the root's children down to itself, so the
/// prefix cells come straight from that list without parent pointers.
pub fn render_lines(root: &Node) -> Vec<String> {
    let mut lines = vec![sanitize_terminal_text(&root.path.to_string_lossy())];

    let mut stack: Vec<(&Node, Vec<bool>)> = Vec::new();
    push_children(&mut stack, root, &[]);

    while let Some((node, lineage)) = stack.pop() {
        let Some((&is_last, ancestors)) = lineage.split_last() else {
            continue;
        };

        let mut line = String::new();
        for &ancestor_is_last in ancestors {
            line.push_str(if ancestor_is_last { BLANK } else { PIPE });
        }
        line.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        line.push_str(&entry_label(node));
        lines.push(line);

        push_children(&mut stack, node, &lineage);
    }

    lines
}

/// Push `node`'s children in reverse so the first child pops first.
fn push_children<'a>(stack: &mut Vec<(&'a Node, Vec<bool>)>, node: &'a Node, lineage: &[bool]) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate().rev() {
        let mut child_lineage = Vec::with_capacity(lineage.len() + 1);
        child_lineage.extend_from_slice(lineage);
        child_lineage.push(i + 1 == count);
        stack.push((child, child_lineage));
    }
}

fn entry_label(node: &Node) -> String {
    let safe_name = sanitize_terminal_text(&node.name);
    match &node.error {
        Some(err) => format!("{} [{}]", safe_name, sanitize_terminal_text(err)),
        None => safe_name,
    }
}

/// Format `"<D> directories, <F> files"` with singular forms for a count of 1.
pub fn summary_line(summary: &TreeSummary) -> String {
    let dirs = if summary.directories == 1 {
        "directory"
    } else {
        "directories"
    };
    let files = if summary.files == 1 { "file" } else { "files" };
    format!("{} {}, {} {}", summary.directories, dirs, summary.files, files)
}
