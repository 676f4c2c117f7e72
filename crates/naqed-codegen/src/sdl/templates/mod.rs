pub mod input_tmpl;
pub mod object_tmpl;
pub mod operation_tmpl;

use itertools::Itertools;

fn render_block(keyword: &str, name: &str, lines: &[String]) -> String {
    if lines.is_empty() {
        return format!("{keyword} {name} {{\n}}");
    }

    format!("{keyword} {name} {{\n{}\n}}", lines.iter().join("\n"))
}
