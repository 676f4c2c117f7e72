use itertools::Itertools;
use naqed_core::Operation;

use super::render_block;
use crate::errors::CodegenError;
use crate::functions::CommonFunctions;

/// Renders the root `type <root>` block, or `None` when there are no operations.
pub fn render_operations<'a>(
    funcs: &CommonFunctions,
    indent: &str,
    root: &str,
    operations: impl IntoIterator<Item = &'a Operation>,
) -> Result<Option<String>, CodegenError> {
    let lines = operations
        .into_iter()
        .map(|op| Ok(format!("{indent}{}", render_operation(funcs, root, op)?)))
        .collect::<Result<Vec<_>, CodegenError>>()?;

    if lines.is_empty() {
        return Ok(None);
    }

    Ok(Some(render_block("type", root, &lines)))
}

pub fn render_operation(
    funcs: &CommonFunctions,
    root: &str,
    op: &Operation,
) -> Result<String, CodegenError> {
    let path = format!("{root}.{}", op.name);
    let result_type = funcs.format_output_type(&path, &op.spec)?;

    let args = op
        .spec
        .args()
        .into_iter()
        .flatten()
        .map(|(arg, spec)| {
            let input_type = funcs.format_input_type(&format!("{path}.{arg}"), spec)?;
            Ok(format!("{arg}: {input_type}"))
        })
        .collect::<Result<Vec<_>, CodegenError>>()?;

    if args.is_empty() {
        Ok(format!("{}: {result_type}", op.name))
    } else {
        Ok(format!("{}({}): {result_type}", op.name, args.iter().join(", ")))
    }
}
