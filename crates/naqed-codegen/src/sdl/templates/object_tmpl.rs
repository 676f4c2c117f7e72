use naqed_core::FieldMap;

use super::render_block;
use crate::errors::CodegenError;
use crate::functions::CommonFunctions;

pub fn render_object(
    funcs: &CommonFunctions,
    indent: &str,
    name: &str,
    fields: &FieldMap,
) -> Result<String, CodegenError> {
    let lines = fields
        .iter()
        .map(|(field, spec)| {
            let output_type = funcs.format_output_type(&format!("{name}.{field}"), spec)?;
            Ok(format!("{indent}{field}: {output_type}"))
        })
        .collect::<Result<Vec<_>, CodegenError>>()?;

    Ok(render_block("type", name, &lines))
}
