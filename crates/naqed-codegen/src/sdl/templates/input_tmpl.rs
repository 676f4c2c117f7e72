use super::render_block;
use crate::synthesizer::InputTypeDef;

pub fn render_input(indent: &str, def: &InputTypeDef) -> String {
    let lines = def
        .fields
        .iter()
        .map(|(field, input_type)| format!("{indent}{field}: {input_type}"))
        .collect::<Vec<_>>();

    render_block("input", &def.name, &lines)
}

#[cfg(test)]
mod test {
    use indexmap::IndexSet;
    use pretty_assertions::assert_eq;

    use super::render_input;
    use crate::synthesizer::InputTypeDef;

    #[test]
    fn renders_resolved_fields() {
        let def = InputTypeDef {
            name: "AInput".into(),
            source: "A".into(),
            fields: vec![
                ("name".into(), "String".into()),
                ("b".into(), "[BInput]".into()),
            ],
            refs: IndexSet::from_iter(["B".to_string()]),
        };

        assert_eq!(
            render_input("\t", &def),
            "input AInput {\n\tname: String\n\tb: [BInput]\n}"
        );
    }
}
