/// Reserved prefixes that give spec entry names their meaning.
///
/// Top-level names starting with the `mutation` marker (`~` by default) are
/// mutations, names starting with the `type_def` marker (`$`) are custom types.
/// Inside a dynamic entry, the `argument` marker followed by a lowercase letter
/// marks an argument and the `result` marker followed by an uppercase letter
/// marks the declared result type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    pub mutation: char,
    pub type_def: char,
    pub argument: char,
    pub result: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            mutation: '~',
            type_def: '$',
            argument: '$',
            result: '$',
        }
    }
}

impl Markers {
    pub fn mutation_name<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.mutation)
    }

    pub fn type_name<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.type_def)
    }

    pub fn argument_name<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.argument)
            .filter(|rest| rest.starts_with(|c: char| c.is_ascii_lowercase()))
    }

    pub fn result_name<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.result)
            .filter(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
    }
}
