use naqed_core::BuiltinScalar;

use crate::functions::FormatTypeFuncs;
use crate::naming::DynInputNaming;

pub struct FormatTypeFunc {
    naming: DynInputNaming,
}

impl FormatTypeFunc {
    pub fn new(naming: DynInputNaming) -> Self {
        Self { naming }
    }
}

impl FormatTypeFuncs for FormatTypeFunc {
    fn format_kind_list(&self, representation: &str) -> String {
        format!("[{representation}]")
    }

    fn format_kind_scalar(&self, scalar: BuiltinScalar) -> String {
        scalar.sdl_name().to_string()
    }

    fn format_kind_object(&self, ref_name: &str) -> String {
        ref_name.to_string()
    }

    fn format_kind_input_object(&self, ref_name: &str) -> String {
        self.naming.input_name(ref_name)
    }
}
