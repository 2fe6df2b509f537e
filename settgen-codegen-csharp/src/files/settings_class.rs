//! The generated settings class file.

use settgen_schema::SettingDeclaration;

use super::GENERATED_HEADER;
use crate::{
    GeneratedFile,
    type_mapper::{csharp_literal, csharp_type},
};

/// The `{ClassName}.generated.cs` file: one read-only property per setting
/// declaration, in collection order.
pub struct SettingsClass {
    pub class_name: String,
    pub namespace: String,
    pub declarations: Vec<SettingDeclaration>,
}

impl SettingsClass {
    pub fn new(
        class_name: impl Into<String>,
        namespace: impl Into<String>,
        declarations: Vec<SettingDeclaration>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            namespace: namespace.into(),
            declarations,
        }
    }
}

impl GeneratedFile for SettingsClass {
    fn file_name(&self) -> String {
        format!("{}.generated.cs", self.class_name)
    }

    fn render(&self) -> String {
        let mut out = String::from(GENERATED_HEADER);
        out.push('\n');
        out.push_str("using System;\n\n");
        out.push_str(&format!("namespace {}\n{{\n", self.namespace));
        out.push_str(&format!(
            "    public class {}\n    {{\n",
            self.class_name
        ));
        for decl in &self.declarations {
            out.push_str(&format!(
                "        public static {} {} {{ get; }} = {};\n",
                csharp_type(decl.ty),
                decl.name,
                csharp_literal(decl.ty, &decl.default_value)
            ));
        }
        out.push_str("    }\n}\n");
        out
    }
}
