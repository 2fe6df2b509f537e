mod settings_class;

pub use settings_class::SettingsClass;

/// Header emitted at the top of every generated file.
pub const GENERATED_HEADER: &str = "\
// <auto-generated>
//     This code was generated by settgen. Manual changes to this file
//     will be lost when the file is regenerated.
// </auto-generated>
";
