//! Snapshot tests for the rendered settings class.
//!
//! These verify the exact text of the generated C# file, which is what the
//! build consuming the artifact compiles.

use settgen_codegen_csharp::{GeneratedFile, files::SettingsClass};
use settgen_schema::parse_str;

/// Parse a definition and render it into a class, as the generator does.
fn render_class(class_name: &str, namespace: &str, definition: &str) -> String {
    let declarations = parse_str(definition).expect("definition should parse");
    SettingsClass::new(class_name, namespace, declarations).render()
}

#[test]
fn test_empty_definition_renders_empty_class() {
    let content = render_class("MySettingEmpty", "MyNamespace", "");
    insta::assert_snapshot!(content, @r##"
// <auto-generated>
//     This code was generated by settgen. Manual changes to this file
//     will be lost when the file is regenerated.
// </auto-generated>

using System;

namespace MyNamespace
{
    public class MySettingEmpty
    {
    }
}
"##);
}

#[test]
fn test_string_property() {
    let content = render_class("MystringPropSetting", "MyNamespace", "Greeting:string:hello\n");
    insta::assert_snapshot!(content, @r##"
// <auto-generated>
//     This code was generated by settgen. Manual changes to this file
//     will be lost when the file is regenerated.
// </auto-generated>

using System;

namespace MyNamespace
{
    public class MystringPropSetting
    {
        public static string Greeting { get; } = "hello";
    }
}
"##);
}

#[test]
fn test_int_property() {
    let content = render_class("MyintPropSetting", "MyNamespace", "Retries:int:3\n");
    insta::assert_snapshot!(content, @r##"
// <auto-generated>
//     This code was generated by settgen. Manual changes to this file
//     will be lost when the file is regenerated.
// </auto-generated>

using System;

namespace MyNamespace
{
    public class MyintPropSetting
    {
        public static int Retries { get; } = 3;
    }
}
"##);
}

#[test]
fn test_bool_property() {
    let content = render_class("MyboolPropSetting", "MyNamespace", "Verbose:bool:true\n");
    insta::assert_snapshot!(content, @r##"
// <auto-generated>
//     This code was generated by settgen. Manual changes to this file
//     will be lost when the file is regenerated.
// </auto-generated>

using System;

namespace MyNamespace
{
    public class MyboolPropSetting
    {
        public static bool Verbose { get; } = true;
    }
}
"##);
}

#[test]
fn test_guid_property() {
    let content = render_class(
        "MyguidPropSetting",
        "MyNamespace",
        "TenantId:guid:158b4088-63d8-4e4e-93e0-2ff4d13d6764\n",
    );
    insta::assert_snapshot!(content, @r##"
// <auto-generated>
//     This code was generated by settgen. Manual changes to this file
//     will be lost when the file is regenerated.
// </auto-generated>

using System;

namespace MyNamespace
{
    public class MyguidPropSetting
    {
        public static System.Guid TenantId { get; } = new System.Guid("158b4088-63d8-4e4e-93e0-2ff4d13d6764");
    }
}
"##);
}

#[test]
fn test_long_property() {
    let content = render_class("MylongPropSetting", "MyNamespace", "MaxBytes:long:5000000000\n");
    insta::assert_snapshot!(content, @r##"
// <auto-generated>
//     This code was generated by settgen. Manual changes to this file
//     will be lost when the file is regenerated.
// </auto-generated>

using System;

namespace MyNamespace
{
    public class MylongPropSetting
    {
        public static long MaxBytes { get; } = 5000000000L;
    }
}
"##);
}

#[test]
fn test_multiple_properties_in_declaration_order() {
    let content = render_class(
        "MyCompletePropSetting",
        "MyNamespace",
        "Greeting:string:hello\nRetries:int:3\nVerbose:bool:false\nTenantId:guid:158b4088-63d8-4e4e-93e0-2ff4d13d6764\nMaxBytes:long:5000000000\n",
    );
    insta::assert_snapshot!(content, @r##"
// <auto-generated>
//     This code was generated by settgen. Manual changes to this file
//     will be lost when the file is regenerated.
// </auto-generated>

using System;

namespace MyNamespace
{
    public class MyCompletePropSetting
    {
        public static string Greeting { get; } = "hello";
        public static int Retries { get; } = 3;
        public static bool Verbose { get; } = false;
        public static System.Guid TenantId { get; } = new System.Guid("158b4088-63d8-4e4e-93e0-2ff4d13d6764");
        public static long MaxBytes { get; } = 5000000000L;
    }
}
"##);
}
