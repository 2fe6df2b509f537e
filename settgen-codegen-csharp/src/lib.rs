//! C# code generator for settgen.
//!
//! Renders validated setting declarations into a single
//! `{ClassName}.generated.cs` file: one public class in one namespace, with
//! one typed read-only property per declared setting. Rendering is
//! deterministic so regeneration from the same inputs is byte-identical.

mod error;
mod file;
mod generator;
mod type_mapper;

pub mod files;

pub use error::{Error, Result};
pub use file::GeneratedFile;
pub use generator::{GenerationRequest, Generator, PreviewFile};
pub use type_mapper::{csharp_literal, csharp_type};
