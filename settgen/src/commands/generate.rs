use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use settgen_codegen_csharp::{GenerationRequest, Generator};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Name of the generated settings class
    #[arg(short, long)]
    pub class_name: String,

    /// Namespace wrapping the generated class
    #[arg(short, long)]
    pub namespace: String,

    /// Output directory for the generated file
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview the generated class without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// .setting files to merge, in order
    pub setting_files: Vec<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let request = GenerationRequest {
            class_name: self.class_name.clone(),
            namespace: self.namespace.clone(),
            setting_files: self.setting_files.clone(),
        };
        let generator = Generator::new(&request);

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            self.run_generation(&generator)
        }
    }

    fn run_generation(&self, generator: &Generator) -> Result<()> {
        let path = generator.generate(&self.output).unwrap_or_exit();

        println!("Generated: {}", path.display());
        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let file = generator.preview().unwrap_or_exit();

        println!("── {} ──", file.file_name);
        println!("{}", file.content);
        Ok(())
    }
}
