use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use settgen_schema::collect_files;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// .setting files to validate, in order
    pub setting_files: Vec<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let declarations = collect_files(&self.setting_files).unwrap_or_exit();

        println!(
            "OK: {} settings across {} files",
            declarations.len(),
            self.setting_files.len()
        );
        for decl in &declarations {
            println!("  {}: {} = {}", decl.name, decl.ty.as_str(), decl.default_value);
        }
        Ok(())
    }
}
