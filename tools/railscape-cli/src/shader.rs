//! Shader command - print shader variant sources

use anyhow::Result;
use clap::Args;
use railscape_core::material::{ShaderVariant, shader_source};

/// Arguments for the shader command
#[derive(Args, Debug)]
pub struct ShaderArgs {
    /// Variant name: phong, ring or rotating_texture
    pub variant: ShaderVariant,

    /// Print only the vertex stage
    #[arg(long, conflicts_with = "fragment")]
    pub vertex: bool,

    /// Print only the fragment stage
    #[arg(long)]
    pub fragment: bool,
}

/// Execute the shader command
pub fn execute(args: ShaderArgs) -> Result<()> {
    let source = shader_source(args.variant);
    if !args.fragment {
        println!("// {} vertex", args.variant);
        println!("{}", source.vertex);
    }
    if !args.vertex {
        println!("// {} fragment", args.variant);
        println!("{}", source.fragment);
    }
    Ok(())
}
