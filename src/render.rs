//! Terraform key-pair template rendering.
//!
//! The template is fixed: a provider block, one `aws_key_pair` resource, and an
//! output exposing the key pair name. Parameter values are interpolated
//! verbatim; quotes or backslashes in them are not escaped for HCL.

use crate::error::Result;
use crate::fs::create_and_write;
use crate::params::RenderParameters;
use crate::template::{render_template, vars};
use std::path::{Path, PathBuf};

/// File name the declaration is written to, relative to the target directory.
pub const OUTPUT_FILE: &str = "test.tf";

/// Key-pair declaration. `{{`/`}}` are literal HCL braces.
const KEY_PAIR_TEMPLATE: &str = r#"provider "aws" {{
  region = "{region}"  # Replace with your desired AWS region
}}

resource "aws_key_pair" "example" {{
  key_name   = "{key_name}"
  public_key = file("{public_key_path}")
}}

output "key_pair_name" {{
  value = aws_key_pair.example.key_name
}}
"#;

/// Render the key-pair declaration for `params`.
pub fn render(params: &RenderParameters) -> Result<String> {
    let variables = vars([
        ("region", params.region()),
        ("key_name", params.key_name()),
        ("public_key_path", params.public_key_path()),
    ]);
    Ok(render_template(KEY_PAIR_TEMPLATE, &variables)?)
}

/// Render and write `test.tf` into `dir`, returning the path written.
///
/// The template is rendered before the file is touched, so a rendering
/// failure leaves any existing output intact.
pub fn render_to_dir(params: &RenderParameters, dir: &Path) -> Result<PathBuf> {
    let content = render(params)?;
    let path = dir.join(OUTPUT_FILE);
    create_and_write(&path, &content)?;
    Ok(path)
}
