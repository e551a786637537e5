use anyhow::{Context, Result};
use helixfile_codec::{JsonModelStore, Model, ModelStore};
use std::path::Path;

use crate::printing::print_model;

pub fn show_model(path: &Path, json: bool) -> Result<()> {
    let model: Model = JsonModelStore
        .load(path)
        .context("Failed to load model")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        print_model(&model);
    }
    Ok(())
}
