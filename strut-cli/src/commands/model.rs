use std::path::Path;

use strut_core::{GeneratorSettings, HttpHelper};

use super::{load_service, CmdResult};

pub fn run(file: &Path, settings: &GeneratorSettings) -> CmdResult {
    println!("{}", render(file, settings)?);
    Ok(())
}

/// The service's [`HttpHelper`] as pretty-printed JSON.
pub fn render(file: &Path, settings: &GeneratorSettings) -> CmdResult<String> {
    let service = load_service(file)?;
    let helper = HttpHelper::new(&service, settings)?;
    Ok(serde_json::to_string_pretty(&helper)?)
}
