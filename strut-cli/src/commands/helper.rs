use strut_core::{path_params_builder, GeneratorSettings};

use super::CmdResult;

pub fn run(settings: &GeneratorSettings) -> CmdResult {
    print!("{}", render(settings)?);
    Ok(())
}

pub fn render(settings: &GeneratorSettings) -> CmdResult<String> {
    let mut bundle = path_params_builder(&settings.helper_source)?;
    bundle.push('\n');
    Ok(bundle)
}
