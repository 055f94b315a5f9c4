//! Interactive questions asked before the template is downloaded

use dialoguer::{Input, Select};
use hatch_projects::types::{validate_version, DEFAULT_VERSION};
use hatch_projects::{InitAnswers, TemplateFlavor};

use super::error::CreateError;

/// Prompt texts, in the order they are asked
struct Questions {
    template: &'static str,
    author: &'static str,
    description: &'static str,
    version: &'static str,
}

const QUESTIONS: Questions = Questions {
    template: "Select a template",
    author: "Author",
    description: "Description",
    version: "Version",
};

/// Ask the questions on the terminal
///
/// Blocking; fails when stderr is not a terminal.
pub(super) fn collect() -> Result<InitAnswers, CreateError> {
    let flavors = TemplateFlavor::all();
    let names: Vec<&str> = flavors.iter().map(TemplateFlavor::as_str).collect();

    let selection = Select::new()
        .with_prompt(QUESTIONS.template)
        .items(&names)
        .default(0)
        .interact()
        .map_err(CreateError::Prompt)?;

    let author: String = Input::new()
        .with_prompt(QUESTIONS.author)
        .allow_empty(true)
        .interact_text()
        .map_err(CreateError::Prompt)?;

    let description: String = Input::new()
        .with_prompt(QUESTIONS.description)
        .allow_empty(true)
        .interact_text()
        .map_err(CreateError::Prompt)?;

    let version: String = Input::new()
        .with_prompt(QUESTIONS.version)
        .default(DEFAULT_VERSION.to_string())
        .validate_with(|input: &String| validate_version(input))
        .interact_text()
        .map_err(CreateError::Prompt)?;

    Ok(InitAnswers {
        template: flavors[selection],
        author: author.trim().to_string(),
        description: description.trim().to_string(),
        version,
    })
}
