//! `patternkit builder` — assemble an HTTP request.

use std::collections::BTreeMap;

use patternkit_core::prelude::*;

use crate::{
    cli::{BuilderArgs, Recipe},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: BuilderArgs, output: &OutputManager) -> CliResult<()> {
    let recipe = args.recipe;
    let request = match recipe {
        Some(recipe) => from_recipe(recipe)?,
        None if args.url.is_none() => {
            return Err(CliError::InvalidInput {
                message: "pass --recipe, or build manually starting with --url".into(),
                source: None,
            });
        }
        None => from_steps(args)?,
    };

    if output.is_json() {
        return output.json(&request);
    }

    output.print(&request.to_string())?;
    Ok(())
}

fn from_recipe(recipe: Recipe) -> PatternResult<HttpRequest> {
    let mut director = RequestDirector::new(HttpRequestBuilder::new());
    match recipe {
        Recipe::Get => director.build_get_request(),
        Recipe::Post => director.build_post_request(),
        Recipe::Put => director.build_put_request(),
    }
    Ok(director.builder_mut().build()?)
}

fn from_steps(args: BuilderArgs) -> PatternResult<HttpRequest> {
    let mut builder = HttpRequestBuilder::new();

    if let Some(url) = &args.url {
        builder.set_url(url);
    }
    if let Some(method) = args.method {
        builder.set_method(method);
    }
    for (name, value) in &args.header {
        builder.add_header(name, value);
    }
    if !args.body.is_empty() {
        builder.set_body(args.body.into_iter().collect::<BTreeMap<_, _>>());
    }
    if let Some(timeout) = args.timeout {
        builder.set_timeout(timeout);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps() -> BuilderArgs {
        BuilderArgs {
            recipe: None,
            url: Some("https://api.test/items".into()),
            method: Some(HttpMethod::Patch),
            header: vec![("X-Id".into(), "7".into())],
            body: vec![("name".into(), "widget".into())],
            timeout: None,
        }
    }

    #[test]
    fn post_recipe_carries_body_and_auth() {
        let request = from_recipe(Recipe::Post).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.timeout, 10);
        assert_eq!(request.body.get("key").map(String::as_str), Some("value"));
        assert_eq!(
            request.headers.get("Authorization").map(String::as_str),
            Some("Bearer 1234567890")
        );
    }

    #[test]
    fn manual_steps_use_default_timeout() {
        let request = from_steps(steps()).unwrap();
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.timeout, 30);
        assert_eq!(request.headers.len(), 1);
    }

    #[test]
    fn missing_url_is_rejected() {
        let mut args = steps();
        args.url = None;
        assert!(from_steps(args).is_err());
    }
}
