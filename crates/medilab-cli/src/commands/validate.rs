use anyhow::Result;

use medilab_core::validation::{validate, FieldRule};

pub fn run(value: &str, rules: &[FieldRule], json: bool) -> Result<bool> {
    let result = validate(value, rules);

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        match result.message() {
            None => println!("valid"),
            Some(message) => println!("invalid: {}", message),
        }
    }

    Ok(result.is_valid())
}
